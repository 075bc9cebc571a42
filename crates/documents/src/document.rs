use serde::{Deserialize, Serialize};

use storefront_core::{render_rows, OutputFormat, RenderError};

use crate::requirement::RequirementDescription;

/// Shown in place of a header field that was never set.
const UNSET: &str = "-";

/// Finished requirements document.
///
/// Produced only by [`RequirementDocumentBuilder::build`]; fields are read-only
/// afterwards. Header fields the builder never received stay `None`.
///
/// [`RequirementDocumentBuilder::build`]: crate::builder::RequirementDocumentBuilder::build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementsDocument {
    pub(crate) author: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) project: Option<String>,
    pub(crate) requirements: Vec<RequirementDescription>,
}

impl RequirementsDocument {
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn requirements(&self) -> &[RequirementDescription] {
        &self.requirements
    }

    /// Printable form: header lines followed by the requirements table, or the
    /// whole document as pretty JSON.
    pub fn render(&self, format: OutputFormat) -> Result<String, RenderError> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Table => {
                let table = render_rows(&self.requirements, OutputFormat::Table)?;
                Ok(format!(
                    "Document: {}\nAuthor: {}\nProject: {}\n{}",
                    self.name().unwrap_or(UNSET),
                    self.author().unwrap_or(UNSET),
                    self.project().unwrap_or(UNSET),
                    table
                ))
            }
        }
    }
}
