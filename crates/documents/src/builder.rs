use tracing::debug;

use crate::document::RequirementsDocument;
use crate::requirement::RequirementDescription;

/// Accumulates the parts of a [`RequirementsDocument`].
///
/// Header setters overwrite earlier values; requirements append in order.
/// `build` consumes the builder, so a finished document can no longer change.
#[derive(Debug, Clone, Default)]
pub struct RequirementDocumentBuilder {
    author: Option<String>,
    name: Option<String>,
    project: Option<String>,
    requirements: Vec<RequirementDescription>,
}

impl RequirementDocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_author(&mut self, author: impl Into<String>) -> &mut Self {
        self.author = Some(author.into());
        debug!(author = self.author.as_deref(), "document author set");
        self
    }

    pub fn with_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        debug!(name = self.name.as_deref(), "document name set");
        self
    }

    pub fn with_project(&mut self, project: impl Into<String>) -> &mut Self {
        self.project = Some(project.into());
        debug!(project = self.project.as_deref(), "document project set");
        self
    }

    pub fn add_requirement(&mut self, requirement: RequirementDescription) -> &mut Self {
        debug!(code = %requirement.code, "requirement added");
        self.requirements.push(requirement);
        self
    }

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

    pub fn build(self) -> RequirementsDocument {
        debug!(requirements = self.requirements.len(), "document built");
        RequirementsDocument {
            author: self.author,
            name: self.name,
            project: self.project,
            requirements: self.requirements,
        }
    }
}
