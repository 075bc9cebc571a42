use serde::{Deserialize, Serialize};
use tabled::Tabled;

use storefront_core::Code;

/// One coded requirement line of a document.
#[derive(Debug, Clone, PartialEq, Eq, Tabled, Serialize, Deserialize)]
pub struct RequirementDescription {
    pub code: Code,
    pub description: String,
}

impl RequirementDescription {
    pub fn new(code: impl Into<Code>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}
