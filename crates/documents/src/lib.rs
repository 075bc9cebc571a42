//! Requirements documents, assembled step by step with a builder.

pub mod builder;
pub mod document;
pub mod requirement;

pub use builder::RequirementDocumentBuilder;
pub use document::RequirementsDocument;
pub use requirement::RequirementDescription;
