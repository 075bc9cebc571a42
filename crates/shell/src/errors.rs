use std::io;

use thiserror::Error;

use storefront_core::{DomainError, RenderError};

/// Failures that end a shell session.
///
/// Domain errors never end up here: they are reported with [`warning_for`]
/// and the menu resumes.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("console io failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// One-line, user-facing description of a recoverable domain error.
pub fn warning_for(err: &DomainError) -> String {
    match err {
        DomainError::NotFound { kind, code } => format!("no {kind} found with provided code {code}"),
        DomainError::InvalidInput(msg) => msg.clone(),
    }
}
