//! Console listings: rounded tables or pretty JSON over the same rows.

use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use thiserror::Error;

/// Placeholder printed for an empty listing in table form.
pub const EMPTY_LISTING: &str = "(none)";

/// How listings are written to the console.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render listing as json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render `rows` in the requested format.
///
/// Table output has a centered header row; an empty slice renders as
/// [`EMPTY_LISTING`]. JSON output is always an array, possibly empty.
pub fn render_rows<T>(rows: &[T], format: OutputFormat) -> Result<String, RenderError>
where
    T: Tabled + Serialize,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Table if rows.is_empty() => Ok(EMPTY_LISTING.to_string()),
        OutputFormat::Table => Ok(Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string()),
    }
}
