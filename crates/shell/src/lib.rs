//! Interactive console front ends: prompting, menus and CLI configuration.

pub mod catalog_shell;
pub mod config;
pub mod document_shell;
pub mod errors;
pub mod prompt;

pub use config::ShellArgs;
pub use errors::ShellError;
pub use prompt::{Prompter, Step};
