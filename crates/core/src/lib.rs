//! `storefront-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives and listing rendering (no IO).

pub mod entity;
pub mod error;
pub mod id;
pub mod listing;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::Code;
pub use listing::{render_rows, OutputFormat, RenderError};
pub use value_object::{Percent, Price, ValueObject};
