//! Product catalog domain.
//!
//! Single items, bundles (composites of items) and discount wrappers (adapters
//! over an item) share the [`CatalogComponent`] read contract. Each kind lives in
//! its own [`Registry`]; [`CatalogFacade`] coordinates the three. Pure in-memory
//! logic: no console or file IO happens here.

pub mod bundle;
pub mod component;
pub mod discount;
pub mod facade;
pub mod item;
pub mod listing;
pub mod registry;

pub use bundle::Bundle;
pub use component::CatalogComponent;
pub use discount::DiscountedItem;
pub use facade::{BundleOutcome, CatalogFacade};
pub use item::CatalogItem;
pub use listing::{BundleRow, DiscountRow, ProductRow};
pub use registry::Registry;
