use storefront_core::{Entity, Price};

/// Shared read contract of everything the catalog can list or bundle.
///
/// Single items, bundles and discount wrappers all answer the same three
/// questions: their code (via [`Entity`]), their effective price, and a
/// one-entry human-readable summary.
pub trait CatalogComponent: Entity + core::fmt::Debug + Send + Sync {
    /// Effective price of this component right now.
    fn price(&self) -> Price;

    /// Human-readable summary. May span several lines (bundles).
    fn display(&self) -> String;
}
