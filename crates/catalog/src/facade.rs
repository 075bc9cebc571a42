use std::sync::Arc;

use tracing::{debug, info, warn};

use storefront_core::{render_rows, Code, DomainError, DomainResult, OutputFormat, Percent, Price, RenderError};

use crate::bundle::Bundle;
use crate::component::CatalogComponent;
use crate::discount::DiscountedItem;
use crate::item::CatalogItem;
use crate::listing::{BundleRow, DiscountRow, ProductRow};
use crate::registry::Registry;

/// Result of [`CatalogFacade::add_bundle`].
///
/// The bundle is always registered; `missing` lists the requested child codes
/// that matched no product, in request order.
#[derive(Debug, Clone)]
pub struct BundleOutcome {
    pub bundle: Arc<Bundle>,
    pub missing: Vec<String>,
}

impl BundleOutcome {
    /// True when every requested child code resolved.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Single coordination point over the product, bundle and discount registries.
///
/// Build one per run and hand it to whoever needs it; every caller then sees
/// the same three registries.
#[derive(Debug, Default)]
pub struct CatalogFacade {
    products: Registry<CatalogItem>,
    bundles: Registry<Bundle>,
    discounts: Registry<DiscountedItem>,
}

impl CatalogFacade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new product. Duplicate codes are accepted.
    pub fn add_product(
        &mut self,
        name: impl Into<String>,
        code: impl Into<Code>,
        price: impl Into<Price>,
    ) -> Arc<CatalogItem> {
        let item = Arc::new(CatalogItem::new(code, name, price));
        info!(code = %item.code_typed(), name = item.name(), price = %item.price(), "product added");
        self.products.add(Arc::clone(&item));
        item
    }

    /// Register a bundle made of the products registered under `child_codes`.
    ///
    /// Unknown codes are skipped with a warning; the bundle is registered even
    /// if none resolve.
    pub fn add_bundle<I, S>(
        &mut self,
        name: impl Into<String>,
        code: impl Into<Code>,
        child_codes: I,
    ) -> BundleOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bundle = Bundle::new(code, name);
        let mut missing = Vec::new();

        for child_code in child_codes {
            let child_code = child_code.as_ref();
            match self.products.find(child_code) {
                Some(item) => {
                    debug!(bundle = bundle.name(), child = child_code, "bundle child attached");
                    bundle.add(item as Arc<dyn CatalogComponent>);
                }
                None => {
                    warn!(bundle = bundle.name(), child = child_code, "no product found to add to bundle");
                    missing.push(child_code.to_string());
                }
            }
        }

        let bundle = Arc::new(bundle);
        info!(
            name = bundle.name(),
            children = bundle.len(),
            missing = missing.len(),
            price = %bundle.price(),
            "bundle added"
        );
        self.bundles.add(Arc::clone(&bundle));

        BundleOutcome { bundle, missing }
    }

    /// Register a special offer over the product registered under `code`.
    ///
    /// Nothing is registered when no such product exists.
    pub fn add_discount(
        &mut self,
        offer: impl Into<String>,
        discount: impl Into<Percent>,
        code: &str,
    ) -> DomainResult<Arc<DiscountedItem>> {
        let Some(item) = self.products.find(code) else {
            warn!(code, "no product found for discount");
            return Err(DomainError::not_found("product", code));
        };

        let offer = Arc::new(DiscountedItem::new(offer, discount, item));
        info!(
            code,
            offer = offer.offer_name(),
            discount = %offer.discount(),
            price = %offer.discounted_price(),
            "discount added"
        );
        self.discounts.add(Arc::clone(&offer));
        Ok(offer)
    }

    pub fn find_product(&self, code: &str) -> Option<Arc<CatalogItem>> {
        self.products.find(code)
    }

    pub fn find_bundle(&self, code: &str) -> Option<Arc<Bundle>> {
        self.bundles.find(code)
    }

    pub fn find_discount(&self, code: &str) -> Option<Arc<DiscountedItem>> {
        self.discounts.find(code)
    }

    /// Remove every product registered under `code`.
    ///
    /// Bundles and offers already holding the product keep sharing it.
    pub fn remove_product(&mut self, code: &str) -> Vec<Arc<CatalogItem>> {
        let removed = self.products.remove(code);
        info!(code, removed = removed.len(), "products removed");
        removed
    }

    pub fn remove_bundle(&mut self, code: &str) -> Vec<Arc<Bundle>> {
        let removed = self.bundles.remove(code);
        info!(code, removed = removed.len(), "bundles removed");
        removed
    }

    pub fn remove_discount(&mut self, code: &str) -> Vec<Arc<DiscountedItem>> {
        let removed = self.discounts.remove(code);
        info!(code, removed = removed.len(), "discounts removed");
        removed
    }

    pub fn products(&self) -> &[Arc<CatalogItem>] {
        self.products.list()
    }

    pub fn bundles(&self) -> &[Arc<Bundle>] {
        self.bundles.list()
    }

    pub fn discounts(&self) -> &[Arc<DiscountedItem>] {
        self.discounts.list()
    }

    pub fn list_products(&self, format: OutputFormat) -> Result<String, RenderError> {
        let rows: Vec<ProductRow> = self.products().iter().map(|p| ProductRow::from(p.as_ref())).collect();
        render_rows(&rows, format)
    }

    pub fn list_bundles(&self, format: OutputFormat) -> Result<String, RenderError> {
        let rows: Vec<BundleRow> = self.bundles().iter().map(|b| BundleRow::from(b.as_ref())).collect();
        render_rows(&rows, format)
    }

    pub fn list_discounts(&self, format: OutputFormat) -> Result<String, RenderError> {
        let rows: Vec<DiscountRow> = self.discounts().iter().map(|d| DiscountRow::from(d.as_ref())).collect();
        render_rows(&rows, format)
    }
}
