//! Row shapes used when listing the catalog registries.

use serde::Serialize;
use tabled::Tabled;

use storefront_core::{Entity, Price};

use crate::bundle::Bundle;
use crate::component::CatalogComponent;
use crate::discount::DiscountedItem;
use crate::item::CatalogItem;

#[derive(Debug, Clone, PartialEq, Tabled, Serialize)]
pub struct ProductRow {
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Price")]
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq, Tabled, Serialize)]
pub struct BundleRow {
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Items")]
    pub items: String,
    #[tabled(rename = "Price")]
    pub price: Price,
}

/// One special offer: its `display()` line and the discounted price.
#[derive(Debug, Clone, PartialEq, Tabled, Serialize)]
pub struct DiscountRow {
    #[tabled(rename = "Offer")]
    pub offer: String,
    #[tabled(rename = "Price")]
    pub price: Price,
}

impl From<&CatalogItem> for ProductRow {
    fn from(item: &CatalogItem) -> Self {
        Self {
            code: item.code().to_string(),
            name: item.name().to_string(),
            price: item.price(),
        }
    }
}

impl From<&Bundle> for BundleRow {
    fn from(bundle: &Bundle) -> Self {
        let items = bundle
            .children()
            .iter()
            .map(|child| child.code())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            code: bundle.code().to_string(),
            name: bundle.name().to_string(),
            items,
            price: bundle.price(),
        }
    }
}

impl From<&DiscountedItem> for DiscountRow {
    fn from(offer: &DiscountedItem) -> Self {
        Self {
            offer: offer.display(),
            price: offer.price(),
        }
    }
}
