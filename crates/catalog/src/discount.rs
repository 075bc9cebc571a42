use std::sync::Arc;

use storefront_core::{Entity, Percent, Price};

use crate::component::CatalogComponent;
use crate::item::CatalogItem;

/// A special offer over one existing catalog item.
///
/// The wrapper shares the item rather than copying it, and recomputes the
/// discounted price from it on every call. The discount is applied as given:
/// rates above 100 produce negative prices, negative rates raise the price.
#[derive(Debug, Clone)]
pub struct DiscountedItem {
    offer_name: String,
    discount: Percent,
    item: Arc<CatalogItem>,
}

impl DiscountedItem {
    pub fn new(offer_name: impl Into<String>, discount: impl Into<Percent>, item: Arc<CatalogItem>) -> Self {
        Self {
            offer_name: offer_name.into(),
            discount: discount.into(),
            item,
        }
    }

    pub fn offer_name(&self) -> &str {
        &self.offer_name
    }

    pub fn discount(&self) -> Percent {
        self.discount
    }

    /// The wrapped item.
    pub fn item(&self) -> &Arc<CatalogItem> {
        &self.item
    }

    pub fn discounted_price(&self) -> Price {
        self.item.price().discounted(self.discount)
    }

    pub fn details(&self) -> String {
        format!(
            "Special Offer: {} (Discount: {}%)   -  product code:({})",
            self.offer_name,
            self.discount,
            self.item.code()
        )
    }
}

impl Entity for DiscountedItem {
    fn code(&self) -> &str {
        self.item.code()
    }
}

impl CatalogComponent for DiscountedItem {
    fn price(&self) -> Price {
        self.discounted_price()
    }

    fn display(&self) -> String {
        self.details()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Price, b: f64) -> bool {
        (a.amount() - b).abs() < 1e-9
    }

    fn item(price: f64) -> Arc<CatalogItem> {
        Arc::new(CatalogItem::new("A", "Headphones", price))
    }

    #[test]
    fn twenty_percent_off() {
        let offer = DiscountedItem::new("Sale", 20.0, item(100.0));
        assert!(approx(offer.price(), 80.0));
        assert_eq!(offer.code(), "A");
    }

    #[test]
    fn rate_over_one_hundred_is_kept_and_goes_negative() {
        let offer = DiscountedItem::new("Over", 150.0, item(100.0));
        assert!(approx(offer.discounted_price(), -50.0));
        assert_eq!(offer.discount(), Percent::new(150.0));
    }

    #[test]
    fn wrapper_shares_the_item() {
        let shared = item(40.0);
        let offer = DiscountedItem::new("Half", 50.0, Arc::clone(&shared));
        assert!(Arc::ptr_eq(offer.item(), &shared));
        assert!(approx(offer.price(), 20.0));
    }

    #[test]
    fn display_names_offer_rate_and_product() {
        let offer = DiscountedItem::new("Spring", 15.0, item(10.0));
        assert_eq!(
            offer.display(),
            "Special Offer: Spring (Discount: 15%)   -  product code:(A)"
        );
    }
}
