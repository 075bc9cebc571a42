use serde::{Deserialize, Serialize};

use storefront_core::{Code, Entity, Price};

use crate::component::CatalogComponent;

/// A single sellable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    code: Code,
    name: String,
    price: Price,
}

impl CatalogItem {
    pub fn new(code: impl Into<Code>, name: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price: price.into(),
        }
    }

    pub fn code_typed(&self) -> &Code {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for CatalogItem {
    fn code(&self) -> &str {
        self.code.as_str()
    }
}

impl CatalogComponent for CatalogItem {
    fn price(&self) -> Price {
        self.price
    }

    fn display(&self) -> String {
        format!("Product: {} (Price: ${})", self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let item = CatalogItem::new("A1", "Keyboard", 49.5);
        assert_eq!(item.code(), "A1");
        assert_eq!(item.name(), "Keyboard");
        assert_eq!(item.price(), Price::new(49.5));
    }

    #[test]
    fn display_is_one_line_summary() {
        let item = CatalogItem::new("A1", "Keyboard", 10.0);
        assert_eq!(item.display(), "Product: Keyboard (Price: $10.00)");
    }
}
