use std::sync::Arc;

use storefront_core::{Code, Entity, Price};

use crate::component::CatalogComponent;

/// A named group of components priced as the sum of its children.
///
/// The price is derived on every call and never stored, so a bundle always
/// agrees with its children.
#[derive(Debug, Clone)]
pub struct Bundle {
    code: Code,
    name: String,
    children: Vec<Arc<dyn CatalogComponent>>,
}

impl Bundle {
    pub fn new(code: impl Into<Code>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a child. Duplicates are kept.
    pub fn add(&mut self, child: Arc<dyn CatalogComponent>) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Arc<dyn CatalogComponent>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Entity for Bundle {
    fn code(&self) -> &str {
        self.code.as_str()
    }
}

impl CatalogComponent for Bundle {
    fn price(&self) -> Price {
        self.children.iter().map(|child| child.price()).sum()
    }

    fn display(&self) -> String {
        let mut out = format!("Bundle: {}", self.name);
        for child in &self.children {
            for line in child.display().lines() {
                out.push_str("\n  ");
                out.push_str(line);
            }
        }
        out
    }
}
