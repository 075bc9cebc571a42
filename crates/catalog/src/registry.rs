use std::sync::Arc;

use storefront_core::Entity;

/// Ordered, code-addressed collection of shared entities.
///
/// Codes are not unique: `add` never rejects, `find` returns the first match
/// and `remove` drops every match.
#[derive(Debug)]
pub struct Registry<T: ?Sized> {
    entries: Vec<Arc<T>>,
}

impl<T: ?Sized> Registry<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order.
    pub fn list(&self) -> &[Arc<T>] {
        &self.entries
    }
}

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity + ?Sized> Registry<T> {
    /// Append unconditionally.
    pub fn add(&mut self, entity: Arc<T>) {
        self.entries.push(entity);
    }

    /// First entry registered under `code`.
    pub fn find(&self, code: &str) -> Option<Arc<T>> {
        self.entries.iter().find(|e| e.has_code(code)).cloned()
    }

    /// Remove every entry registered under `code`.
    ///
    /// Returns the removed entries in their former order; empty when nothing
    /// matched. Afterwards `find(code)` is always `None`.
    pub fn remove(&mut self, code: &str) -> Vec<Arc<T>> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| e.has_code(code));
        self.entries = kept;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Tag {
        code: &'static str,
        n: u32,
    }

    impl Entity for Tag {
        fn code(&self) -> &str {
            self.code
        }
    }

    fn tag(code: &'static str, n: u32) -> Arc<Tag> {
        Arc::new(Tag { code, n })
    }

    #[test]
    fn find_returns_first_match() {
        let mut reg = Registry::new();
        reg.add(tag("A", 1));
        reg.add(tag("B", 2));
        reg.add(tag("A", 3));

        assert_eq!(reg.find("A").map(|t| t.n), Some(1));
        assert_eq!(reg.find("B").map(|t| t.n), Some(2));
        assert!(reg.find("C").is_none());
    }

    #[test]
    fn remove_drops_every_match_and_returns_them_in_order() {
        let mut reg = Registry::new();
        reg.add(tag("A", 1));
        reg.add(tag("B", 2));
        reg.add(tag("A", 3));

        let removed: Vec<u32> = reg.remove("A").iter().map(|t| t.n).collect();
        assert_eq!(removed, vec![1, 3]);
        assert!(reg.find("A").is_none());
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.list()[0].n, 2);
    }

    #[test]
    fn remove_of_unknown_code_is_empty_and_harmless() {
        let mut reg = Registry::new();
        reg.add(tag("A", 1));
        assert!(reg.remove("Z").is_empty());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn registry_of_trait_objects() {
        let mut reg: Registry<dyn Entity> = Registry::new();
        reg.add(tag("A", 1) as Arc<dyn Entity>);
        assert_eq!(reg.find("A").map(|e| e.code().to_string()), Some("A".to_string()));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: once a code is removed it is never found again.
            #[test]
            fn removed_code_is_never_found(
                codes in proptest::collection::vec(prop_oneof![Just("A"), Just("B"), Just("C")], 0..30),
                target in prop_oneof![Just("A"), Just("B"), Just("C")],
            ) {
                let mut reg = Registry::new();
                for (i, code) in codes.iter().enumerate() {
                    reg.add(tag(*code, i as u32));
                }
                let expected_removed = codes.iter().filter(|c| **c == target).count();
                let removed = reg.remove(target);

                prop_assert_eq!(removed.len(), expected_removed);
                prop_assert!(reg.find(target).is_none());
                prop_assert_eq!(reg.len(), codes.len() - expected_removed);
            }

            /// Property: listing preserves insertion order, duplicates included.
            #[test]
            fn list_preserves_insertion_order(
                codes in proptest::collection::vec(prop_oneof![Just("A"), Just("B")], 0..30),
            ) {
                let mut reg = Registry::new();
                for (i, code) in codes.iter().enumerate() {
                    reg.add(tag(*code, i as u32));
                }
                let seen: Vec<u32> = reg.list().iter().map(|t| t.n).collect();
                let expected: Vec<u32> = (0..codes.len() as u32).collect();
                prop_assert_eq!(seen, expected);
            }
        }
    }
}
