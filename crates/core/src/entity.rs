//! Entity trait: identity by code.

/// Entity marker + minimal interface.
///
/// Catalog entities are identified by a user-chosen code rather than a
/// generated id. Codes are not required to be unique.
pub trait Entity {
    /// Returns the entity code.
    fn code(&self) -> &str;

    /// True if this entity is registered under `code`.
    fn has_code(&self, code: &str) -> bool {
        self.code() == code
    }
}
