use serde::{Deserialize, Serialize};

/// A consumable item as seen at the host boundary.
///
/// Edibility is the host's integer rating; anything at or below zero is not
/// food. The stack count is the only mutable field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumableItem {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Edibility")]
    pub edibility: i32,

    #[serde(rename = "Stack", default = "default_stack")]
    pub stack: u32,
}

fn default_stack() -> u32 {
    1
}

impl ConsumableItem {
    pub fn new(name: impl Into<String>, edibility: i32, stack: u32) -> Self {
        Self {
            name: name.into(),
            edibility,
            stack,
        }
    }

    /// Whether the item counts as food at all.
    #[inline]
    pub fn is_edible(&self) -> bool {
        self.edibility > 0
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!("{}: edibility {}, x{}", self.name, self.edibility, self.stack)
    }
}

impl PartialEq for ConsumableItem {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for ConsumableItem {}

impl std::hash::Hash for ConsumableItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.to_lowercase().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_edible() {
        assert!(ConsumableItem::new("Parsnip", 18, 1).is_edible());
        assert!(!ConsumableItem::new("Stone", 0, 1).is_edible());
        assert!(!ConsumableItem::new("Sap", -2, 1).is_edible());
    }

    #[test]
    fn test_equality_case_insensitive() {
        let a = ConsumableItem::new("Parsnip", 18, 1);
        let b = ConsumableItem::new("PARSNIP", 18, 5);
        assert_eq!(a, b);
    }
}
