use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{QuickConsumeError, Result};
use crate::models::ConsumableItem;

/// The items a player is carrying, keyed by lowercase name.
pub struct Inventory {
    items: HashMap<String, ConsumableItem>,
}

impl Inventory {
    /// Build an inventory from a list of items.
    ///
    /// Duplicate names merge their stacks.
    pub fn new(items: Vec<ConsumableItem>) -> Self {
        let mut map: HashMap<String, ConsumableItem> = HashMap::new();
        for item in items {
            match map.entry(item.key()) {
                std::collections::hash_map::Entry::Occupied(mut existing) => {
                    existing.get_mut().stack += item.stack;
                }
                std::collections::hash_map::Entry::Vacant(slot) => {
                    slot.insert(item);
                }
            }
        }
        Self { items: map }
    }

    /// Get an item by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&ConsumableItem> {
        self.items.get(&name.to_lowercase())
    }

    /// Consume one unit from an item's stack.
    ///
    /// Returns the remaining stack count; the item is removed from the
    /// inventory when its stack reaches zero, the way the host removes a
    /// depleted item.
    pub fn consume_one(&mut self, name: &str) -> Result<u32> {
        let key = name.to_lowercase();
        let item = self
            .items
            .get_mut(&key)
            .ok_or_else(|| QuickConsumeError::ItemNotFound(name.to_string()))?;

        if item.stack == 0 {
            return Err(QuickConsumeError::EmptyStack(item.name.clone()));
        }

        item.stack -= 1;
        let remaining = item.stack;
        if remaining == 0 {
            self.items.remove(&key);
        }
        Ok(remaining)
    }

    /// All items with at least one unit.
    pub fn carried(&self) -> Vec<&ConsumableItem> {
        let mut items: Vec<&ConsumableItem> =
            self.items.values().filter(|i| i.stack > 0).collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    /// Convert back to a list for serialization.
    pub fn to_items(&self) -> Vec<ConsumableItem> {
        let mut items: Vec<ConsumableItem> = self.items.values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Load items from a JSON file.
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<ConsumableItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<ConsumableItem> = serde_json::from_str(&content)?;
    Ok(items)
}

/// Save items to a JSON file.
pub fn save_items<P: AsRef<Path>>(path: P, items: &[ConsumableItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<ConsumableItem> {
        vec![
            ConsumableItem::new("Parsnip", 18, 3),
            ConsumableItem::new("Coffee", 3, 1),
        ]
    }

    #[test]
    fn test_get_case_insensitive() {
        let inventory = Inventory::new(sample_items());
        assert!(inventory.get("parsnip").is_some());
        assert!(inventory.get("PARSNIP").is_some());
        assert!(inventory.get("Melon").is_none());
    }

    #[test]
    fn test_consume_one_removes_depleted() {
        let mut inventory = Inventory::new(sample_items());

        assert_eq!(inventory.consume_one("Parsnip").unwrap(), 2);
        assert_eq!(inventory.get("Parsnip").unwrap().stack, 2);

        assert_eq!(inventory.consume_one("Coffee").unwrap(), 0);
        assert!(inventory.get("Coffee").is_none());
        assert!(matches!(
            inventory.consume_one("Coffee"),
            Err(QuickConsumeError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_names_merge_stacks() {
        let inventory = Inventory::new(vec![
            ConsumableItem::new("Parsnip", 18, 2),
            ConsumableItem::new("parsnip", 18, 3),
        ]);
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.get("Parsnip").unwrap().stack, 5);
    }
}
