use serde::{Deserialize, Serialize};

use super::{new_id, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub packed: bool,
    pub essential: bool,
}

impl PackingItem {
    /// A user-added item: unpacked and never essential.
    pub fn new(name: String, category: String) -> Self {
        Self {
            id: new_id(),
            name: name.trim().to_string(),
            category,
            packed: false,
            essential: false,
        }
    }
}

impl Record for PackingItem {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_defaults() {
        let item = PackingItem::new("  Hat ".to_string(), "Clothing".to_string());
        assert_eq!(item.name, "Hat");
        assert!(!item.packed);
        assert!(!item.essential);
    }

    #[test]
    fn new_items_get_distinct_ids() {
        let a = PackingItem::new("Hat".to_string(), "Clothing".to_string());
        let b = PackingItem::new("Hat".to_string(), "Clothing".to_string());
        assert_ne!(a.id, b.id);
    }
}
