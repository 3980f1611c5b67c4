use crate::error::{AppError, AppResult};
use crate::models::Item;

/// The authoritative, ordered list of items held by the service.
///
/// Items have no identity beyond their position: removal is by index, and
/// every item after a removed one shifts down by one.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append `item` at the end.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove and return the item at `row`. Out-of-range rows leave the
    /// inventory untouched.
    pub fn remove(&mut self, row: usize) -> AppResult<Item> {
        if row >= self.items.len() {
            return Err(AppError::InvalidRow);
        }
        Ok(self.items.remove(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(name: &str) -> Item {
        Item::new(name, "Test", "1", "2024-01-01", "2024-01-10")
    }

    fn names(inv: &Inventory) -> Vec<&str> {
        inv.items().iter().map(|i| i.item.as_str()).collect()
    }

    #[test]
    fn new_inventory_is_empty() {
        let inv = Inventory::new();
        assert!(inv.is_empty());
        assert_eq!(inv.len(), 0);
    }

    #[test]
    fn add_appends_at_the_end() {
        let mut inv = Inventory::new();
        inv.add(make("Milk"));
        inv.add(make("Eggs"));
        assert_eq!(names(&inv), ["Milk", "Eggs"]);
        assert_eq!(inv.items().last(), Some(&make("Eggs")));
    }

    #[test]
    fn remove_shifts_later_items_down() {
        let mut inv = Inventory::new();
        for name in ["A", "B", "C", "D"] {
            inv.add(make(name));
        }

        let removed = inv.remove(1).unwrap();
        assert_eq!(removed.item, "B");
        assert_eq!(names(&inv), ["A", "C", "D"]);

        // positions are recomputed against the shorter list
        let removed = inv.remove(1).unwrap();
        assert_eq!(removed.item, "C");
        assert_eq!(names(&inv), ["A", "D"]);
    }

    #[test]
    fn remove_out_of_range_is_rejected_without_change() {
        let mut inv = Inventory::new();
        inv.add(make("Milk"));
        inv.add(make("Eggs"));

        assert_eq!(inv.remove(2), Err(AppError::InvalidRow));
        assert_eq!(inv.remove(5), Err(AppError::InvalidRow));
        assert_eq!(names(&inv), ["Milk", "Eggs"]);
    }

    #[test]
    fn remove_from_empty_is_rejected() {
        let mut inv = Inventory::new();
        assert_eq!(inv.remove(0), Err(AppError::InvalidRow));
    }

    #[test]
    fn duplicate_items_are_kept() {
        let mut inv = Inventory::new();
        inv.add(make("Milk"));
        inv.add(make("Milk"));
        assert_eq!(inv.len(), 2);
        inv.remove(0).unwrap();
        assert_eq!(names(&inv), ["Milk"]);
    }
}
