use std::collections::HashSet;

use crate::model::{Item, ItemId};

/// Local cache of the remote collection, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a fresh server snapshot.
    ///
    /// Order is kept as received. A repeated id keeps its first occurrence;
    /// the number of dropped duplicates is returned.
    pub fn replace_all(&mut self, items: Vec<Item>) -> usize {
        let mut seen = HashSet::with_capacity(items.len());
        let before = items.len();
        self.items = items
            .into_iter()
            .filter(|item| seen.insert(item.id()))
            .collect();
        before - self.items.len()
    }

    /// Drop one item by id. Returns false when it was not cached.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, title: &str) -> Item {
        Item::new(ItemId::new(id), title, "", false)
    }

    #[test]
    fn replace_all_keeps_server_order() {
        let mut store = ItemStore::new();
        store.replace_all(vec![item(3, "c"), item(1, "a"), item(2, "b")]);
        let ids: Vec<i64> = store.items().iter().map(|i| i.id().value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn replace_all_drops_duplicate_ids() {
        let mut store = ItemStore::new();
        let dropped = store.replace_all(vec![item(1, "first"), item(2, "b"), item(1, "again")]);
        assert_eq!(dropped, 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(ItemId::new(1)).unwrap().title(), "first");
    }

    #[test]
    fn remove_reports_presence() {
        let mut store = ItemStore::new();
        store.replace_all(vec![item(1, "a"), item(2, "b")]);
        assert!(store.remove(ItemId::new(1)));
        assert!(!store.remove(ItemId::new(1)));
        assert!(!store.contains(ItemId::new(1)));
        assert_eq!(store.len(), 1);
    }
}
