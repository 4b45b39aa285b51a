/// The flat item table produced by the loader, keyed by item ID.
use super::item::Item;
use compact_str::CompactString;
use std::collections::HashMap;

/// Every loaded item, one entry per ID.
///
/// Inserting an ID that is already present replaces the earlier item
/// outright. Nothing is merged.
#[derive(Debug, Clone, Default)]
pub struct ItemTable {
    items: HashMap<CompactString, Item>,
}

impl ItemTable {
    /// Create an empty table with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashMap::with_capacity(capacity),
        }
    }

    /// Insert an item, returning the one it replaced (if any).
    pub fn insert(&mut self, item: Item) -> Option<Item> {
        self.items.insert(item.id.clone(), item)
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub(crate) fn into_items(self) -> impl Iterator<Item = Item> {
        self.items.into_values()
    }
}

impl FromIterator<Item> for ItemTable {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        let mut table = ItemTable::default();
        for item in iter {
            table.insert(item);
        }
        table
    }
}
