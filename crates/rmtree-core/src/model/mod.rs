/// Data model for rmtree.
///
/// Re-exports the item types, the loading-time table and the arena
/// hierarchy built from it.
pub mod hierarchy;
pub mod item;
pub mod summary;
pub mod table;

pub use hierarchy::{Hierarchy, MAX_DEPTH};
pub use item::{DocSubtype, Item, ItemKind, NodeIndex, ParentKey, SortKey};
pub use summary::Summary;
pub use table::ItemTable;
