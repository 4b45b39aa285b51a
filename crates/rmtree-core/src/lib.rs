/// rmtree core — loading, hierarchy reconstruction, and output.
///
/// This crate contains all business logic with no CLI dependencies.
///
/// # Modules
///
/// - [`model`] — Items, the loading-time table, and the arena hierarchy.
/// - [`loader`] — Parallel ingestion of a document-store directory.
/// - [`render`] — Text tree listing with optional decorations.
/// - [`materialize`] — Directory + symlink mirror of the hierarchy.
pub mod loader;
pub mod materialize;
pub mod model;
pub mod render;

pub use loader::{load_items, load_items_with, LoadError, LoadOptions};
pub use materialize::{MaterializeError, MaterializeReport, Materializer};
pub use model::{Hierarchy, Item, ItemTable, Summary};
pub use render::{FormatPolicy, TreeRenderer};
