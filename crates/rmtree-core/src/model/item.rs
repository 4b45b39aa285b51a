/// A single document or folder from the document store.
///
/// Items are stored in a flat arena (`Vec<Item>`) owned by the
/// [`Hierarchy`](super::Hierarchy). Relationships use `NodeIndex` values
/// rather than references, so a malformed parent chain can never produce
/// recursive ownership.
use compact_str::CompactString;

/// Display name used when a record carries no name of its own.
pub const PLACEHOLDER_NAME: &str = "Unnamed";

/// Parent value that places an item in the trash bucket.
pub const TRASH_PARENT: &str = "trash";

/// Type tag the store uses for folders. Anything else is a document.
pub const FOLDER_TYPE_TAG: &str = "CollectionType";

/// Type tag applied when a record leaves its type empty.
pub const DOCUMENT_TYPE_TAG: &str = "DocumentType";

/// Lightweight index into the hierarchy arena.
///
/// Uses `u32` to keep child lists small.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Create a new `NodeIndex` from a `usize`.
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "NodeIndex overflow");
        Self(index as u32)
    }

    /// Return the index as a `usize` for Vec indexing.
    #[inline]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Folder or document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Folder,
    Document,
}

impl ItemKind {
    /// Classify a raw type tag from a metadata record.
    pub fn from_type_tag(tag: &str) -> Self {
        if tag == FOLDER_TYPE_TAG {
            Self::Folder
        } else {
            Self::Document
        }
    }

    /// Sibling ordering rank: folders sort before documents.
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Self::Folder => 0,
            Self::Document => 1,
        }
    }
}

/// What kind of content backs a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocSubtype {
    Pdf,
    Epub,
    /// Handwritten notebook. Has no single exportable content file.
    Notebook,
}

impl DocSubtype {
    /// File extension of the backing content file, if there is one.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            Self::Pdf => Some("pdf"),
            Self::Epub => Some("epub"),
            Self::Notebook => None,
        }
    }

    /// Lowercase label used in listings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Epub => "epub",
            Self::Notebook => "notebook",
        }
    }
}

/// Where an item hangs in the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParentKey<'a> {
    /// Top level (empty parent in the record).
    Root,
    /// The trash bucket.
    Trash,
    /// Inside the item with this ID.
    Item(&'a str),
}

/// Ordering key for siblings: kind rank first, then name.
///
/// The item ID is carried as a final tie-breaker so that siblings with the
/// same kind and name still come out in a reproducible order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey<'a> {
    pub rank: u8,
    pub name: &'a str,
    pub id: &'a str,
}

/// One node of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Store-assigned identifier (the record's file stem).
    pub id: CompactString,

    /// Display name, never empty after loading.
    pub name: CompactString,

    pub kind: ItemKind,

    /// Raw parent value from the record: empty, [`TRASH_PARENT`], or an ID.
    pub parent: CompactString,

    /// Backing content type. Always `None` for folders.
    pub subtype: Option<DocSubtype>,
}

impl Item {
    /// Create a folder item.
    pub fn folder(
        id: impl Into<CompactString>,
        name: impl Into<CompactString>,
        parent: impl Into<CompactString>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: ItemKind::Folder,
            parent: parent.into(),
            subtype: None,
        }
    }

    /// Create a document item with the given content type.
    pub fn document(
        id: impl Into<CompactString>,
        name: impl Into<CompactString>,
        parent: impl Into<CompactString>,
        subtype: DocSubtype,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: ItemKind::Document,
            parent: parent.into(),
            subtype: Some(subtype),
        }
    }

    #[inline]
    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }

    /// Bucket this item belongs to.
    pub fn parent_key(&self) -> ParentKey<'_> {
        match self.parent.as_str() {
            "" => ParentKey::Root,
            TRASH_PARENT => ParentKey::Trash,
            id => ParentKey::Item(id),
        }
    }

    pub fn sort_key(&self) -> SortKey<'_> {
        SortKey {
            rank: self.kind.rank(),
            name: &self.name,
            id: &self.id,
        }
    }
}
