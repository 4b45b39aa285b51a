/// Arena-backed hierarchy rebuilt from the flat item table.
///
/// All items live in a single `Vec<Item>`. Parent → children edges are kept
/// in a separate index of `NodeIndex` lists, one bucket per parent key, so
/// the structure never owns itself recursively. A parent chain that loops
/// back on itself is therefore harmless to hold; traversals bound their own
/// depth with [`MAX_DEPTH`].
use super::item::{Item, NodeIndex, ParentKey};
use super::summary::Summary;
use super::table::ItemTable;
use compact_str::CompactString;
use std::collections::HashMap;

/// Deepest level a traversal descends to. Root items are depth 0.
pub const MAX_DEPTH: usize = 50;

/// Items plus their ordered child index.
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    /// Arena: every loaded item, reachable or not.
    nodes: Vec<Item>,

    /// Children of the synthetic root.
    root: Vec<NodeIndex>,

    /// Children of the synthetic trash folder.
    trash: Vec<NodeIndex>,

    /// Children keyed by their parent's ID.
    ///
    /// No existence check is made on the key: a bucket whose parent was
    /// never loaded is kept but nothing ever walks into it.
    by_parent: HashMap<CompactString, Vec<NodeIndex>>,
}

impl Hierarchy {
    /// Group every item under its parent key and sort each bucket.
    ///
    /// Pure and deterministic for a given table.
    pub fn build(table: ItemTable) -> Self {
        let mut nodes: Vec<Item> = table.into_items().collect();
        // Arena order is irrelevant to traversal, but a fixed order keeps
        // `items()` reproducible across runs.
        nodes.sort_unstable_by(|a, b| a.id.cmp(&b.id));

        let mut hierarchy = Self {
            nodes,
            root: Vec::new(),
            trash: Vec::new(),
            by_parent: HashMap::new(),
        };

        for (i, item) in hierarchy.nodes.iter().enumerate() {
            let idx = NodeIndex::new(i);
            match item.parent_key() {
                ParentKey::Root => hierarchy.root.push(idx),
                ParentKey::Trash => hierarchy.trash.push(idx),
                ParentKey::Item(parent) => hierarchy
                    .by_parent
                    .entry(CompactString::new(parent))
                    .or_default()
                    .push(idx),
            }
        }

        let nodes = &hierarchy.nodes;
        let sort_bucket = |bucket: &mut Vec<NodeIndex>| {
            bucket.sort_unstable_by(|a, b| {
                nodes[a.idx()].sort_key().cmp(&nodes[b.idx()].sort_key())
            });
        };
        sort_bucket(&mut hierarchy.root);
        sort_bucket(&mut hierarchy.trash);
        for bucket in hierarchy.by_parent.values_mut() {
            sort_bucket(bucket);
        }

        hierarchy
    }

    /// Ordered children of a parent key. Unknown keys yield an empty slice.
    pub fn children(&self, key: ParentKey<'_>) -> &[NodeIndex] {
        match key {
            ParentKey::Root => &self.root,
            ParentKey::Trash => &self.trash,
            ParentKey::Item(id) => self.by_parent.get(id).map(Vec::as_slice).unwrap_or(&[]),
        }
    }

    /// Children a traversal should descend into below `index`.
    ///
    /// Only folders contain anything. Items whose parent is a document are
    /// tolerated in the index but never reached.
    pub fn children_of(&self, index: NodeIndex) -> &[NodeIndex] {
        let item = self.item(index);
        if item.is_folder() {
            self.children(ParentKey::Item(&item.id))
        } else {
            &[]
        }
    }

    #[inline]
    pub fn root(&self) -> &[NodeIndex] {
        &self.root
    }

    #[inline]
    pub fn trash(&self) -> &[NodeIndex] {
        &self.trash
    }

    #[inline]
    pub fn item(&self, index: NodeIndex) -> &Item {
        &self.nodes[index.idx()]
    }

    /// All items, including those no traversal can reach.
    pub fn items(&self) -> &[Item] {
        &self.nodes
    }

    /// Directory and file totals over every item, plus one directory for a
    /// non-empty trash bucket.
    pub fn summary(&self) -> Summary {
        let directories = self.nodes.iter().filter(|n| n.is_folder()).count() as u64;
        let files = self.nodes.len() as u64 - directories;
        Summary {
            directories: directories + u64::from(!self.trash.is_empty()),
            files,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocSubtype;

    fn names(h: &Hierarchy, bucket: &[NodeIndex]) -> Vec<String> {
        bucket.iter().map(|&i| h.item(i).name.to_string()).collect()
    }

    #[test]
    fn groups_by_parent_with_empty_as_root() {
        let table: ItemTable = [
            Item::folder("a", "A", ""),
            Item::document("b", "B", "a", DocSubtype::Pdf),
            Item::document("c", "C", "a", DocSubtype::Notebook),
            Item::document("t", "Gone", "trash", DocSubtype::Epub),
        ]
        .into_iter()
        .collect();

        let h = Hierarchy::build(table);

        assert_eq!(names(&h, h.root()), ["A"]);
        assert_eq!(names(&h, h.children(ParentKey::Item("a"))), ["B", "C"]);
        assert_eq!(names(&h, h.trash()), ["Gone"]);
        assert_eq!(h.len(), 4);
    }

    #[test]
    fn every_item_lands_in_exactly_one_bucket() {
        let table: ItemTable = (0..40)
            .map(|i| {
                let parent = match i % 4 {
                    0 => String::new(),
                    1 => "trash".to_string(),
                    _ => format!("{}", i % 3),
                };
                Item::folder(format!("{i}"), format!("n{i}"), parent)
            })
            .collect();
        let h = Hierarchy::build(table);

        let mut seen: Vec<NodeIndex> = h.root().to_vec();
        seen.extend_from_slice(h.trash());
        for id in ["0", "1", "2"] {
            seen.extend_from_slice(h.children(ParentKey::Item(id)));
        }
        seen.sort();
        let before = seen.len();
        seen.dedup();
        assert_eq!(before, seen.len(), "no item appears twice");
        assert_eq!(seen.len(), 40, "every item appears once");
    }

    #[test]
    fn folders_first_then_lexical_name() {
        let table: ItemTable = [
            Item::document("1", "apple", "", DocSubtype::Pdf),
            Item::folder("2", "zebra", ""),
            Item::document("3", "Banana", "", DocSubtype::Epub),
            Item::folder("4", "mango", ""),
        ]
        .into_iter()
        .collect();

        let h = Hierarchy::build(table);
        // Byte-wise comparison: uppercase sorts before lowercase.
        assert_eq!(names(&h, h.root()), ["mango", "zebra", "Banana", "apple"]);
    }

    #[test]
    fn order_independent_of_insertion_order() {
        let items = vec![
            Item::folder("f1", "Same", ""),
            Item::folder("f2", "Same", ""),
            Item::document("d1", "Doc", "", DocSubtype::Pdf),
            Item::folder("f3", "Other", ""),
        ];
        let forward = Hierarchy::build(items.iter().cloned().collect());
        let backward = Hierarchy::build(items.into_iter().rev().collect());

        let ids = |h: &Hierarchy| -> Vec<String> {
            h.root().iter().map(|&i| h.item(i).id.to_string()).collect()
        };
        assert_eq!(ids(&forward), ids(&backward));
        assert_eq!(ids(&forward), ["f3", "f1", "f2", "d1"]);
    }

    #[test]
    fn children_of_documents_are_unreachable() {
        let table: ItemTable = [
            Item::document("doc", "Doc", "", DocSubtype::Pdf),
            Item::document("inner", "Inner", "doc", DocSubtype::Pdf),
        ]
        .into_iter()
        .collect();
        let h = Hierarchy::build(table);

        let doc = h.root()[0];
        assert!(h.children_of(doc).is_empty());
        // Still indexed, just never walked into.
        assert_eq!(h.children(ParentKey::Item("doc")).len(), 1);
    }

    #[test]
    fn summary_counts_full_table_and_trash() {
        let table: ItemTable = [
            Item::folder("a", "A", ""),
            Item::document("b", "B", "a", DocSubtype::Pdf),
            // Orphan: parent never loaded, still counted.
            Item::folder("o", "Orphan", "missing"),
            Item::document("t", "Trashed", "trash", DocSubtype::Notebook),
        ]
        .into_iter()
        .collect();
        let h = Hierarchy::build(table);

        let summary = h.summary();
        assert_eq!(summary.directories, 3);
        assert_eq!(summary.files, 2);
    }

    #[test]
    fn empty_trash_adds_no_directory() {
        let h = Hierarchy::build([Item::folder("a", "A", "")].into_iter().collect());
        assert_eq!(h.summary().to_string(), "1 directory, 0 files");
    }
}
