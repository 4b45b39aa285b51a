/// Metadata record format — one JSON object per `<id>.metadata` file.
use super::content::ContentIndex;
use crate::model::item::{DOCUMENT_TYPE_TAG, PLACEHOLDER_NAME};
use crate::model::{Item, ItemKind};
use compact_str::CompactString;
use serde::Deserialize;

/// The fields rmtree reads from a record. Everything else is ignored.
///
/// Fields are optional so an explicit `null` reads the same as a missing
/// field.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordMetadata {
    pub visible_name: Option<String>,
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
    pub parent: Option<String>,
    pub deleted: Option<bool>,
}

impl RecordMetadata {
    /// Parse a record from raw bytes.
    pub fn parse(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Turn the record into an [`Item`], or `None` if the store marked it
    /// deleted.
    ///
    /// Empty names and types get their defaults. Documents are classified
    /// by their auxiliary content files; folders never carry a subtype.
    pub fn into_item(self, id: &str, content: &ContentIndex) -> Option<Item> {
        if self.deleted.unwrap_or_default() {
            return None;
        }

        let name = match self.visible_name {
            Some(name) if !name.is_empty() => CompactString::from(name),
            _ => CompactString::new(PLACEHOLDER_NAME),
        };
        let type_tag = match self.type_tag.as_deref() {
            Some(tag) if !tag.is_empty() => tag,
            _ => DOCUMENT_TYPE_TAG,
        };

        let kind = ItemKind::from_type_tag(type_tag);
        let subtype = match kind {
            ItemKind::Folder => None,
            ItemKind::Document => Some(content.classify(id)),
        };

        Some(Item {
            id: CompactString::new(id),
            name,
            kind,
            parent: CompactString::from(self.parent.unwrap_or_default()),
            subtype,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocSubtype, ParentKey};

    fn item_from(json: &str, id: &str, content: &ContentIndex) -> Option<Item> {
        RecordMetadata::parse(json.as_bytes())
            .expect("valid json")
            .into_item(id, content)
    }

    #[test]
    fn reads_store_field_names() {
        let item = item_from(
            r#"{"visibleName":"Books","type":"CollectionType","parent":"","deleted":false,"pinned":true}"#,
            "f1",
            &ContentIndex::default(),
        )
        .expect("not deleted");

        assert_eq!(item.id, "f1");
        assert_eq!(item.name, "Books");
        assert_eq!(item.kind, ItemKind::Folder);
        assert_eq!(item.subtype, None);
        assert_eq!(item.parent, "");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let item = item_from("{}", "n1", &ContentIndex::default()).expect("not deleted");
        assert_eq!(item.name, PLACEHOLDER_NAME);
        assert_eq!(item.kind, ItemKind::Document);
        assert_eq!(item.subtype, Some(DocSubtype::Notebook));
    }

    #[test]
    fn null_fields_take_defaults() {
        let item = item_from(
            r#"{"visibleName":null,"type":null,"parent":null,"deleted":null}"#,
            "n2",
            &ContentIndex::default(),
        )
        .expect("not deleted");
        assert_eq!(item.name, PLACEHOLDER_NAME);
        assert_eq!(item.kind, ItemKind::Document);
        assert_eq!(item.parent_key(), ParentKey::Root);
    }

    #[test]
    fn null_name_alone_gets_placeholder() {
        let item = item_from(
            r#"{"visibleName":null,"type":"CollectionType","parent":"p"}"#,
            "f2",
            &ContentIndex::default(),
        )
        .expect("not deleted");
        assert_eq!(item.name, PLACEHOLDER_NAME);
        assert_eq!(item.kind, ItemKind::Folder);
        assert_eq!(item.parent, "p");
    }

    #[test]
    fn deleted_records_are_dropped() {
        let item = item_from(
            r#"{"visibleName":"Old","deleted":true}"#,
            "d1",
            &ContentIndex::default(),
        );
        assert!(item.is_none());
    }

    #[test]
    fn epub_wins_over_pdf() {
        let mut content = ContentIndex::default();
        content.insert_pdf("both");
        content.insert_epub("both");
        content.insert_pdf("pdf-only");

        let both = item_from(r#"{"visibleName":"B"}"#, "both", &content).unwrap();
        let pdf = item_from(r#"{"visibleName":"P"}"#, "pdf-only", &content).unwrap();
        assert_eq!(both.subtype, Some(DocSubtype::Epub));
        assert_eq!(pdf.subtype, Some(DocSubtype::Pdf));
    }

    #[test]
    fn folders_ignore_content_files() {
        let mut content = ContentIndex::default();
        content.insert_pdf("f");
        let item = item_from(r#"{"type":"CollectionType"}"#, "f", &content).unwrap();
        assert_eq!(item.subtype, None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(RecordMetadata::parse(b"{not json").is_err());
        assert!(RecordMetadata::parse(br#"{"deleted":"yes"}"#).is_err());
    }
}
