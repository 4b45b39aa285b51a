/// Decorations for tree lines: ANSI colors, icons, type labels.
///
/// All escape codes and glyphs are defined here so the renderer refers to
/// semantically named values rather than raw strings.
use crate::model::{DocSubtype, Item, ItemKind};

pub const COLOR_FOLDER: &str = "\x1b[36m";
pub const COLOR_PDF: &str = "\x1b[31m";
pub const COLOR_EPUB: &str = "\x1b[32m";
pub const COLOR_RESET: &str = "\x1b[0m";

pub const ICON_FOLDER: &str = "📁 ";
pub const ICON_PDF: &str = "📕 ";
pub const ICON_EPUB: &str = "📗 ";
pub const ICON_NOTEBOOK: &str = "📓 ";

pub const BRANCH: &str = "├── ";
pub const CORNER: &str = "└── ";
pub const PIPE: &str = "│   ";
pub const BLANK: &str = "    ";

/// Label of the synthetic trash folder.
pub const TRASH_LABEL: &str = "Trash";

/// Per-line decoration strings, empty where the policy turns them off.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Decoration {
    pub color: &'static str,
    pub reset: &'static str,
    pub icon: &'static str,
    pub label: String,
    pub id: String,
}

/// Which decorations to draw. All off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatPolicy {
    pub color: bool,
    pub icons: bool,
    pub labels: bool,
    pub ids: bool,
}

impl FormatPolicy {
    /// Decorations for an item line.
    ///
    /// Item lines always end the name with a reset, even with color off.
    pub fn decorate(&self, item: &Item) -> Decoration {
        let subtype = match item.kind {
            ItemKind::Folder => None,
            ItemKind::Document => Some(item.subtype.unwrap_or(DocSubtype::Notebook)),
        };

        let mut deco = Decoration {
            reset: COLOR_RESET,
            ..Decoration::default()
        };
        if self.color {
            deco.color = match subtype {
                None => COLOR_FOLDER,
                Some(DocSubtype::Pdf) => COLOR_PDF,
                Some(DocSubtype::Epub) => COLOR_EPUB,
                Some(DocSubtype::Notebook) => "",
            };
        }
        if self.icons {
            deco.icon = match subtype {
                None => ICON_FOLDER,
                Some(DocSubtype::Pdf) => ICON_PDF,
                Some(DocSubtype::Epub) => ICON_EPUB,
                Some(DocSubtype::Notebook) => ICON_NOTEBOOK,
            };
        }
        if let Some(subtype) = subtype {
            if self.labels {
                deco.label = format!(" ({})", subtype.label());
            }
            if self.ids {
                deco.id = format!(" [{}]", item.id);
            }
        }
        deco
    }

    /// Decorations for the synthetic trash folder. Its reset follows the
    /// color setting.
    pub fn decorate_trash(&self) -> Decoration {
        Decoration {
            color: if self.color { COLOR_FOLDER } else { "" },
            reset: if self.color { COLOR_RESET } else { "" },
            icon: if self.icons { ICON_FOLDER } else { "" },
            ..Decoration::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_policy_keeps_only_the_reset() {
        let item = Item::document("id", "Doc", "", DocSubtype::Pdf);
        let expected = Decoration {
            reset: COLOR_RESET,
            ..Decoration::default()
        };
        assert_eq!(FormatPolicy::default().decorate(&item), expected);
    }

    #[test]
    fn plain_trash_has_no_escape_codes() {
        assert_eq!(FormatPolicy::default().decorate_trash(), Decoration::default());
    }

    #[test]
    fn folders_never_get_label_or_id() {
        let policy = FormatPolicy {
            color: true,
            icons: true,
            labels: true,
            ids: true,
        };
        let deco = policy.decorate(&Item::folder("f", "F", ""));
        assert_eq!(deco.color, COLOR_FOLDER);
        assert_eq!(deco.icon, ICON_FOLDER);
        assert!(deco.label.is_empty());
        assert!(deco.id.is_empty());
    }

    #[test]
    fn notebooks_are_uncolored_but_labelled() {
        let policy = FormatPolicy {
            color: true,
            icons: true,
            labels: true,
            ids: true,
        };
        let deco = policy.decorate(&Item::document("n1", "N", "", DocSubtype::Notebook));
        assert_eq!(deco.color, "");
        assert_eq!(deco.reset, COLOR_RESET);
        assert_eq!(deco.icon, ICON_NOTEBOOK);
        assert_eq!(deco.label, " (notebook)");
        assert_eq!(deco.id, " [n1]");
    }
}
