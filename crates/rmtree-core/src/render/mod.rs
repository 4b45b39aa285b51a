/// Tree renderer — prints the hierarchy as an indented text tree.
///
/// Output layout:
///
/// ```text
/// .
/// ├── Books
/// │   └── Novel
/// └── Trash
///     └── Old notes
///
/// 1 directory, 2 files
/// ```
///
/// (Item lines also carry a trailing `ESC[0m` reset, omitted above.)
///
/// Root items are walked depth-first, pre-order, recursing fully up to
/// [`MAX_DEPTH`]. The trash bucket is drawn afterwards as one synthetic
/// folder whose direct children are listed flat, without recursing into
/// them.
pub mod style;

use crate::model::{Hierarchy, NodeIndex, Summary, MAX_DEPTH};
use std::io::{self, Write};
use style::{Decoration, BLANK, BRANCH, CORNER, PIPE, TRASH_LABEL};

pub use style::FormatPolicy;

/// Renders one hierarchy with one formatting policy.
pub struct TreeRenderer<'a> {
    hierarchy: &'a Hierarchy,
    policy: FormatPolicy,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(hierarchy: &'a Hierarchy, policy: FormatPolicy) -> Self {
        Self { hierarchy, policy }
    }

    /// Write the full listing, including the trailing summary line, and
    /// return the summary.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<Summary> {
        writeln!(out, ".")?;

        let roots = self.hierarchy.root();
        let trash = self.hierarchy.trash();

        for (i, &idx) in roots.iter().enumerate() {
            let is_last = i + 1 == roots.len() && trash.is_empty();
            self.render_item(out, idx, "", is_last, 0)?;
        }

        if !trash.is_empty() {
            let deco = self.policy.decorate_trash();
            writeln!(
                out,
                "{CORNER}{}{}{TRASH_LABEL}{}",
                deco.color, deco.icon, deco.reset
            )?;
            for (i, &idx) in trash.iter().enumerate() {
                self.write_line(out, idx, BLANK, i + 1 == trash.len())?;
            }
        }

        let summary = self.hierarchy.summary();
        writeln!(out)?;
        writeln!(out, "{summary}")?;
        Ok(summary)
    }

    /// Render the listing into a `String`.
    pub fn render_to_string(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn render_item<W: Write>(
        &self,
        out: &mut W,
        index: NodeIndex,
        prefix: &str,
        is_last: bool,
        depth: usize,
    ) -> io::Result<()> {
        if depth > MAX_DEPTH {
            return Ok(());
        }

        self.write_line(out, index, prefix, is_last)?;

        let children = self.hierarchy.children_of(index);
        if children.is_empty() {
            return Ok(());
        }

        let child_prefix = format!("{prefix}{}", if is_last { BLANK } else { PIPE });
        for (i, &child) in children.iter().enumerate() {
            self.render_item(out, child, &child_prefix, i + 1 == children.len(), depth + 1)?;
        }
        Ok(())
    }

    fn write_line<W: Write>(
        &self,
        out: &mut W,
        index: NodeIndex,
        prefix: &str,
        is_last: bool,
    ) -> io::Result<()> {
        let item = self.hierarchy.item(index);
        let connector = if is_last { CORNER } else { BRANCH };
        let Decoration {
            color,
            reset,
            icon,
            label,
            id,
        } = self.policy.decorate(item);

        writeln!(
            out,
            "{prefix}{connector}{color}{icon}{}{reset}{label}{id}",
            item.name
        )
    }
}
