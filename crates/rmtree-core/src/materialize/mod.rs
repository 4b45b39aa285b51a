/// Filesystem materializer — mirrors the hierarchy as real directories and
/// symbolic links under an output root.
///
/// Folders become directories (created with all missing ancestors; an
/// existing directory is fine). PDF and EPUB documents become symlinks to
/// their `<id>.<ext>` content file in the source directory. Notebooks have
/// no single content file and are skipped.
///
/// Only the root bucket is walked: trashed items never reach the disk.
///
/// Every failure is per item. It is logged, recorded in the report, and
/// the walk carries on. A folder that could not be created still has its
/// children visited; each of them then fails the destination check on its
/// own. Nothing is rolled back, and re-running over the same output root
/// converges on the same layout.
pub mod symlink;

use crate::model::{DocSubtype, Hierarchy, Item, ItemKind, NodeIndex, Summary, MAX_DEPTH};
use std::path::{Component, Path, PathBuf};
use std::time::Instant;
use symlink::{create_or_replace_symlink, SymlinkError};
use thiserror::Error;
use tracing::{debug, error, info};

/// A single item that could not be materialized.
#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("cannot create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("destination directory '{}' does not exist", path.display())]
    MissingDestination { path: PathBuf },

    #[error("cannot create symlink from '{}' to '{}': {source}", target.display(), link.display())]
    Link {
        target: PathBuf,
        link: PathBuf,
        #[source]
        source: SymlinkError,
    },
}

/// What one materialization pass did.
#[derive(Debug, Default)]
pub struct MaterializeReport {
    /// Same totals the tree renderer prints.
    pub summary: Summary,
    /// Directories created or confirmed present.
    pub directories: u64,
    /// Symlinks created or replaced.
    pub links: u64,
    /// Notebook documents with nothing to link.
    pub notebooks_skipped: u64,
    pub errors: Vec<MaterializeError>,
}

impl MaterializeReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Writes one hierarchy under one output root.
pub struct Materializer<'a> {
    hierarchy: &'a Hierarchy,
    source_root: &'a Path,
    output_root: &'a Path,
}

impl<'a> Materializer<'a> {
    /// `source_root` is the document-store directory the symlinks point
    /// into; pass an absolute path so links resolve from anywhere.
    pub fn new(hierarchy: &'a Hierarchy, source_root: &'a Path, output_root: &'a Path) -> Self {
        Self {
            hierarchy,
            source_root,
            output_root,
        }
    }

    /// Walk the root bucket and materialize every reachable item.
    pub fn run(&self) -> MaterializeReport {
        let start = Instant::now();
        let mut report = MaterializeReport {
            summary: self.hierarchy.summary(),
            ..MaterializeReport::default()
        };

        for &idx in self.hierarchy.root() {
            self.materialize_item(idx, Path::new(""), 0, &mut report);
        }

        info!(
            directories = report.directories,
            links = report.links,
            notebooks_skipped = report.notebooks_skipped,
            errors = report.errors.len(),
            "Materialized into {} in {:?}",
            self.output_root.display(),
            start.elapsed()
        );
        report
    }

    fn materialize_item(
        &self,
        index: NodeIndex,
        relative: &Path,
        depth: usize,
        report: &mut MaterializeReport,
    ) {
        if depth > MAX_DEPTH {
            return;
        }

        let item = self.hierarchy.item(index);
        match item.kind {
            ItemKind::Folder => {
                let segment = folder_segment(&item.name);
                let dir_path = self.output_root.join(relative).join(&segment);
                match std::fs::create_dir_all(&dir_path) {
                    Ok(()) => {
                        debug!("Directory ready: {}", dir_path.display());
                        report.directories += 1;
                    }
                    Err(source) => record(
                        report,
                        MaterializeError::CreateDir {
                            path: dir_path,
                            source,
                        },
                    ),
                }

                let child_relative = relative.join(&segment);
                for &child in self.hierarchy.children_of(index) {
                    self.materialize_item(child, &child_relative, depth + 1, report);
                }
            }
            ItemKind::Document => self.link_document(item, relative, report),
        }
    }

    fn link_document(&self, item: &Item, relative: &Path, report: &mut MaterializeReport) {
        let subtype = item.subtype.unwrap_or(DocSubtype::Notebook);
        let Some(ext) = subtype.extension() else {
            report.notebooks_skipped += 1;
            return;
        };

        let target = self.source_root.join(format!("{}.{ext}", item.id));
        let dest_dir = self.output_root.join(relative);
        if !dest_dir.is_dir() {
            record(
                report,
                MaterializeError::MissingDestination { path: dest_dir },
            );
            return;
        }

        let link = dest_dir.join(link_file_name(&item.name, ext));
        match create_or_replace_symlink(&target, &link) {
            Ok(()) => {
                debug!("Linked {} -> {}", link.display(), target.display());
                report.links += 1;
            }
            Err(source) => record(
                report,
                MaterializeError::Link {
                    target,
                    link,
                    source,
                },
            ),
        }
    }
}

fn record(report: &mut MaterializeReport, err: MaterializeError) {
    error!("{err}");
    report.errors.push(err);
}

/// Relative path for a folder name.
///
/// Surrounding spaces are stripped. A separator inside the name nests
/// directories; root, `.` and `..` components are dropped so the result
/// always stays under the output root.
pub fn folder_segment(name: &str) -> PathBuf {
    Path::new(name.trim_matches(' '))
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

/// File name for a document symlink: trimmed, path separators replaced with
/// `_`, and `.<ext>` appended unless already present.
pub fn link_file_name(name: &str, ext: &str) -> String {
    let mut file_name = name
        .trim_matches(' ')
        .replace(std::path::MAIN_SEPARATOR, "_");
    let suffix = format!(".{ext}");
    if !file_name.ends_with(&suffix) {
        file_name.push_str(&suffix);
    }
    file_name
}
