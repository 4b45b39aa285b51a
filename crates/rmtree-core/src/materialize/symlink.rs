/// Symbolic-link creation that can be re-run over its own output.
///
/// An existing symlink at the destination is replaced. Anything else at the
/// destination (a regular file, a directory) is left alone and reported.
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SymlinkError {
    #[error("path exists and is not a symlink: {}", .0.display())]
    Occupied(PathBuf),

    #[error("cannot remove existing symlink: {0}")]
    Remove(#[source] io::Error),

    #[error(transparent)]
    Create(io::Error),
}

/// Create `link` pointing at `target`, replacing a symlink already at `link`.
pub fn create_or_replace_symlink(target: &Path, link: &Path) -> Result<(), SymlinkError> {
    if let Ok(meta) = std::fs::symlink_metadata(link) {
        if !meta.file_type().is_symlink() {
            return Err(SymlinkError::Occupied(link.to_path_buf()));
        }
        std::fs::remove_file(link).map_err(SymlinkError::Remove)?;
    }
    symlink(target, link).map_err(SymlinkError::Create)
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(not(any(unix, windows)))]
fn symlink(_target: &Path, _link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symbolic links are not supported on this platform",
    ))
}
