/// Directory / file totals printed at the end of every run.
use std::fmt;

/// Counts over the full item table, plus one directory for a non-empty
/// trash bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub directories: u64,
    pub files: u64,
}

impl fmt::Display for Summary {
    /// Formats as `"<N> directories, <M> files"`, singular for a count of 1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir_text = if self.directories == 1 {
            "directory"
        } else {
            "directories"
        };
        let file_text = if self.files == 1 { "file" } else { "files" };
        write!(
            f,
            "{} {dir_text}, {} {file_text}",
            self.directories, self.files
        )
    }
}
