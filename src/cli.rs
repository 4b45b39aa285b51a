/// Command-line flags.
use clap::{Parser, ValueEnum};
use rmtree_core::FormatPolicy;
use std::path::PathBuf;

/// Document store location on the tablet itself.
pub const DEFAULT_SOURCE: &str = "/home/root/.local/share/remarkable/xochitl";

#[derive(Parser, Debug)]
#[command(name = "rmtree")]
#[command(about = "Show a reMarkable document store as a tree, or mirror it with symlinks", long_about = None)]
pub struct Cli {
    /// Document store directory
    #[arg(default_value = DEFAULT_SOURCE)]
    pub path: PathBuf,

    /// Show emoji icons
    #[arg(short, long)]
    pub icons: bool,

    /// Show document type labels
    #[arg(short, long)]
    pub labels: bool,

    /// Show document UUIDs
    #[arg(short, long)]
    pub uuid: bool,

    /// Disable colored output
    #[arg(short, long)]
    pub no_color: bool,

    /// Create symbolic links instead of printing
    #[arg(short, long)]
    pub symlinks: bool,

    /// Output path for symbolic links
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Diagnostic verbosity on stderr
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Show version information
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl Cli {
    pub fn format_policy(&self) -> FormatPolicy {
        FormatPolicy {
            color: !self.no_color,
            icons: self.icons,
            labels: self.labels,
            ids: self.uuid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
