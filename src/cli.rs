use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How the renderer treats lines wider than the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WrapMode {
    /// Fold long lines across as many screen rows as needed
    Break,
    /// Keep one screen row per line and scroll horizontally
    Scroll,
}

impl WrapMode {
    /// Parse an rc-file value. Returns None for anything but the two
    /// accepted spellings.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "break" => Some(WrapMode::Break),
            "scroll" => Some(WrapMode::Scroll),
            _ => None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "minivim", about = "A minimal modal text editor", version)]
pub struct Cli {
    /// File to edit (created on first save if it does not exist)
    pub file: PathBuf,

    /// Start from an empty buffer, ignoring any existing file content
    #[arg(short = 't', long)]
    pub truncate: bool,

    /// Reject all edits and saves
    #[arg(short = 'R', long = "readonly")]
    pub read_only: bool,

    /// Wrap mode for long lines
    #[arg(short = 'W', long = "wrap", value_enum)]
    pub wrap: Option<WrapMode>,
}
