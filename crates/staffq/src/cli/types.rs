//! CLI value enums and their conversions to library types.

use clap::ValueEnum;

use crate::output::OutputMode;

/// Output format for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatArg {
    /// Human-readable rows
    #[default]
    Text,
    /// A JSON array
    Json,
    /// JSON Lines, one row per line
    Jsonl,
}

impl std::fmt::Display for FormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Jsonl => write!(f, "jsonl"),
        }
    }
}

impl From<FormatArg> for OutputMode {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputMode::Text,
            FormatArg::Json => OutputMode::Json,
            FormatArg::Jsonl => OutputMode::Jsonl,
        }
    }
}
