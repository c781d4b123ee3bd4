//! Error types for the picker.

use thiserror::Error;

/// Errors produced while building or driving a picker.
#[derive(Debug, Error)]
pub enum CascaderError {
    /// A value token has no matching option among the siblings at `depth`.
    #[error("selection path does not match option tree: no option {value:?} at depth {depth}")]
    PathMismatch { depth: usize, value: String },

    #[error("level {index} out of range (picker has {len} levels)")]
    LevelOutOfRange { index: usize, len: usize },

    #[error("option {index} out of range on level {level} ({len} options)")]
    OptionOutOfRange { level: usize, index: usize, len: usize },

    #[error("invalid option tree: {0}")]
    Dataset(serde_json::Error),

    #[error("invalid config: {0}")]
    Config(serde_json::Error),

    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CascaderError>;
