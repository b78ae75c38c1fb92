use std::path::PathBuf;

use lacquer_engine::path::UnknownShape;
use thiserror::Error;

/// Invalid descriptor input that cannot be repaired by clamping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("gradient needs at least one color stop")]
    EmptyGradient,

    #[error("gradient has {colors} colors but {positions} positions")]
    GradientLengthMismatch { colors: usize, positions: usize },
}

/// Errors from theme lookup and theme-file loading.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// No built-in or registered theme has this id. Fall back to the default theme.
    #[error("unknown theme: '{0}'")]
    UnknownTheme(String),

    #[error("theme '{theme}': invalid color '{value}' (expected #RRGGBB or #RRGGBBAA)")]
    InvalidColor { theme: String, value: String },

    #[error("theme '{theme}': {source}")]
    InvalidShape {
        theme: String,
        #[source]
        source: UnknownShape,
    },

    #[error("theme '{theme}': {source}")]
    Style {
        theme: String,
        #[source]
        source: StyleError,
    },

    #[error("malformed theme file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
