use lottie_data::DocumentError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecolorError {
    #[error("invalid hex color {input:?}, expected #RRGGBB")]
    InvalidColor { input: String },
    #[error("unknown color scheme {name:?}")]
    UnknownScheme { name: String },
    #[error("unknown color role {name:?}")]
    UnknownRole { name: String },
    #[error("variant file {file:?} must be a relative path inside the output directory")]
    InvalidVariantFile { file: String },
    #[error("burnout thresholds out of order: moderate {moderate} must not exceed burnout {burnout}")]
    InvalidThresholds { moderate: f64, burnout: f64 },
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
    #[error("invalid config: {0}")]
    Config(#[from] ron::error::SpannedError),
    #[error("failed to serialize config: {0}")]
    ConfigWrite(#[from] ron::Error),
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RecolorError>;
