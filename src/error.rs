//! Error types for markup decoding, rasterization, plan validation and output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn vector markup into pixels.
#[derive(Debug, Error)]
pub enum RasterizationError {
    #[error("invalid vector markup: {0}")]
    InvalidMarkup(#[from] resvg::usvg::Error),

    #[error("invalid target size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("could not allocate a {width}x{height} pixmap")]
    Allocation { width: u32, height: u32 },

    #[error("invalid color {0:?}")]
    InvalidColor(String),

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// An artifact could not be written to its destination.
#[derive(Debug, Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct FilesystemError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl FilesystemError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

/// The output table breaks one of its invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("destination {} is declared more than once", .0.display())]
    DuplicateDestination(PathBuf),

    #[error("destination {} has a zero dimension", .0.display())]
    ZeroSize(PathBuf),
}

/// Encoded markup could not be turned back into text.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("data URL carries no base64 payload")]
    MissingPayload,

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded markup is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Failure to read or parse a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Any failure while producing a single artifact.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Rasterization(#[from] RasterizationError),

    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}
