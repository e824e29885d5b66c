use std::{io, path::PathBuf, result};

use skrifa::{outline::DrawError, raw::ReadError};

/// Error types for font-atlas.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("font has no scalable outlines")]
    NoOutlines,

    #[error("failed to draw glyph {ch:?}: {source}")]
    Draw {
        ch: char,
        #[source]
        source: DrawError,
    },

    #[error("failed to prepare hinting: {0}")]
    Hinting(#[source] DrawError),

    #[error("invalid size {0} (must be a positive integer)")]
    InvalidSize(u32),

    #[error("no sizes requested")]
    EmptySizeList,

    #[error("glyph advances are not uniform: {ch:?} advances {found}, expected {expected}")]
    NonUniformAdvance { ch: char, expected: f32, found: f32 },

    #[error("cannot allocate a {width}x{height} canvas")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("atlas dimensions overflow")]
    CanvasOverflow,

    #[error("failed to encode png: {0}")]
    Png(#[from] png::EncodingError),

    #[error("failed to serialize descriptor: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = result::Result<T, Error>;
