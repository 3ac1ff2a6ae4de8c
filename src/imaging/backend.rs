//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify and resize_contain.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, zero
//! external dependencies. Everything is statically linked into the binary.

use super::params::ResizeParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {}: {}", .path.display(), .reason)]
    Decode { path: PathBuf, reason: String },
    #[error("Failed to encode {}: {}", .path.display(), .reason)]
    Encode { path: PathBuf, reason: String },
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn as_tuple(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// What a contain-resize did to one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeOutcome {
    /// Dimensions of the source image as decoded.
    pub original: Dimensions,
    /// Dimensions of the content region inside the padded output.
    pub content: Dimensions,
}

/// Trait for image processing backends.
///
/// Every backend must implement both operations — identify and
/// resize_contain — so the batch pipeline is backend-agnostic and testable
/// with a mock. `Sync` because the pipeline shares one backend across
/// rayon workers.
pub trait ImageBackend: Sync {
    /// Get image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Execute a contain-resize: enlarge if needed, fit within the target,
    /// convert to RGB, pad centered to exactly the target size, save.
    fn resize_contain(&self, params: &ResizeParams) -> Result<ResizeOutcome, BackendError>;
}
