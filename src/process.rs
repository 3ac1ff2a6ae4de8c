//! Batch contain-resize pipeline.
//!
//! Takes a source directory of JPEGs and writes a resized copy of each into
//! the destination directory under the same filename.
//!
//! ## Per-image transform
//!
//! ```text
//! load → enlarge (only if smaller than the target on both axes)
//!      → contain-fit (shrink-only, aspect preserved)
//!      → RGB conversion
//!      → centered black padding to exactly the target size
//!      → save (encoding inferred from the filename)
//! ```
//!
//! ## Parallel Processing
//!
//! Images are processed in parallel using [rayon](https://docs.rs/rayon);
//! per-image work shares no mutable state. Result collection preserves scan
//! order and short-circuits, so the batch still fails on the first broken
//! image with no partial-failure recovery.

use crate::imaging::{
    BackendError, Dimensions, ImageBackend, ResizeOutcome, ResizeParams, RustBackend, TargetSize,
};
use crate::scan;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Source directory does not exist or is not a directory: {}", .0.display())]
    SourceDirInvalid(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
}

/// One processed image, for reporting.
#[derive(Debug, Clone)]
pub struct ResizedImage {
    pub filename: String,
    /// Source dimensions as decoded.
    pub original: Dimensions,
    /// Content-region dimensions inside the padded output.
    pub content: Dimensions,
}

/// Progress event emitted once per processed image.
#[derive(Debug, Clone)]
pub struct ProcessEvent {
    pub image: ResizedImage,
    pub target: TargetSize,
}

/// Result of a whole batch, in scan order.
#[derive(Debug)]
pub struct BatchSummary {
    pub images: Vec<ResizedImage>,
    pub target: TargetSize,
}

/// Validated source/destination pair for a batch run.
#[derive(Debug)]
pub struct BatchResizer {
    source_dir: PathBuf,
    dest_dir: PathBuf,
}

impl BatchResizer {
    /// Validate the source directory and ensure the destination exists.
    ///
    /// Fails if `source_dir` is missing or not a directory. `dest_dir` is
    /// created with all missing parents; a pre-existing destination is fine.
    pub fn new(source_dir: &Path, dest_dir: &Path) -> Result<Self, ProcessError> {
        if !source_dir.is_dir() {
            return Err(ProcessError::SourceDirInvalid(source_dir.to_path_buf()));
        }
        std::fs::create_dir_all(dest_dir)?;

        Ok(Self {
            source_dir: source_dir.to_path_buf(),
            dest_dir: dest_dir.to_path_buf(),
        })
    }

    /// Resize a single image from the source directory into the destination,
    /// keeping its filename.
    pub fn resize_one(
        &self,
        backend: &impl ImageBackend,
        filename: &str,
        target: TargetSize,
    ) -> Result<ResizedImage, ProcessError> {
        let params = ResizeParams {
            source: self.source_dir.join(filename),
            output: self.dest_dir.join(filename),
            target,
        };
        let ResizeOutcome { original, content } = backend.resize_contain(&params)?;

        Ok(ResizedImage {
            filename: filename.to_string(),
            original,
            content,
        })
    }

    /// Resize every eligible image in the source directory.
    ///
    /// Emits one [`ProcessEvent`] per image over `progress` (arrival order
    /// is whatever the worker pool produces; the returned summary is in
    /// scan order).
    pub fn resize_all(
        &self,
        backend: &impl ImageBackend,
        target: TargetSize,
        progress: Option<Sender<ProcessEvent>>,
    ) -> Result<BatchSummary, ProcessError> {
        let sources = scan::scan_images(&self.source_dir)?;

        let images: Vec<ResizedImage> = sources
            .par_iter()
            .map(|source| {
                let image = self.resize_one(backend, &source.filename, target)?;
                if let Some(tx) = &progress {
                    // A dropped receiver only loses progress lines
                    tx.send(ProcessEvent {
                        image: image.clone(),
                        target,
                    })
                    .ok();
                }
                Ok(image)
            })
            .collect::<Result<_, ProcessError>>()?;

        Ok(BatchSummary { images, target })
    }
}

/// Run a full batch with the production backend.
pub fn process(
    source_dir: &Path,
    dest_dir: &Path,
    target: TargetSize,
    progress: Option<Sender<ProcessEvent>>,
) -> Result<BatchSummary, ProcessError> {
    let backend = RustBackend::new();
    BatchResizer::new(source_dir, dest_dir)?.resize_all(&backend, target, progress)
}
