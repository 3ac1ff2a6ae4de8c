//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Identify | `image::image_dimensions` |
//! | Enlarge / contain resize | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | RGB conversion | `image::DynamicImage::to_rgb8` |
//! | Padding | `image::imageops::replace` onto a black canvas |
//! | Encode | format inferred from the output extension |
//!
//! Because the output filename always equals the input filename, inferring
//! the encoder from the extension preserves the source encoding.

use super::backend::{BackendError, Dimensions, ImageBackend, ResizeOutcome};
use super::calculations::{contain_dimensions, enlarge_dimensions, padding_offsets};
use super::params::ResizeParams;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, RgbImage};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
///
/// Zero-area images are rejected here so the geometry math downstream never
/// divides by zero.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    let img = ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| BackendError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if img.width() == 0 || img.height() == 0 {
        return Err(BackendError::Decode {
            path: path.to_path_buf(),
            reason: "zero-area image".to_string(),
        });
    }
    Ok(img)
}

/// Save an RGB image to the given path, inferring format from extension.
fn save_image(img: &RgbImage, path: &Path) -> Result<(), BackendError> {
    img.save(path).map_err(|e| BackendError::Encode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) =
            image::image_dimensions(path).map_err(|e| BackendError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(Dimensions { width, height })
    }

    fn resize_contain(&self, params: &ResizeParams) -> Result<ResizeOutcome, BackendError> {
        let img = load_image(&params.source)?;
        let original = Dimensions {
            width: img.width(),
            height: img.height(),
        };
        let target = params.target.as_tuple();

        // Uniform upscaling when the image is smaller than the target on
        // both axes; the constraining axis lands exactly on the target edge.
        let enlarged = match enlarge_dimensions(original.as_tuple(), target) {
            Some((w, h)) => img.resize_exact(w, h, FilterType::Lanczos3),
            None => img,
        };

        // Shrink-only fit within the target, then convert to 3-channel RGB.
        let (content_w, content_h) =
            contain_dimensions((enlarged.width(), enlarged.height()), target);
        let contained = if (content_w, content_h) != (enlarged.width(), enlarged.height()) {
            enlarged.resize_exact(content_w, content_h, FilterType::Lanczos3)
        } else {
            enlarged
        };
        let content = contained.to_rgb8();

        // Pad centered onto a black canvas unless the content already fills
        // the target exactly.
        let framed = if (content_w, content_h) == target {
            content
        } else {
            let (left, top) = padding_offsets((content_w, content_h), target);
            let mut canvas = RgbImage::new(params.target.width, params.target.height);
            image::imageops::replace(&mut canvas, &content, left as i64, top as i64);
            canvas
        };

        save_image(&framed, &params.output)?;

        Ok(ResizeOutcome {
            original,
            content: Dimensions {
                width: content_w,
                height: content_h,
            },
        })
    }
}
