//! Source directory scanning.
//!
//! Discovers the images a batch run will process: regular files directly
//! inside the source directory whose names end in `.jpg` or `.jpeg`. The
//! match is case-sensitive (`.JPG` is skipped), the listing is
//! non-recursive, and subdirectories are ignored. Results are sorted by
//! filename so runs are deterministic regardless of directory order.

use std::fs;
use std::path::{Path, PathBuf};

/// A discovered source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// Filename only; outputs are written under the same name.
    pub filename: String,
    /// Full path to the source file.
    pub path: PathBuf,
}

/// List the eligible images in `dir`, sorted by filename.
pub fn scan_images(dir: &Path) -> std::io::Result<Vec<SourceImage>> {
    let mut images: Vec<SourceImage> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter_map(|entry| {
            let path = entry.path();
            let filename = entry.file_name().into_string().ok()?;
            if is_eligible(&filename) && path.is_file() {
                Some(SourceImage { filename, path })
            } else {
                None
            }
        })
        .collect();

    images.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(images)
}

/// Case-sensitive extension check, matching the dataset convention of
/// lowercase JPEG extensions.
fn is_eligible(filename: &str) -> bool {
    filename.ends_with(".jpg") || filename.ends_with(".jpeg")
}
