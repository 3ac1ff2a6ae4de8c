//! # Letterbox
//!
//! Batch contain-resize for machine learning image datasets. Point it at a
//! folder of JPEGs and it produces a copy of each at an exact target shape
//! (299x299 by default), aspect ratio preserved, remaining space padded with
//! centered black bars.
//!
//! # Architecture: Scan → Process
//!
//! ```text
//! 1. Scan      SRC_DIR  →  eligible images   (.jpg/.jpeg regular files)
//! 2. Process   images   →  OUT_DIR           (enlarge → contain → pad → save)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Source discovery — non-recursive, case-sensitive extension filter, sorted |
//! | [`process`] | Batch pipeline — validated source/destination, parallel fail-fast resize |
//! | [`imaging`] | Pure-Rust image operations: geometry math, backend trait, `image`-crate backend |
//! | [`naming`] | Sequential `file_{}.ext` filename generation for dataset files |
//! | [`output`] | CLI output formatting — pure format functions + stdout wrappers |
//!
//! # Design Decisions
//!
//! ## Contain, Never Crop
//!
//! Fixed-input networks want every training image at the same shape, but
//! cropping discards content and non-uniform scaling distorts it. The
//! contain transform does neither: the full frame survives, at the cost of
//! black padding bars. Images smaller than the target on both axes are first
//! enlarged uniformly so the constraining axis meets the target edge.
//!
//! ## Deterministic Geometry
//!
//! All dimension math lives in pure functions
//! ([`imaging::enlarge_dimensions`], [`imaging::contain_dimensions`],
//! [`imaging::padding_offsets`]) with fixed rounding rules: enlargement
//! truncates, contain-fit rounds to nearest, and an odd padding remainder
//! puts the extra pixel on the left/top. Same input, same output, on every
//! platform.
//!
//! ## Pure-Rust Imaging (No ImageMagick, No FFmpeg)
//!
//! The [`imaging`] module uses the `image` crate (Lanczos3 resampling) —
//! pure Rust, no system dependencies, one self-contained binary. The
//! production code sits behind the [`imaging::ImageBackend`] trait so the
//! pipeline is testable with a recording mock.
//!
//! ## Fail Fast
//!
//! A dataset with one undecodable file is a dataset you want to fix, not
//! silently skip. The first per-image failure aborts the whole batch with a
//! diagnostic naming the file; there are no retries and no partial-result
//! bookkeeping.

pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
