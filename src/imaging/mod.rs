//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Enlarge / contain** | Lanczos3 via `resize_exact` |
//! | **Padding** | `imageops::replace` onto a black canvas |
//! | **Encode** | inferred from the output extension |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing resize operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
pub(crate) mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend, ResizeOutcome};
pub use calculations::{contain_dimensions, enlarge_dimensions, padding_offsets};
pub use params::{ResizeParams, TargetSize};
pub use rust_backend::RustBackend;
