//! CLI output formatting for the resize pipeline.
//!
//! # Output Format
//!
//! One line per processed image, then a summary:
//!
//! ```text
//! 001-dawn.jpg: 100x50 → 299x149 in 299x299
//! 010-mountains.jpg: 500x500 → 299x299 in 299x299
//! Resized 2 images to 299x299
//! Done
//! ```
//!
//! # Architecture
//!
//! Each kind of output has a `format_*` function (returns `String` /
//! `Vec<String>`) for testability and a `print_*` wrapper that writes to
//! stdout. Format functions are pure — no I/O, no side effects.

use crate::process::{BatchSummary, ProcessEvent};

/// Format one per-image progress line: original → content region in target.
pub fn format_resize_event(event: &ProcessEvent) -> String {
    let image = &event.image;
    format!(
        "{}: {}x{} → {}x{} in {}",
        image.filename,
        image.original.width,
        image.original.height,
        image.content.width,
        image.content.height,
        event.target,
    )
}

/// Format the end-of-batch summary. The final line is always `Done`.
pub fn format_summary(summary: &BatchSummary) -> Vec<String> {
    let count = summary.images.len();
    let noun = if count == 1 { "image" } else { "images" };
    vec![
        format!("Resized {count} {noun} to {}", summary.target),
        "Done".to_string(),
    ]
}

/// Print one progress line to stdout.
pub fn print_resize_event(event: &ProcessEvent) {
    println!("{}", format_resize_event(event));
}

/// Print the batch summary to stdout.
pub fn print_summary(summary: &BatchSummary) {
    for line in format_summary(summary) {
        println!("{line}");
    }
}
