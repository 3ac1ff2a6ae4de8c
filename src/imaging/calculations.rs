//! Pure calculation functions for contain-resize geometry.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate enlarged dimensions for an image smaller than the target.
///
/// The enlarge factor is the minimum of the two per-axis ratios
/// `target / source`. A factor greater than 1 means the image is smaller
/// than the target on both axes; both dimensions scale up uniformly so the
/// constraining axis exactly reaches the target edge. Fractional results
/// truncate toward zero.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `target` - Target dimensions (width, height)
///
/// # Returns
/// * `Some((width, height))` - Enlarged dimensions, when the factor exceeds 1
/// * `None` - Image already reaches the target on at least one axis
///
/// # Examples
/// ```
/// # use letterbox::imaging::enlarge_dimensions;
/// // 100x50 into 299x299: factor = min(2.99, 5.98) = 2.99 → 299x149
/// assert_eq!(enlarge_dimensions((100, 50), (299, 299)), Some((299, 149)));
///
/// // 500x500 into 299x299: factor < 1, no enlargement
/// assert_eq!(enlarge_dimensions((500, 500), (299, 299)), None);
/// ```
pub fn enlarge_dimensions(source: (u32, u32), target: (u32, u32)) -> Option<(u32, u32)> {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let ratio_w = tgt_w as f64 / src_w as f64;
    let ratio_h = tgt_h as f64 / src_h as f64;
    let factor = ratio_w.min(ratio_h);

    if factor > 1.0 {
        Some((
            (src_w as f64 * factor) as u32,
            (src_h as f64 * factor) as u32,
        ))
    } else {
        None
    }
}

/// Calculate dimensions that fit entirely within a target area (shrink-only).
///
/// Returns dimensions that fit inside the target while maintaining the
/// source aspect ratio. A source that already fits is returned unchanged;
/// this step never enlarges. Scaled axes round to nearest, with a 1-pixel
/// floor so degenerate aspect ratios never collapse to zero.
///
/// # Arguments
/// * `source` - Image dimensions (width, height)
/// * `target` - Target area dimensions (width, height)
///
/// # Returns
/// * `(width, height)` - Contained dimensions (at most target on both axes)
pub fn contain_dimensions(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let scale = (tgt_w as f64 / src_w as f64).min(tgt_h as f64 / src_h as f64);
    if scale >= 1.0 {
        return source;
    }

    (
        ((src_w as f64 * scale).round() as u32).max(1),
        ((src_h as f64 * scale).round() as u32).max(1),
    )
}

/// Calculate the centered placement of a content region inside a target box.
///
/// Returns the `(left, top)` offset. An odd leftover puts the extra pixel on
/// the left/top side: `offset = ceil((target - inner) / 2)`.
///
/// # Arguments
/// * `inner` - Content dimensions; must fit within `target` on both axes
/// * `target` - Outer box dimensions
///
/// # Returns
/// * `(left, top)` - Offset of the content region's top-left corner
pub fn padding_offsets(inner: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (in_w, in_h) = inner;
    let (tgt_w, tgt_h) = target;
    debug_assert!(in_w <= tgt_w && in_h <= tgt_h);

    ((tgt_w - in_w + 1) / 2, (tgt_h - in_h + 1) / 2)
}
