//! Pure fixed-height window math.
//!
//! Nothing here allocates or holds state; every function is O(1) in the item count.

use crate::error::{Dimension, Result, check_height};
use crate::{Window, WindowRange};

/// Clamps a host-reported scroll offset into the valid domain (negative and NaN become `0`).
#[inline]
pub fn sanitize_offset(offset: f64) -> f64 {
    if offset > 0.0 { offset } else { 0.0 }
}

/// `floor(x)` as an index, for `x >= 0`. Saturates at `usize::MAX`.
#[inline]
fn floor_index(x: f64) -> usize {
    x as usize
}

/// `ceil(x)` as a count, for `x >= 0`. Saturates at `usize::MAX`.
#[inline]
fn ceil_count(x: f64) -> usize {
    let t = x as usize;
    if (t as f64) < x { t.saturating_add(1) } else { t }
}

/// Maps a scroll position onto the slice of items to materialize.
///
/// `overscan` extra items are appended after the strictly visible run. When the viewport
/// straddles an item boundary and `overscan` alone would not reach the last partially visible
/// item, the range is extended to cover it.
///
/// Returns [`crate::Error::InvalidGeometry`] when `item_height` or `viewport_height` is not a
/// positive finite number.
pub fn compute_window(
    scroll_offset: f64,
    viewport_height: f64,
    item_height: f64,
    item_count: usize,
    overscan: usize,
) -> Result<Window> {
    let item_height = check_height(Dimension::ItemHeight, item_height)?;
    let viewport_height = check_height(Dimension::ViewportHeight, viewport_height)?;
    let scroll_offset = sanitize_offset(scroll_offset);

    let total_height = item_count as f64 * item_height;
    let start_index = floor_index(scroll_offset / item_height).min(item_count);
    let visible_count = ceil_count(viewport_height / item_height).saturating_add(overscan);
    let last_touched = ceil_count((scroll_offset + viewport_height) / item_height);
    let end_index = start_index
        .saturating_add(visible_count)
        .max(last_touched)
        .min(item_count);

    Ok(Window {
        range: WindowRange {
            start_index,
            end_index,
        },
        total_height,
        top_offset: start_index as f64 * item_height,
    })
}

/// Pixels left between the bottom of the viewport and the end of the content.
///
/// Negative when the viewport extends past the content (short lists, or after a shrink).
#[inline]
pub fn distance_to_end(total_height: f64, scroll_offset: f64, viewport_height: f64) -> f64 {
    total_height - (sanitize_offset(scroll_offset) + viewport_height)
}

/// Top edge of item `index`.
#[inline]
pub fn item_top(index: usize, item_height: f64) -> f64 {
    index as f64 * item_height
}

/// Index of the item covering `offset`, or `None` for an empty collection.
///
/// Offsets past the end map onto the last item.
pub fn index_at_offset(offset: f64, item_height: f64, item_count: usize) -> Option<usize> {
    if item_count == 0 || !(item_height.is_finite() && item_height > 0.0) {
        return None;
    }
    let index = floor_index(sanitize_offset(offset) / item_height);
    Some(index.min(item_count - 1))
}

/// The largest offset that still shows a full viewport of content.
#[inline]
pub fn max_scroll_offset(total_height: f64, viewport_height: f64) -> f64 {
    let max = total_height - viewport_height;
    if max > 0.0 { max } else { 0.0 }
}
