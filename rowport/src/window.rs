use alloc::vec::Vec;
use core::cmp;

use crate::error::{Dimension, Error, Result, check_height};
use crate::geometry::{self, sanitize_offset};
use crate::slice::{RenderSlice, SliceItem};
use crate::{
    Align, EndReached, LoadGuard, ScrollDirection, Update, ViewportState, Window, WindowOptions,
    WindowRange,
};

/// A headless fixed-height windowing engine.
///
/// This type holds no UI objects and never touches the collection it windows:
/// - Your host drives it with scroll offsets, viewport heights and the collection length.
/// - Every effective event recomputes the window synchronously and evaluates the load guard.
/// - Rendering is exposed via [`Self::render_slice`], a borrowing projection onto the host's
///   collection.
///
/// For a host binding that owns the collection and services loads, see the `rowport-host`
/// crate.
#[derive(Clone, Debug)]
pub struct ListWindow {
    options: WindowOptions,
    scroll_offset: f64,
    viewport_height: f64,
    item_count: usize,
    scroll_direction: Option<ScrollDirection>,

    window: Option<Window>,
    last_error: Option<Error>,
    guard: LoadGuard,
    recompute_count: u64,
}

impl ListWindow {
    /// Creates a new engine from options.
    ///
    /// Fails when `item_height` is not positive and finite, or when `end_reached_threshold` is
    /// negative or NaN. An invalid `initial_viewport_height` is not fatal here: the engine starts
    /// with an empty window and reports the problem through [`Self::last_error`].
    pub fn new(options: WindowOptions) -> Result<Self> {
        check_height(Dimension::ItemHeight, options.item_height)?;
        let threshold = options.end_reached_threshold;
        if threshold.is_nan() || threshold < 0.0 {
            return Err(Error::InvalidThreshold(threshold));
        }
        rlog!(
            debug,
            item_height = options.item_height,
            item_count = options.item_count,
            overscan = options.overscan,
            threshold = options.end_reached_threshold,
            "ListWindow::new"
        );

        let mut w = Self {
            scroll_offset: sanitize_offset(options.initial_offset),
            viewport_height: options.initial_viewport_height.unwrap_or(0.0),
            item_count: options.item_count,
            scroll_direction: None,
            window: None,
            last_error: None,
            guard: LoadGuard::Idle,
            recompute_count: 0,
            options,
        };
        if w.options.initial_viewport_height.is_some() {
            // Reported through `last_error`.
            let _ = w.recompute();
        }
        Ok(w)
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn item_height(&self) -> f64 {
        self.options.item_height
    }

    pub fn overscan(&self) -> usize {
        self.options.overscan
    }

    pub fn end_reached_threshold(&self) -> f64 {
        self.options.end_reached_threshold
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            scroll_offset: self.scroll_offset,
            viewport_height: self.viewport_height,
        }
    }

    pub fn load_guard(&self) -> LoadGuard {
        self.guard
    }

    /// The error raised by the most recent recomputation, cleared by the next successful one.
    pub fn last_error(&self) -> Option<Error> {
        self.last_error
    }

    /// Number of geometry recomputations performed so far.
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    pub fn set_on_end_reached(
        &mut self,
        on_end_reached: Option<impl Fn(EndReached) + Send + Sync + 'static>,
    ) {
        self.options.on_end_reached = on_end_reached.map(|f| alloc::sync::Arc::new(f) as _);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&ListWindow) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as _);
    }

    /// Applies a scroll offset reported by the host.
    ///
    /// Negative and NaN offsets clamp to `0`. Re-delivering the stored offset is a no-op.
    pub fn on_scroll(&mut self, offset: f64) -> Result<Update> {
        let offset = sanitize_offset(offset);
        rlog!(trace, offset, "on_scroll");
        if offset == self.scroll_offset {
            return self.unchanged();
        }
        self.scroll_direction = match offset.partial_cmp(&self.scroll_offset) {
            Some(cmp::Ordering::Greater) => Some(ScrollDirection::Forward),
            Some(cmp::Ordering::Less) => Some(ScrollDirection::Backward),
            _ => self.scroll_direction,
        };
        self.scroll_offset = offset;
        if !self.options.enabled {
            return Ok(Update::NOOP);
        }
        self.apply()
    }

    /// Applies a new measured viewport height.
    ///
    /// A non-positive (or NaN) height empties the window and returns
    /// [`Error::InvalidGeometry`]; the next valid height restores it.
    pub fn on_viewport_resize(&mut self, height: f64) -> Result<Update> {
        rlog!(trace, height, "on_viewport_resize");
        if height == self.viewport_height && self.window.is_some() {
            return Ok(Update::NOOP);
        }
        self.viewport_height = height;
        if !self.options.enabled {
            return Ok(Update::NOOP);
        }
        self.apply()
    }

    /// Reports the host collection's current length.
    ///
    /// A changed length recomputes the window, so the range is clamped immediately after the
    /// host removes items. Growth re-arms the load guard; a shrink never fires by itself.
    pub fn set_item_count(&mut self, item_count: usize) -> Result<Update> {
        rlog!(trace, item_count, prev = self.item_count, "set_item_count");
        if item_count == self.item_count {
            return self.unchanged();
        }
        self.item_count = item_count;
        self.guard.observe_len(item_count);
        if !self.options.enabled {
            return Ok(Update::NOOP);
        }
        self.apply()
    }

    pub fn set_overscan(&mut self, overscan: usize) -> Result<Update> {
        if self.options.overscan == overscan {
            return self.unchanged();
        }
        self.options.overscan = overscan;
        if !self.options.enabled {
            return Ok(Update::NOOP);
        }
        self.apply()
    }

    pub fn set_enabled(&mut self, enabled: bool) -> Result<Update> {
        if self.options.enabled == enabled {
            return self.unchanged();
        }
        self.options.enabled = enabled;
        if !enabled {
            self.window = None;
            self.last_error = None;
            self.notify();
            return Ok(Update {
                recomputed: true,
                end_reached: false,
            });
        }
        self.apply()
    }

    /// Evaluates the load guard against the current geometry without a scroll event.
    ///
    /// Useful right after mounting, or after an append that still did not fill the viewport.
    /// Returns whether the end-reached signal fired.
    pub fn check_end_reached(&mut self) -> bool {
        self.evaluate_guard()
    }

    /// Returns the load guard to `Idle` so the next breach fires again.
    pub fn rearm_end_reached(&mut self) {
        rlog!(debug, "rearm_end_reached");
        self.guard.rearm();
    }

    pub fn window(&self) -> Option<Window> {
        self.window
    }

    /// The current range, or an empty one when there is no valid window.
    pub fn range(&self) -> WindowRange {
        self.window.map_or(WindowRange::EMPTY, |w| w.range)
    }

    pub fn total_height(&self) -> f64 {
        if !self.options.enabled {
            return 0.0;
        }
        self.item_count as f64 * self.options.item_height
    }

    pub fn top_offset(&self) -> f64 {
        self.window.map_or(0.0, |w| w.top_offset)
    }

    /// Pixels between the viewport bottom and the content end, when the geometry is valid.
    pub fn distance_to_end(&self) -> Option<f64> {
        let w = self.window?;
        Some(geometry::distance_to_end(
            w.total_height,
            self.scroll_offset,
            self.viewport_height,
        ))
    }

    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        if !self.options.enabled {
            return None;
        }
        geometry::index_at_offset(offset, self.options.item_height, self.item_count)
    }

    pub fn item_top(&self, index: usize) -> Option<f64> {
        if !self.options.enabled || index >= self.item_count {
            return None;
        }
        Some(geometry::item_top(index, self.options.item_height))
    }

    pub fn max_scroll_offset(&self) -> f64 {
        geometry::max_scroll_offset(self.total_height(), self.viewport_height.max(0.0))
    }

    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        sanitize_offset(offset).min(self.max_scroll_offset())
    }

    /// Computes the (clamped) offset that brings `index` into view.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> f64 {
        if !self.options.enabled || self.item_count == 0 {
            return 0.0;
        }
        let index = index.min(self.item_count - 1);
        let height = self.options.item_height;
        let start = geometry::item_top(index, height);
        let end = start + height;
        let view = self.viewport_height.max(0.0);

        let target = match align {
            Align::Start => start,
            Align::End => end - view,
            Align::Center => start + height / 2.0 - view / 2.0,
            Align::Auto => {
                let cur = self.scroll_offset;
                if start >= cur && end <= cur + view {
                    cur
                } else if start < cur {
                    start
                } else {
                    end - view
                }
            }
        };

        self.clamp_scroll_offset(target)
    }

    /// Scrolls so that `index` is in view, as if the host had reported that offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> Result<Update> {
        let offset = self.scroll_to_index_offset(index, align);
        self.on_scroll(offset)
    }

    /// Projects the current window onto `items`.
    ///
    /// Yields nothing when the geometry is invalid or the engine is disabled.
    pub fn render_slice<'a, T>(&self, items: &'a [T]) -> RenderSlice<'a, T> {
        match self.window {
            Some(w) if self.options.enabled => {
                RenderSlice::new(items, w.range, self.options.item_height)
            }
            _ => RenderSlice::empty(items),
        }
    }

    pub fn for_each_slice_item<'a, T>(&self, items: &'a [T], f: impl FnMut(SliceItem<'a, T>)) {
        self.render_slice(items).for_each(f);
    }

    /// Collects the render slice into `out` (clears `out` first).
    pub fn collect_render_slice<'a, T>(&self, items: &'a [T], out: &mut Vec<SliceItem<'a, T>>) {
        out.clear();
        out.extend(self.render_slice(items));
    }

    fn unchanged(&self) -> Result<Update> {
        match self.last_error {
            Some(err) if self.options.enabled => Err(err),
            _ => Ok(Update::NOOP),
        }
    }

    fn apply(&mut self) -> Result<Update> {
        let res = self.recompute();
        let end_reached = res.is_ok() && self.evaluate_guard();
        self.notify();
        res.map(|()| Update {
            recomputed: true,
            end_reached,
        })
    }

    fn recompute(&mut self) -> Result<()> {
        self.recompute_count = self.recompute_count.saturating_add(1);
        match geometry::compute_window(
            self.scroll_offset,
            self.viewport_height,
            self.options.item_height,
            self.item_count,
            self.options.overscan,
        ) {
            Ok(w) => {
                rlog!(
                    debug,
                    start_index = w.range.start_index,
                    end_index = w.range.end_index,
                    total_height = w.total_height,
                    "recompute"
                );
                self.window = Some(w);
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                rlog!(warn, error = %err, "recompute declined: invalid geometry");
                self.window = None;
                self.last_error = Some(err);
                Err(err)
            }
        }
    }

    fn evaluate_guard(&mut self) -> bool {
        if !self.options.enabled {
            return false;
        }
        let Some(distance_to_end) = self.distance_to_end() else {
            return false;
        };
        if !self.guard.check(
            self.item_count,
            distance_to_end,
            self.options.end_reached_threshold,
        ) {
            return false;
        }
        if let Some(cb) = &self.options.on_end_reached {
            cb(EndReached {
                item_count: self.item_count,
                distance_to_end,
            });
        }
        true
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }
}
