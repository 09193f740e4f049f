use alloc::vec::Vec;

use rowport::{Align, ListWindow, Update, WindowOptions};

use crate::{Frame, HostEvent, LoadMore, Placed, ScrollMetrics};

/// A framework-neutral binding that owns a collection and the [`ListWindow`] that windows it.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `mount` once the scroll container has been measured
/// - `handle` for every scroll/resize event
/// - `render` to materialize the visible items
/// - `pump` (or `take_load_request` + `extend`) to service end-reached signals
///
/// Mutations go through `extend`/`truncate`, which keep the engine's item count in sync with the
/// collection.
#[derive(Clone, Debug)]
pub struct HostList<T> {
    items: Vec<T>,
    window: ListWindow,
    load_requested: bool,
    exhausted: bool,
}

impl<T> HostList<T> {
    /// `options.item_count` is replaced by `items.len()`.
    pub fn new(items: Vec<T>, options: WindowOptions) -> rowport::Result<Self> {
        let window = ListWindow::new(options.with_item_count(items.len()))?;
        Ok(Self {
            items,
            window,
            load_requested: false,
            exhausted: false,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn window(&self) -> &ListWindow {
        &self.window
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Whether an end-reached signal is waiting to be serviced.
    pub fn load_requested(&self) -> bool {
        self.load_requested
    }

    /// Whether the loader reported the true end of data.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Clears and returns the pending load request.
    pub fn take_load_request(&mut self) -> bool {
        core::mem::take(&mut self.load_requested)
    }

    /// Applies the first measurement of the container and evaluates the load guard, so a list
    /// that starts out shorter than its viewport requests data immediately.
    pub fn mount(&mut self, viewport_height: f64) -> rowport::Result<Update> {
        hlog!(debug, viewport_height, len = self.items.len(), "mount");
        let mut update = self.window.on_viewport_resize(viewport_height)?;
        update.end_reached |= self.window.check_end_reached();
        Ok(self.record(update))
    }

    pub fn handle(&mut self, event: HostEvent) -> rowport::Result<Update> {
        hlog!(trace, ?event, "handle");
        let update = match event {
            HostEvent::Scroll(top) => self.window.on_scroll(top)?,
            HostEvent::Resize(height) => self.window.on_viewport_resize(height)?,
            HostEvent::Metrics(m) => {
                // Both observations are stored before an error is reported.
                let resized = self.window.on_viewport_resize(m.client_height);
                let scrolled = self.window.on_scroll(m.scroll_top);
                resized?.merge(scrolled?)
            }
        };
        Ok(self.record(update))
    }

    /// Appends items (typically a freshly loaded page).
    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) -> rowport::Result<Update> {
        self.items.extend(items);
        self.sync_len()
    }

    /// Removes items past `len`.
    pub fn truncate(&mut self, len: usize) -> rowport::Result<Update> {
        self.items.truncate(len);
        self.sync_len()
    }

    /// Scrolls the engine so `index` is in view.
    ///
    /// The host is expected to move its real container to `self.window().scroll_offset()`.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> rowport::Result<Update> {
        let update = self.window.scroll_to_index(index, align)?;
        Ok(self.record(update))
    }

    /// Metrics the container should report after the next render.
    pub fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: self.window.scroll_offset(),
            scroll_height: self.window.total_height(),
            client_height: self.window.viewport_height(),
        }
    }

    /// Renders the current window with a per-item callback.
    ///
    /// `render(item, absolute_index)` is called only for materialized items. With invalid
    /// geometry the frame is empty and the spacer collapses to `0`.
    pub fn render<R>(&self, mut render: impl FnMut(&T, usize) -> R) -> Frame<R> {
        if self.window.window().is_none() {
            return Frame::empty();
        }
        let height = self.window.item_height();
        let nodes = self
            .window
            .render_slice(&self.items)
            .map(|s| Placed {
                key: s.index,
                top: s.top,
                height,
                node: render(s.item, s.index),
            })
            .collect();
        Frame {
            spacer_height: self.window.total_height(),
            nodes,
        }
    }

    /// Services an outstanding load request from `loader`.
    ///
    /// Returns the number of appended items. Appending re-arms the load guard; if the new page
    /// still leaves the viewport near the end, a fresh request is recorded right away.
    pub fn pump(&mut self, loader: &mut impl LoadMore<T>) -> rowport::Result<usize> {
        if self.exhausted || !self.take_load_request() {
            return Ok(0);
        }
        let loaded = self.items.len();
        match loader.load_more(loaded) {
            None => {
                hlog!(debug, loaded, "loader exhausted");
                self.exhausted = true;
                Ok(0)
            }
            Some(page) if page.is_empty() => {
                hlog!(
                    debug,
                    loaded,
                    "loader returned an empty page; retrying on next breach"
                );
                self.window.rearm_end_reached();
                Ok(0)
            }
            Some(page) => {
                let n = page.len();
                hlog!(debug, loaded, appended = n, "loaded page");
                self.extend(page)?;
                Ok(n)
            }
        }
    }

    fn sync_len(&mut self) -> rowport::Result<Update> {
        let update = self.window.set_item_count(self.items.len())?;
        Ok(self.record(update))
    }

    fn record(&mut self, update: Update) -> Update {
        if update.end_reached {
            hlog!(trace, len = self.items.len(), "load requested");
            self.load_requested = true;
        }
        update
    }
}
