use alloc::sync::Arc;

use crate::window::ListWindow;
use crate::EndReached;

/// Default number of extra items rendered after the visible run.
pub const DEFAULT_OVERSCAN: usize = 2;

/// Default distance from the end (in pixels) at which the end-reached signal fires.
pub const DEFAULT_END_REACHED_THRESHOLD: f64 = 50.0;

/// Fired when the viewport comes within the threshold of the end of the collection.
pub type EndReachedCallback = Arc<dyn Fn(EndReached) + Send + Sync>;

/// Fired after every recomputation of the window.
pub type OnChangeCallback = Arc<dyn Fn(&ListWindow) + Send + Sync>;

/// Configuration for [`crate::ListWindow`].
///
/// Cheap to clone: callbacks are stored in `Arc`s. Values are validated by
/// [`ListWindow::new`].
pub struct WindowOptions {
    /// Fixed height of every item.
    pub item_height: f64,
    /// Initial collection length.
    pub item_count: usize,
    pub overscan: usize,
    /// Pixel margin before the end at which `on_end_reached` fires.
    pub end_reached_threshold: f64,
    /// Viewport height known at construction, if any. Until a valid height is supplied the
    /// window is empty.
    pub initial_viewport_height: Option<f64>,
    pub initial_offset: f64,
    /// Disabled engines report empty windows and never signal.
    pub enabled: bool,
    pub on_end_reached: Option<EndReachedCallback>,
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for WindowOptions {
    fn clone(&self) -> Self {
        Self {
            item_height: self.item_height,
            item_count: self.item_count,
            overscan: self.overscan,
            end_reached_threshold: self.end_reached_threshold,
            initial_viewport_height: self.initial_viewport_height,
            initial_offset: self.initial_offset,
            enabled: self.enabled,
            on_end_reached: self.on_end_reached.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl WindowOptions {
    pub fn new(item_height: f64) -> Self {
        Self {
            item_height,
            item_count: 0,
            overscan: DEFAULT_OVERSCAN,
            end_reached_threshold: DEFAULT_END_REACHED_THRESHOLD,
            initial_viewport_height: None,
            initial_offset: 0.0,
            enabled: true,
            on_end_reached: None,
            on_change: None,
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_end_reached_threshold(mut self, threshold: f64) -> Self {
        self.end_reached_threshold = threshold;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: f64) -> Self {
        self.initial_viewport_height = Some(viewport_height);
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: f64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_on_end_reached(
        mut self,
        on_end_reached: Option<impl Fn(EndReached) + Send + Sync + 'static>,
    ) -> Self {
        self.on_end_reached = on_end_reached.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&ListWindow) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("item_height", &self.item_height)
            .field("item_count", &self.item_count)
            .field("overscan", &self.overscan)
            .field("end_reached_threshold", &self.end_reached_threshold)
            .field("initial_viewport_height", &self.initial_viewport_height)
            .field("initial_offset", &self.initial_offset)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
