/// The three numbers a scroll container reports (`scrollTop`, `scrollHeight`, `clientHeight`
/// in DOM terms; any toolkit's scroll metrics map onto them).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn distance_to_end(&self) -> f64 {
        self.scroll_height - (self.scroll_top + self.client_height)
    }

    pub fn max_scroll_top(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }
}

/// An event forwarded from the host's scroll container.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostEvent {
    Scroll(f64),
    Resize(f64),
    /// A full metrics sample, applied as a resize followed by a scroll.
    Metrics(ScrollMetrics),
}

impl From<ScrollMetrics> for HostEvent {
    fn from(m: ScrollMetrics) -> Self {
        Self::Metrics(m)
    }
}
