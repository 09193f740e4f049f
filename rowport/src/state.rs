/// A lightweight snapshot of the observed viewport.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_offset: f64,
    pub viewport_height: f64,
}

impl ViewportState {
    /// The pixel just past the bottom edge of the viewport.
    pub fn bottom(&self) -> f64 {
        self.scroll_offset + self.viewport_height
    }
}
