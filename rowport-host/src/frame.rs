use alloc::vec::Vec;

/// A rendered item positioned inside the spacer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placed<R> {
    /// Absolute index of the item; stable across scrolls, suitable as a list key.
    pub key: usize,
    pub top: f64,
    pub height: f64,
    pub node: R,
}

/// Everything a host needs to draw one frame of the list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame<R> {
    /// Height of the spacer element, i.e. the full virtual content height.
    pub spacer_height: f64,
    pub nodes: Vec<Placed<R>>,
}

impl<R> Frame<R> {
    pub fn empty() -> Self {
        Self {
            spacer_height: 0.0,
            nodes: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes.iter().map(|p| p.key)
    }
}

impl<R> Default for Frame<R> {
    fn default() -> Self {
        Self::empty()
    }
}
