#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// A half-open index range into the collection.
///
/// Always satisfies `start_index <= end_index <= item_count` for the count it was computed with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl WindowRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    /// Re-clamps the range to a (possibly shrunk) collection length.
    pub fn clamp_to(self, len: usize) -> Self {
        let end_index = self.end_index.min(len);
        Self {
            start_index: self.start_index.min(end_index),
            end_index,
        }
    }
}

/// Output of one geometry computation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub range: WindowRange,
    /// `item_count * item_height`; the size of the spacer element.
    pub total_height: f64,
    /// Vertical translation of the rendered block (`start_index * item_height`).
    pub top_offset: f64,
}

/// Payload passed to the end-reached callback.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndReached {
    /// Collection length at the moment the guard armed.
    pub item_count: usize,
    pub distance_to_end: f64,
}

/// What an event handler did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Update {
    /// The window was recomputed (false when the event was a no-op).
    pub recomputed: bool,
    /// The end-reached signal fired during this event.
    pub end_reached: bool,
}

impl Update {
    pub const NOOP: Self = Self {
        recomputed: false,
        end_reached: false,
    };

    /// Combines the outcomes of two events handled back to back.
    pub fn merge(self, other: Self) -> Self {
        Self {
            recomputed: self.recomputed || other.recomputed,
            end_reached: self.end_reached || other.end_reached,
        }
    }
}
