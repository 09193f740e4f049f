/// Rate-limits the end-reached signal to once per growth of the collection.
///
/// The guard arms (`Idle -> Awaiting`) the first time the viewport comes within the threshold of
/// the end, remembering the collection length at that moment. While the length does not grow,
/// further breaches are ignored. Growth of the collection returns it to `Idle`.
///
/// If the host never grows the collection (true end of data), the guard stays `Awaiting`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadGuard {
    #[default]
    Idle,
    Awaiting {
        /// Collection length observed when the signal fired.
        armed_len: usize,
    },
}

impl LoadGuard {
    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::Awaiting { .. })
    }

    /// Reports the current collection length.
    ///
    /// Only growth past the armed length re-arms the guard. A shrink keeps it `Awaiting` and
    /// lowers the mark, so any later growth re-arms it.
    ///
    /// Returns `true` when this re-armed the guard.
    pub fn observe_len(&mut self, len: usize) -> bool {
        match *self {
            Self::Awaiting { armed_len } if len > armed_len => {
                rlog!(debug, armed_len, len, "load guard: Awaiting -> Idle");
                *self = Self::Idle;
                true
            }
            Self::Awaiting { armed_len } if len < armed_len => {
                rlog!(debug, armed_len, len, "load guard: shrink while awaiting");
                *self = Self::Awaiting { armed_len: len };
                false
            }
            _ => false,
        }
    }

    /// Evaluates a scroll position.
    ///
    /// Returns `true` exactly when the caller must emit the end-reached signal.
    pub fn check(&mut self, len: usize, distance_to_end: f64, threshold: f64) -> bool {
        self.observe_len(len);
        if self.is_awaiting() || distance_to_end.is_nan() || distance_to_end > threshold {
            return false;
        }
        rlog!(
            debug,
            len,
            distance_to_end,
            threshold,
            "load guard: Idle -> Awaiting"
        );
        *self = Self::Awaiting { armed_len: len };
        true
    }

    /// Forces the guard back to `Idle`, e.g. after a failed load the host wants to retry.
    pub fn rearm(&mut self) {
        *self = Self::Idle;
    }
}
