/// The geometric input that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    ItemHeight,
    ViewportHeight,
}

impl core::fmt::Display for Dimension {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ItemHeight => f.write_str("item height"),
            Self::ViewportHeight => f.write_str("viewport height"),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A height fed into a recomputation was zero, negative, NaN or infinite.
    ///
    /// The engine renders nothing until the host supplies a valid value.
    #[error("invalid geometry: {dimension} must be positive and finite (got {value})")]
    InvalidGeometry { dimension: Dimension, value: f64 },

    #[error("end-reached threshold must be a non-negative number (got {0})")]
    InvalidThreshold(f64),
}

impl Error {
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, Self::InvalidGeometry { .. })
    }
}

pub(crate) fn check_height(dimension: Dimension, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidGeometry { dimension, value })
    }
}
