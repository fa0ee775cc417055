use thiserror::Error;

/// "No direct sunlight" is not an error: it is a [`Summary`](crate::Summary)
/// with no first/last instant.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    #[error("invalid location {latitude}°, {longitude}° (latitude must be within ±90°, longitude within ±180°)")]
    InvalidLocation { latitude: f64, longitude: f64 },

    #[error("invalid observation window: {reason}")]
    InvalidObservationWindow { reason: String },

    #[error("solar position computation failed: {message}")]
    PositionComputation { message: String },

    #[error("series length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_window(reason: impl Into<String>) -> Self {
        Self::InvalidObservationWindow {
            reason: reason.into(),
        }
    }

    pub(crate) fn position(message: impl Into<String>) -> Self {
        Self::PositionComputation {
            message: message.into(),
        }
    }

    pub(crate) fn check_lengths(expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::LengthMismatch { expected, actual })
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
