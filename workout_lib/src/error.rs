use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("geolocation unavailable: {0}")]
    GeolocationUnavailable(#[from] GeolocationError),

    #[error("invalid workout data: {0}")]
    InvalidWorkoutData(InvalidInput),

    #[error("unknown workout type {0:?}")]
    UnknownWorkoutKind(String),

    /// Only reachable if a caller skipped validation.
    #[error("cannot derive {metric}: {divisor} is zero")]
    DivisionByZeroDerivation {
        metric: &'static str,
        divisor: &'static str,
    },

    /// Only reachable if a caller skipped validation.
    #[error("derived {metric} is not finite")]
    NonFiniteDerivation { metric: &'static str },

    #[error("no map location selected")]
    NoPendingClick,
}

#[derive(Debug, Error, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeolocationError {
    #[error("geolocation is not supported")]
    Unsupported,
    #[error("permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    PositionUnavailable,
    #[error("timed out")]
    Timeout,
    #[error("{0}")]
    Other(String),
}

/// The first form field that failed validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("{field} is not a number")]
    NotANumber { field: &'static str },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("derived {metric} is not finite")]
    MetricNotFinite { metric: &'static str },
}

impl InvalidInput {
    pub fn field(&self) -> &'static str {
        match self {
            InvalidInput::NotANumber { field } | InvalidInput::NotPositive { field, .. } => field,
            InvalidInput::MetricNotFinite { metric } => metric,
        }
    }
}
