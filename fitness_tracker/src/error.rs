use thiserror::Error;

use crate::WorkoutKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Code is not one of `SWM`, `RUN` or `WLK`
    #[error("Unknown workout code: {code:?}")]
    UnknownWorkoutCode { code: String },

    /// Package carries too few or too many values for its kind
    #[error("{kind} expects {expected} values, got {actual}")]
    ArgumentArity {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    /// Reading is out of its physical range e.g. zero duration or negative weight
    #[error("Invalid {field}: {value}")]
    InvalidMagnitude { field: &'static str, value: f64 },
}
