//! Error types for `fitcalc-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
  #[error("unknown workout type {code:?}; valid codes: {valid}")]
  UnknownWorkoutType { code: String, valid: String },

  #[error("{code} expects {expected} parameters ({fields}), got {actual}")]
  Arity {
    code:     &'static str,
    fields:   String,
    expected: usize,
    actual:   usize,
  },

  #[error("{field} must be a whole number, got {value}")]
  NonIntegerParam { field: &'static str, value: f64 },

  #[error("{field} is out of range, got {value}")]
  ParamOutOfRange { field: &'static str, value: f64 },

  /// Mean speed divides by the duration.
  #[error("workout duration must be non-zero")]
  ZeroDuration,

  /// The walking calorie formula floor-divides by the walker's height.
  #[error("walker height must be non-zero")]
  ZeroHeight,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
