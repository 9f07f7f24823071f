//! The static table of workout kinds.
//!
//! Each kind is identified on the wire by a three-letter code and carries its
//! positional parameter layout, its action length, and the display name used
//! in summaries. Nothing here is mutable at runtime.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  constants::{LEN_PADDLE_M, LEN_STEP_M},
};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum WorkoutKind {
  #[serde(rename = "SWM")]
  Swimming,
  #[serde(rename = "RUN")]
  Running,
  #[serde(rename = "WLK")]
  Walking,
}

impl WorkoutKind {
  /// Every known kind, in the order their codes are listed in errors.
  pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::Walking];

  /// The three-letter code that selects this kind.
  pub fn code(self) -> &'static str {
    match self {
      Self::Swimming => "SWM",
      Self::Running => "RUN",
      Self::Walking => "WLK",
    }
  }

  /// The name printed as the training type in a summary.
  pub fn display_name(self) -> &'static str {
    match self {
      Self::Swimming => "Swimming",
      Self::Running => "Running",
      Self::Walking => "SportsWalking",
    }
  }

  /// Positional parameter names, in the order packages supply them.
  pub fn fields(self) -> &'static [&'static str] {
    match self {
      Self::Swimming => &[
        "action_count",
        "duration_hours",
        "weight_kg",
        "pool_length_m",
        "pool_lap_count",
      ],
      Self::Running => &["action_count", "duration_hours", "weight_kg"],
      Self::Walking => {
        &["action_count", "duration_hours", "weight_kg", "height_cm"]
      }
    }
  }

  pub fn arity(self) -> usize { self.fields().len() }

  /// Distance covered by one action (step or stroke), in metres.
  pub fn step_length_m(self) -> f64 {
    match self {
      Self::Swimming => LEN_PADDLE_M,
      Self::Running | Self::Walking => LEN_STEP_M,
    }
  }

  /// Resolve a code exactly as written; codes are case-sensitive.
  pub fn from_code(code: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|kind| kind.code() == code)
      .ok_or_else(|| Error::UnknownWorkoutType {
        code:  code.to_string(),
        valid: Self::code_list(),
      })
  }

  /// Comma-separated list of every known code.
  pub fn code_list() -> String {
    Self::ALL.map(Self::code).join(", ")
  }
}

impl FromStr for WorkoutKind {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::from_code(s) }
}

impl fmt::Display for WorkoutKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}
