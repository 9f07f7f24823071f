//! Building workouts from a type code and a flat parameter list.

use crate::{Error, Result, kind::WorkoutKind, workout::Workout};

/// Build a workout from `type_code` and its positional `params`.
///
/// | code  | params                                                            |
/// |-------|-------------------------------------------------------------------|
/// | `SWM` | action_count, duration_hours, weight_kg, pool_length_m, pool_lap_count |
/// | `RUN` | action_count, duration_hours, weight_kg                           |
/// | `WLK` | action_count, duration_hours, weight_kg, height_cm                |
///
/// The parameter count must match exactly; nothing is padded or dropped.
pub fn build_workout(type_code: &str, params: &[f64]) -> Result<Workout> {
  let kind = WorkoutKind::from_code(type_code)?;

  let workout = match (kind, params) {
    (WorkoutKind::Swimming, &[action, duration, weight, length, laps]) => {
      Workout::swimming(
        whole("action_count", action)?,
        duration,
        weight,
        length,
        whole("pool_lap_count", laps)?,
      )
    }
    (WorkoutKind::Running, &[action, duration, weight]) => {
      Workout::running(whole("action_count", action)?, duration, weight)
    }
    (WorkoutKind::Walking, &[action, duration, weight, height]) => {
      Workout::walking(whole("action_count", action)?, duration, weight, height)
    }
    (kind, params) => {
      return Err(Error::Arity {
        code:     kind.code(),
        fields:   kind.fields().join(", "),
        expected: kind.arity(),
        actual:   params.len(),
      });
    }
  }?;

  tracing::debug!(code = kind.code(), ?params, "built workout");
  Ok(workout)
}

/// Convert a parameter that counts discrete things.
///
/// `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
fn whole(field: &'static str, value: f64) -> Result<i64> {
  if !value.is_finite() || value.fract() != 0.0 {
    return Err(Error::NonIntegerParam { field, value });
  }
  if !(i64::MIN as f64..i64::MAX as f64).contains(&value) {
    return Err(Error::ParamOutOfRange { field, value });
  }
  Ok(value as i64)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dispatches_each_code_to_its_kind() {
    let cases: [(&str, &[f64], WorkoutKind); 3] = [
      ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0], WorkoutKind::Swimming),
      ("RUN", &[15000.0, 1.0, 75.0], WorkoutKind::Running),
      ("WLK", &[9000.0, 1.0, 75.0, 180.0], WorkoutKind::Walking),
    ];
    for (code, params, kind) in cases {
      assert_eq!(build_workout(code, params).unwrap().kind(), kind);
    }
  }

  #[test]
  fn missing_param_is_an_arity_error() {
    let err = build_workout("RUN", &[1.0, 2.0]).unwrap_err();
    assert_eq!(
      err,
      Error::Arity {
        code:     "RUN",
        fields:   "action_count, duration_hours, weight_kg".into(),
        expected: 3,
        actual:   2,
      }
    );
  }

  #[test]
  fn extra_param_is_an_arity_error() {
    let err = build_workout("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]);
    assert!(matches!(
      err,
      Err(Error::Arity {
        expected: 4,
        actual: 5,
        ..
      })
    ));
  }

  #[test]
  fn unknown_code_is_checked_before_arity() {
    let err = build_workout("XYZ", &[]).unwrap_err();
    assert!(matches!(err, Error::UnknownWorkoutType { .. }));
  }

  #[test]
  fn fractional_counts_are_rejected() {
    assert_eq!(
      build_workout("RUN", &[100.5, 1.0, 75.0]).unwrap_err(),
      Error::NonIntegerParam {
        field: "action_count",
        value: 100.5,
      }
    );
    assert!(matches!(
      build_workout("SWM", &[720.0, 1.0, 80.0, 25.0, f64::NAN]),
      Err(Error::NonIntegerParam {
        field: "pool_lap_count",
        ..
      })
    ));
  }

  #[test]
  fn counts_beyond_i64_are_rejected() {
    assert_eq!(
      build_workout("RUN", &[1e19, 1.0, 75.0]).unwrap_err(),
      Error::ParamOutOfRange {
        field: "action_count",
        value: 1e19,
      }
    );
    assert!(matches!(
      build_workout("SWM", &[720.0, 1.0, 80.0, 25.0, -1e19]),
      Err(Error::ParamOutOfRange {
        field: "pool_lap_count",
        ..
      })
    ));
    // 2^63 itself does not fit.
    assert!(matches!(
      build_workout("RUN", &[9_223_372_036_854_775_808.0, 1.0, 75.0]),
      Err(Error::ParamOutOfRange { .. })
    ));
  }

  #[test]
  fn large_counts_within_range_are_kept() {
    let w = build_workout("RUN", &[1e15, 1.0, 75.0]).unwrap();
    assert_eq!(w.action_count(), 1_000_000_000_000_000);
  }

  #[test]
  fn invariant_errors_propagate_from_construction() {
    assert_eq!(
      build_workout("RUN", &[100.0, 0.0, 75.0]).unwrap_err(),
      Error::ZeroDuration
    );
    assert_eq!(
      build_workout("WLK", &[100.0, 1.0, 75.0, 0.0]).unwrap_err(),
      Error::ZeroHeight
    );
  }
}
