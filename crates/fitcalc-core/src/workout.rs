//! The workout model.
//!
//! A [`Workout`] holds the raw sensor inputs of one session together with the
//! metrics derived from them. Metrics are computed once, when the workout is
//! constructed, and the value is immutable afterwards: every field is private
//! and only exposed through accessors.

use crate::{
  Error, Result,
  constants::{
    M_IN_KM, MIN_IN_H, RUN_SPEED_MULTIPLIER, RUN_SPEED_SHIFT,
    SWM_SPEED_SHIFT, SWM_WEIGHT_MULTIPLIER, WLK_SPEED_HEIGHT_MULTIPLIER,
    WLK_WEIGHT_MULTIPLIER,
  },
  kind::WorkoutKind,
  summary::Summary,
};

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// The inputs that only some kinds carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
  Running,
  Walking { height_cm: f64 },
  Swimming { pool_length_m: f64, pool_lap_count: i64 },
}

impl Activity {
  pub fn kind(&self) -> WorkoutKind {
    match self {
      Self::Running => WorkoutKind::Running,
      Self::Walking { .. } => WorkoutKind::Walking,
      Self::Swimming { .. } => WorkoutKind::Swimming,
    }
  }
}

/// Derived metrics of a workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
  pub distance_km:    f64,
  pub mean_speed_kmh: f64,
  pub calories_kcal:  f64,
}

// ─── Workout ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
  activity:       Activity,
  action_count:   i64,
  duration_hours: f64,
  weight_kg:      f64,
  metrics:        Metrics,
}

impl Workout {
  pub fn running(
    action_count: i64,
    duration_hours: f64,
    weight_kg: f64,
  ) -> Result<Self> {
    Self::new(Activity::Running, action_count, duration_hours, weight_kg)
  }

  pub fn walking(
    action_count: i64,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
  ) -> Result<Self> {
    Self::new(
      Activity::Walking { height_cm },
      action_count,
      duration_hours,
      weight_kg,
    )
  }

  pub fn swimming(
    action_count: i64,
    duration_hours: f64,
    weight_kg: f64,
    pool_length_m: f64,
    pool_lap_count: i64,
  ) -> Result<Self> {
    Self::new(
      Activity::Swimming {
        pool_length_m,
        pool_lap_count,
      },
      action_count,
      duration_hours,
      weight_kg,
    )
  }

  /// Validate the divisors and compute the metrics.
  ///
  /// Only the two values the formulas divide by are checked. Anything else,
  /// including a negative weight, is accepted as given.
  fn new(
    activity: Activity,
    action_count: i64,
    duration_hours: f64,
    weight_kg: f64,
  ) -> Result<Self> {
    if duration_hours == 0.0 {
      return Err(Error::ZeroDuration);
    }
    if let Activity::Walking { height_cm } = activity
      && height_cm == 0.0
    {
      return Err(Error::ZeroHeight);
    }

    let distance_km = action_count as f64 * activity.kind().step_length_m()
      / M_IN_KM;
    let mean_speed_kmh = match activity {
      Activity::Swimming {
        pool_length_m,
        pool_lap_count,
      } => pool_length_m * pool_lap_count as f64 / M_IN_KM / duration_hours,
      Activity::Running | Activity::Walking { .. } => {
        distance_km / duration_hours
      }
    };
    let calories_kcal = match activity {
      Activity::Running => {
        (RUN_SPEED_MULTIPLIER * mean_speed_kmh - RUN_SPEED_SHIFT) * weight_kg
          / M_IN_KM
          * duration_hours
          * MIN_IN_H
      }
      Activity::Walking { height_cm } => {
        (WLK_WEIGHT_MULTIPLIER * weight_kg
          + floor_div(mean_speed_kmh.powi(2), height_cm)
            * WLK_SPEED_HEIGHT_MULTIPLIER
            * weight_kg)
          * duration_hours
          * MIN_IN_H
      }
      Activity::Swimming { .. } => {
        (mean_speed_kmh + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * weight_kg
      }
    };

    Ok(Self {
      activity,
      action_count,
      duration_hours,
      weight_kg,
      metrics: Metrics {
        distance_km,
        mean_speed_kmh,
        calories_kcal,
      },
    })
  }

  pub fn kind(&self) -> WorkoutKind { self.activity.kind() }

  pub fn activity(&self) -> &Activity { &self.activity }

  pub fn action_count(&self) -> i64 { self.action_count }

  pub fn duration_hours(&self) -> f64 { self.duration_hours }

  pub fn weight_kg(&self) -> f64 { self.weight_kg }

  pub fn metrics(&self) -> Metrics { self.metrics }

  /// Distance covered, derived from the action count and action length.
  pub fn distance_km(&self) -> f64 { self.metrics.distance_km }

  /// Mean speed in km/h. Swimming derives it from pool geometry rather than
  /// from [`Self::distance_km`].
  pub fn mean_speed_kmh(&self) -> f64 { self.metrics.mean_speed_kmh }

  pub fn calories_kcal(&self) -> f64 { self.metrics.calories_kcal }

  /// The display-ready summary of this workout.
  pub fn summary(&self) -> Summary { Summary::from(self) }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Floor division on floats: the quotient rounded toward negative infinity,
/// derived from the floating remainder so that exact multiples stay exact.
///
/// `b` must be non-zero.
pub(crate) fn floor_div(a: f64, b: f64) -> f64 {
  let rem = a % b;
  let mut div = (a - rem) / b;
  if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
    div -= 1.0;
  }
  if div == 0.0 {
    return 0.0_f64.copysign(a / b);
  }
  let floored = div.floor();
  if div - floored > 0.5 {
    floored + 1.0
  } else {
    floored
  }
}
