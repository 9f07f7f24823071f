//! Display-ready workout summaries.

use std::fmt;

use serde::Serialize;

use crate::workout::Workout;

/// The metrics of one workout, labelled with its training type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
  pub training_type: String,
  /// Hours.
  pub duration:      f64,
  /// Kilometres.
  pub distance:      f64,
  /// Kilometres per hour.
  pub speed:         f64,
  /// Kilocalories.
  pub calories:      f64,
}

impl Summary {
  /// Replace the training type, e.g. with a configured display name.
  pub fn with_training_type(mut self, training_type: impl Into<String>) -> Self {
    self.training_type = training_type.into();
    self
  }

  /// Render the fixed one-line message. Every number has three decimals.
  pub fn message(&self) -> String { self.to_string() }
}

impl From<&Workout> for Summary {
  fn from(workout: &Workout) -> Self {
    Self {
      training_type: workout.kind().display_name().to_string(),
      duration:      workout.duration_hours(),
      distance:      workout.distance_km(),
      speed:         workout.mean_speed_kmh(),
      calories:      workout.calories_kcal(),
    }
  }
}

impl fmt::Display for Summary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. \
       скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
      self.training_type, self.duration, self.distance, self.speed,
      self.calories,
    )
  }
}

/// Format the summary line of `workout` with its default display name.
pub fn format_summary(workout: &Workout) -> String {
  workout.summary().message()
}
