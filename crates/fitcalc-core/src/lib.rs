//! Workout metrics for the fitcalc calculator.
//!
//! Turns raw sensor readings (a workout code plus positional numbers) into
//! distance, mean speed and calories, and renders a one-line summary. Pure
//! and synchronous; no I/O lives here.
//!
//! ```
//! use fitcalc_core::{build_workout, format_summary};
//!
//! let workout = build_workout("RUN", &[15000.0, 1.0, 75.0]).unwrap();
//! assert!(format_summary(&workout).ends_with("Потрачено ккал: 699.750."));
//! ```

pub mod constants;
pub mod dispatch;
pub mod error;
pub mod kind;
pub mod summary;
pub mod workout;

pub use dispatch::build_workout;
pub use error::{Error, Result};
pub use kind::WorkoutKind;
pub use summary::{Summary, format_summary};
pub use workout::{Activity, Metrics, Workout};
