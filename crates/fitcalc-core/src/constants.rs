//! Unit conversions and calorie coefficients shared by every workout kind.

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

// ─── Action lengths ──────────────────────────────────────────────────────────

/// Length of one running or walking step, in metres.
pub const LEN_STEP_M: f64 = 0.65;
/// Length of one swimming stroke, in metres.
pub const LEN_PADDLE_M: f64 = 1.38;

// ─── Calorie coefficients ────────────────────────────────────────────────────

pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_SPEED_SHIFT: f64 = 20.0;

pub const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

pub const SWM_SPEED_SHIFT: f64 = 1.1;
pub const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;
