//! Turning packages into summary lines.

use std::io::Write;

use anyhow::{Context, Result};
use fitcalc_core::build_workout;

use crate::settings::{OutputFormat, Settings};

/// How a run went.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
  pub printed: usize,
  pub failed:  usize,
}

/// Write one line per configured package to `out`, in order.
///
/// A package that fails to build is logged and skipped, unless `fail_fast` is
/// set, in which case the error is returned immediately.
pub fn run<W: Write>(
  settings: &Settings,
  format: OutputFormat,
  fail_fast: bool,
  out: &mut W,
) -> Result<Outcome> {
  let mut outcome = Outcome::default();

  for (index, package) in settings.packages().iter().enumerate() {
    let workout = match build_workout(&package.code, &package.params) {
      Ok(workout) => workout,
      Err(e) if fail_fast => {
        return Err(e).with_context(|| {
          format!("package {index} ({}) is invalid", package.code)
        });
      }
      Err(e) => {
        tracing::error!(index, code = %package.code, "skipping package: {e}");
        outcome.failed += 1;
        continue;
      }
    };

    let summary = workout
      .summary()
      .with_training_type(settings.display_name(workout.kind()));
    match format {
      OutputFormat::Text => writeln!(out, "{summary}"),
      OutputFormat::Json => {
        let json =
          serde_json::to_string(&summary).context("serialising summary")?;
        writeln!(out, "{json}")
      }
    }
    .context("writing summary")?;
    outcome.printed += 1;
  }

  Ok(outcome)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::settings::{Package, from_toml};

  fn lines(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out)
      .unwrap()
      .lines()
      .map(str::to_string)
      .collect()
  }

  #[test]
  fn demo_run_prints_in_input_order() {
    let mut out = Vec::new();
    let outcome =
      run(&Settings::default(), OutputFormat::Text, false, &mut out).unwrap();
    assert_eq!(outcome, Outcome {
      printed: 3,
      failed:  0,
    });

    let lines = lines(out);
    assert_eq!(lines, vec![
      "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
       Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
      "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
       Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
      "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 \
       км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
    ]);
  }

  #[test]
  fn bad_packages_are_skipped() {
    let settings = Settings {
      packages: Some(vec![
        Package::new("XYZ", &[1.0, 2.0, 3.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("RUN", &[1.0, 2.0]),
      ]),
      ..Settings::default()
    };
    let mut out = Vec::new();
    let outcome = run(&settings, OutputFormat::Text, false, &mut out).unwrap();
    assert_eq!(outcome, Outcome {
      printed: 1,
      failed:  2,
    });
    assert_eq!(lines(out).len(), 1);
  }

  #[test]
  fn fail_fast_stops_at_first_error() {
    let settings = Settings {
      packages: Some(vec![
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("XYZ", &[1.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
      ]),
      ..Settings::default()
    };
    let mut out = Vec::new();
    let err = run(&settings, OutputFormat::Text, true, &mut out).unwrap_err();
    assert!(err.to_string().contains("package 1 (XYZ)"));
    assert_eq!(lines(out).len(), 1);
  }

  #[test]
  fn empty_package_list_prints_nothing() {
    let settings = from_toml("packages = []").unwrap();
    let mut out = Vec::new();
    let outcome = run(&settings, OutputFormat::Text, false, &mut out).unwrap();
    assert_eq!(outcome, Outcome::default());
    assert!(out.is_empty());
  }

  #[test]
  fn json_lines_carry_overridden_names() {
    let settings = from_toml(
      r#"
        [[packages]]
        code = "WLK"
        params = [9000, 1, 75, 180]

        [display_names]
        WLK = "Walking"
      "#,
    )
    .unwrap();
    let mut out = Vec::new();
    run(&settings, OutputFormat::Json, false, &mut out).unwrap();

    let lines = lines(out);
    assert_eq!(lines.len(), 1);
    let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(value["training_type"], "Walking");
    assert_eq!(value["duration"], 1.0);
  }
}
