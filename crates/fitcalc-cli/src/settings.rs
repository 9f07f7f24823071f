//! Runtime settings, layered from an optional TOML file and `FITCALC_*`
//! environment variables.

use std::{collections::HashMap, path::Path};

use anyhow::{Context, Result};
use config::{Config, ConfigBuilder, Environment, builder::DefaultState};
use fitcalc_core::WorkoutKind;
use serde::Deserialize;

/// How each summary is written to stdout.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  /// The fixed one-line message.
  #[default]
  Text,
  /// One JSON object per line.
  Json,
}

/// One sensor record: a workout code and its positional parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
  pub code:   String,
  pub params: Vec<f64>,
}

impl Package {
  pub fn new(code: &str, params: &[f64]) -> Self {
    Self {
      code:   code.to_string(),
      params: params.to_vec(),
    }
  }
}

/// Prefix of the environment variables that override file settings.
const ENV_PREFIX: &str = "FITCALC";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
  #[serde(default)]
  pub format:        OutputFormat,
  /// `None` when the key is absent; an explicit empty list runs nothing.
  #[serde(default)]
  pub packages:      Option<Vec<Package>>,
  /// Training type overrides keyed by workout code.
  #[serde(default)]
  pub display_names: HashMap<String, String>,
}

impl Settings {
  /// Read `path` if it exists, then apply environment overrides.
  pub fn load(path: &Path) -> Result<Self> {
    let builder =
      Config::builder().add_source(config::File::from(path).required(false));
    Self::from_builder(builder, Environment::with_prefix(ENV_PREFIX))
      .with_context(|| format!("loading settings from {}", path.display()))
  }

  /// Layer `env` over `builder`'s sources and deserialise the result.
  fn from_builder(
    builder: ConfigBuilder<DefaultState>,
    env: Environment,
  ) -> Result<Self> {
    builder
      .add_source(env)
      .build()
      .context("failed to read configuration")?
      .try_deserialize()
      .context("failed to deserialise Settings")
  }

  /// The configured packages, or the demo set when the key is absent.
  pub fn packages(&self) -> Vec<Package> {
    self.packages.clone().unwrap_or_else(demo_packages)
  }

  /// The output format, with a command-line `flag` taking precedence.
  pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
    flag.unwrap_or(self.format)
  }

  /// The training type printed for `kind`.
  ///
  /// Override keys are matched without regard to case, since configuration
  /// sources may fold key case.
  pub fn display_name(&self, kind: WorkoutKind) -> &str {
    self
      .display_names
      .iter()
      .find(|(code, _)| code.eq_ignore_ascii_case(kind.code()))
      .map_or(kind.display_name(), |(_, name)| name.as_str())
  }
}

/// The three sample sessions shipped with the calculator.
pub fn demo_packages() -> Vec<Package> {
  vec![
    Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    Package::new("RUN", &[15000.0, 1.0, 75.0]),
    Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
  ]
}

#[cfg(test)]
pub(crate) fn from_toml(raw: &str) -> Result<Settings> {
  from_toml_and_env(raw, &[])
}

/// Parse `raw` with `vars` standing in for the process environment.
#[cfg(test)]
pub(crate) fn from_toml_and_env(
  raw: &str,
  vars: &[(&str, &str)],
) -> Result<Settings> {
  let vars = vars
    .iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect::<config::Map<_, _>>();
  Settings::from_builder(
    Config::builder()
      .add_source(config::File::from_str(raw, config::FileFormat::Toml)),
    Environment::with_prefix(ENV_PREFIX).source(Some(vars)),
  )
}
