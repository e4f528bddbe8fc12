use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rng_source::RngSource;
use crate::rotate::Strategy;

pub const ENV_PREFIX: &str = "JUGGLE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub verify: VerifyConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Layer an optional config file under `JUGGLE__*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings =
                settings.add_source(config::File::from(path).required(true));
        }

        settings
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationConfig {
    #[serde(default)]
    pub strategy: Strategy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyConfig {
    #[serde(default = "default::trials")]
    pub trials: usize,

    /// Longest sequence generated per trial
    #[serde(default = "default::max_len")]
    pub max_len: usize,

    #[serde(default)]
    pub rng: RngSource,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            trials: default::trials(),
            max_len: default::max_len(),
            rng: RngSource::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
}

mod default {
    pub fn trials() -> usize {
        10_000
    }

    pub fn max_len() -> usize {
        256
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_toml() {
        let config = Config {
            rotation: RotationConfig {
                strategy: Strategy::Cycles,
            },
            verify: VerifyConfig {
                trials: 500,
                max_len: 64,
                rng: RngSource::Std(42),
            },
            log: LogConfig {
                format: LogFormat::Pretty,
            },
        };

        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn from_toml() {
        const TOML: &str = indoc::indoc! {
            r#"
            [rotation]
            strategy = "cycles"

            [verify]
            trials = 100
            rng = { kind = "small", seed = 3 }
            "#
        };

        let config: Config = toml::from_str(TOML).unwrap();

        assert_eq!(config.rotation.strategy, Strategy::Cycles);
        assert_eq!(config.verify.trials, 100);
        assert_eq!(config.verify.max_len, 256);
        assert_eq!(config.verify.rng, RngSource::Small(3));
        assert_eq!(config.log.format, LogFormat::Compact);
    }

    #[test]
    fn empty_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn rng_as_string() {
        let config: Config =
            toml::from_str("[verify]\nrng = \"std:9\"").unwrap();

        assert_eq!(config.verify.rng, RngSource::Std(9));
    }

    #[test]
    fn verify_overrides_from_env() {
        // Only this test touches JUGGLE__VERIFY__*
        std::env::set_var("JUGGLE__VERIFY__RNG", "small:3");
        std::env::set_var("JUGGLE__VERIFY__TRIALS", "7");

        let config = Config::load(None);

        std::env::remove_var("JUGGLE__VERIFY__RNG");
        std::env::remove_var("JUGGLE__VERIFY__TRIALS");

        let config = config.unwrap();
        assert_eq!(config.verify.rng, RngSource::Small(3));
        assert_eq!(config.verify.trials, 7);
    }

    #[test]
    fn through_config_builder() {
        const TOML: &str = indoc::indoc! {
            r#"
            [rotation]
            strategy = "reversal"

            [log]
            format = "pretty"
            "#
        };

        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(TOML, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.rotation.strategy, Strategy::Reversal);
        assert_eq!(config.log.format, LogFormat::Pretty);
    }
}
