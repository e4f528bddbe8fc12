use std::fmt;
use std::str::FromStr;

use rand::rngs::{SmallRng, StdRng};
use rand::{RngCore, SeedableRng};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

/// Where verification runs draw their randomness from.
///
/// Seeded sources make a failing run reproducible. Deserializes from either
/// the `{ kind, seed }` form it serializes to or the `small:<seed>` string
/// form, so it can be set from environment variables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[serde(tag = "kind", content = "seed")]
pub enum RngSource {
    #[default]
    Thread,
    Small(u64),
    Std(u64),
}

impl RngSource {
    pub fn to_rng(&self) -> Box<dyn RngCore + Send> {
        match self {
            RngSource::Thread => Box::new(StdRng::from_entropy()),
            RngSource::Small(seed) => {
                Box::new(SmallRng::seed_from_u64(*seed))
            }
            RngSource::Std(seed) => Box::new(StdRng::seed_from_u64(*seed)),
        }
    }

    /// Derive an independent, reproducible source for the `index`-th worker.
    pub fn fork(&self, index: u64) -> Self {
        match self {
            RngSource::Thread => RngSource::Thread,
            RngSource::Small(seed) => {
                RngSource::Small(seed.wrapping_add(index))
            }
            RngSource::Std(seed) => RngSource::Std(seed.wrapping_add(index)),
        }
    }
}

impl<'de> Deserialize<'de> for RngSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Tagged(Tagged),
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "snake_case")]
        #[serde(tag = "kind", content = "seed")]
        enum Tagged {
            Thread,
            Small(u64),
            Std(u64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => s.parse().map_err(D::Error::custom),
            Repr::Tagged(Tagged::Thread) => Ok(RngSource::Thread),
            Repr::Tagged(Tagged::Small(seed)) => Ok(RngSource::Small(seed)),
            Repr::Tagged(Tagged::Std(seed)) => Ok(RngSource::Std(seed)),
        }
    }
}

impl fmt::Display for RngSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RngSource::Thread => write!(f, "thread"),
            RngSource::Small(seed) => write!(f, "small:{}", seed),
            RngSource::Std(seed) => write!(f, "std:{}", seed),
        }
    }
}

impl FromStr for RngSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidRngSource(s.to_string());

        if s == "thread" {
            return Ok(RngSource::Thread);
        }

        let (kind, seed) = s.split_once(':').ok_or_else(invalid)?;
        let seed = seed.parse().map_err(|_| invalid())?;

        match kind {
            "small" => Ok(RngSource::Small(seed)),
            "std" => Ok(RngSource::Std(seed)),
            _ => Err(invalid()),
        }
    }
}
