//! Randomized self-check of the rotation properties.
//!
//! Every trial draws a length and a distance, rotates a sequence of distinct
//! values with both strategies and checks the results against each other,
//! against `<[T]>::rotate_left` and against the inverse rotation. Trials are
//! independent and run in parallel.

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::VerifyConfig;
use crate::normalize::normalize;
use crate::rng_source::RngSource;
use crate::rotate::{rotate_using, Strategy};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Reversal and cycles produce the same sequence
    StrategiesAgree,
    /// Result equals the standard library rotation
    MatchesReference,
    /// Rotating by `-d` undoes rotating by `d`
    RoundTrip,
    /// `d` and `d + k * n` give the same result
    ModuloInvariance,
    /// Sequences shorter than two elements never change
    ShortIsNoOp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub property: Property,
    pub n: usize,
    pub d: isize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub trials: usize,
    pub max_len: usize,
    pub rng: RngSource,
    pub failures: Vec<Failure>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

pub fn run(config: &VerifyConfig) -> Report {
    run_with_progress(config, || {})
}

/// Run all trials, calling `on_trial` once each trial completes.
#[tracing::instrument(skip(config, on_trial), fields(trials = config.trials))]
pub fn run_with_progress<F>(config: &VerifyConfig, on_trial: F) -> Report
where
    F: Fn() + Sync + Send,
{
    let failures: Vec<Failure> = (0..config.trials)
        .into_par_iter()
        .flat_map_iter(|index| {
            let mut rng = config.rng.fork(index as u64).to_rng();
            let failures = trial(&mut rng, config.max_len);

            on_trial();

            failures
        })
        .collect();

    for failure in &failures {
        tracing::warn!(
            property = ?failure.property,
            n = failure.n,
            d = failure.d,
            "Check failed"
        );
    }

    tracing::info!(failures = failures.len(), "Verification finished");

    Report {
        trials: config.trials,
        max_len: config.max_len,
        rng: config.rng,
        failures,
    }
}

fn trial<R: Rng>(rng: &mut R, max_len: usize) -> Vec<Failure> {
    let n = rng.gen_range(0..=max_len);
    let bound =
        isize::try_from(n).unwrap_or(isize::MAX).clamp(1, isize::MAX / 4) * 4;
    let d = rng.gen_range(-bound..=bound);
    let k = rng.gen_range(-8_isize..=8);

    let mut failures = vec![];
    let mut check = |holds: bool, property| {
        if !holds {
            failures.push(Failure { property, n, d });
        }
    };

    let original: Vec<usize> = (0..n).collect();
    let rotated = |s: &[usize], d, strategy| {
        let mut s = s.to_vec();
        rotate_using(&mut s, n, d, strategy);
        s
    };

    let by_reversal = rotated(&original[..], d, Strategy::Reversal);
    let by_cycles = rotated(&original[..], d, Strategy::Cycles);
    check(by_reversal == by_cycles, Property::StrategiesAgree);

    let mut expected = original.clone();
    if n > 0 {
        expected.rotate_left(normalize(n, d));
    }
    check(by_cycles == expected, Property::MatchesReference);

    let back = rotated(&by_cycles[..], -d, Strategy::Cycles);
    check(back == original, Property::RoundTrip);

    let shifted = (n as isize)
        .checked_mul(k)
        .and_then(|kn| kn.checked_add(d));
    if let Some(shifted) = shifted {
        let by_shifted = rotated(&original[..], shifted, Strategy::Cycles);
        check(by_shifted == by_cycles, Property::ModuloInvariance);
    }

    if n <= 1 {
        check(by_reversal == original, Property::ShortIsNoOp);
    }

    failures
}
