use std::path::{Path, PathBuf};

use clap::Args;
use eyre::WrapErr;
use juggle::config::RotationConfig;
use juggle::{rotate_range, Strategy};

use crate::print_values;

#[derive(Debug, Clone, Args)]
pub struct Rotate {
    /// Positions to shift; positive shifts left, negative shifts right
    #[clap(short, long, allow_negative_numbers = true)]
    pub distance: isize,

    /// Overrides the configured strategy
    #[clap(short, long)]
    pub strategy: Option<Strategy>,

    /// First position of the rotated range
    #[clap(long, default_value_t = 0)]
    pub offset: usize,

    /// Length of the rotated range, defaults to the rest of the values
    #[clap(long)]
    pub len: Option<usize>,

    /// JSON file holding an array of integers
    #[clap(short, long, conflicts_with = "values")]
    pub input: Option<PathBuf>,

    #[clap(long)]
    pub plain: bool,

    #[clap(allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

pub fn rotate(args: &Rotate, config: &RotationConfig) -> eyre::Result<()> {
    let mut values = match &args.input {
        Some(path) => read_values(path)?,
        None => args.values.clone(),
    };

    let strategy = args.strategy.unwrap_or(config.strategy);
    let len = args
        .len
        .unwrap_or_else(|| values.len().saturating_sub(args.offset));

    tracing::debug!(
        n = values.len(),
        offset = args.offset,
        len,
        distance = args.distance,
        %strategy,
        "Rotating"
    );

    rotate_range(&mut values, args.offset, len, args.distance, strategy)?;

    print_values(&values, args.plain)
}

fn read_values(path: &Path) -> eyre::Result<Vec<i64>> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&contents).wrap_err_with(|| {
        format!("Expected a JSON array of integers in {}", path.display())
    })
}
