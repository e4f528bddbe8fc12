use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use juggle::config::VerifyConfig;
use juggle::rng_source::RngSource;
use juggle::verify::run_with_progress;

#[derive(Debug, Clone, Args)]
pub struct Verify {
    #[clap(short, long)]
    pub trials: Option<usize>,

    #[clap(short, long)]
    pub max_len: Option<usize>,

    /// thread, small:<seed> or std:<seed>
    #[clap(short, long)]
    pub rng: Option<RngSource>,
}

pub fn verify(args: &Verify, config: &VerifyConfig) -> eyre::Result<()> {
    let config = VerifyConfig {
        trials: args.trials.unwrap_or(config.trials),
        max_len: args.max_len.unwrap_or(config.max_len),
        rng: args.rng.unwrap_or(config.rng),
    };

    let pb = ProgressBar::new(config.trials as u64).with_message("Verifying");
    pb.set_style(ProgressStyle::with_template(
        "{msg} {wide_bar} {pos}/{len} [{elapsed_precise}]",
    )?);

    let report = run_with_progress(&config, || pb.inc(1));

    pb.finish_and_clear();

    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.passed() {
        eyre::bail!(
            "{} checks failed across {} trials",
            report.failures.len(),
            report.trials
        );
    }

    Ok(())
}
