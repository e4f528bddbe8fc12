use std::fmt::Display;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use itertools::Itertools;
use juggle::config::{Config, LogFormat};
use rotate::{rotate, Rotate};
use sort::{sort, Sort};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use verify::{verify, Verify};

mod rotate;
mod sort;
mod verify;

#[derive(Parser)]
#[clap(version)]
pub struct Args {
    #[clap(short, long, env)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    opt: Opt,
}

#[derive(Debug, Clone, Subcommand)]
enum Opt {
    Rotate(Rotate),
    Sort(Sort),
    Verify(Verify),
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;

    init_tracing(config.log.format);

    match args.opt {
        Opt::Rotate(args) => {
            rotate(&args, &config.rotation)?;
        }
        Opt::Sort(args) => {
            sort(&args)?;
        }
        Opt::Verify(args) => {
            verify(&args, &config.verify)?;
        }
    }

    Ok(())
}

fn init_tracing(format: LogFormat) {
    // stdout carries command output
    let registry =
        tracing_subscriber::registry().with(EnvFilter::from_default_env());

    match format {
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .init(),
    }
}

pub fn print_values<T>(values: &[T], plain: bool) -> eyre::Result<()>
where
    T: Display + serde::Serialize,
{
    if plain {
        println!("{}", values.iter().join(" "));
    } else {
        println!("{}", serde_json::to_string(values)?);
    }

    Ok(())
}
