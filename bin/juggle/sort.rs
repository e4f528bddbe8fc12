use clap::Args;
use juggle::sort::{insertion_sort, insertion_sort_by};

use crate::print_values;

#[derive(Debug, Clone, Args)]
pub struct Sort {
    #[clap(long)]
    pub desc: bool,

    #[clap(long)]
    pub plain: bool,

    #[clap(allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

pub fn sort(args: &Sort) -> eyre::Result<()> {
    let mut values = args.values.clone();

    if args.desc {
        insertion_sort_by(&mut values, |a, b| a < b);
    } else {
        insertion_sort(&mut values);
    }

    print_values(&values, args.plain)
}
