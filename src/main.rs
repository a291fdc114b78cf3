//! Run several days in one process and add up their benchmarks.
//!
//! Days are picked by name, like `d03 d05`, before any options. Without any
//! names every day is run.

use lib::cli::{self, Opts, Report};
use lib::prelude::*;

struct Day {
    name: &'static str,
    run: fn(&Opts) -> Result<Option<Report>>,
}

macro_rules! days {
    ($($name:literal => $module:ident, $expect:expr;)*) => {
        [$(
            Day {
                name: $name,
                run: |opts| {
                    cli::run(
                        opts,
                        concat!("inputs/", $name, ".txt"),
                        concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $name, ".txt"),
                        Some($expect),
                        aoc2023::$module::solve,
                    )
                },
            },
        )*]
    };
}

fn main() -> Result<()> {
    let days = days! {
        "d01" => trebuchet, (209, 281);
        "d02" => cubes, (8, 2286);
        "d03" => schematic, (4361, 467835);
        "d04" => scratchcards, (13, 30);
        "d05" => almanac, (35, 46);
        "d06" => boat_race, (288, 71503);
        "d07" => camel_cards, (6440, 5905);
        "d08" => wasteland, (6, 6);
        "d09" => mirage, (114, 2);
        "d10" => pipe_maze, (23, 4);
        "d11" => galaxies, (374, 82000210);
        "d12" => springs, (21, 525152);
        "d13" => mirrors, (405, 400);
        "d14" => dish, (136, 64);
        "d15" => lens_library, (1320, 145);
        "d16" => beams, (46, 51);
    };

    let mut args = std::env::args_os().skip(1).peekable();
    let mut names = Vec::new();

    while let Some(name) = args.next_if(|arg| arg.to_str().is_some_and(|arg| !arg.starts_with('-'))) {
        names.push(name.to_string_lossy().into_owned());
    }

    let opts = Opts::parse_from(args)?;
    opts.install_logger()?;

    let selected = if names.is_empty() {
        days.iter().collect::<Vec<_>>()
    } else {
        names
            .iter()
            .map(|name| {
                days.iter()
                    .find(|day| day.name == name.as_str())
                    .with_context(|| format!("unknown day `{name}`"))
            })
            .collect::<Result<Vec<_>>>()?
    };

    ensure!(
        opts.input().is_none() || selected.len() == 1,
        "`--input` can only be used when running a single day"
    );

    let mut total = Report::default();
    let mut reports = 0;

    for day in selected {
        log::debug!("running {}", day.name);

        if let Some(report) = (day.run)(&opts)? {
            total += &report;
            reports += 1;
        }
    }

    if reports > 1 {
        log::info!("total of {reports} days: {total}");
    }

    Ok(())
}
