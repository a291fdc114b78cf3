use core::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;

use super::{check, Opts, Output, Report};

/// Time `solve` repeatedly, checking every answer against `expected`.
///
/// Samples are taken after a warmup, either a fixed number of times or until
/// the time limit has passed. At least one sample is always taken.
pub(super) fn bench<O, F>(
    o: &mut Output<impl Write>,
    opts: &Opts,
    expected: Option<&O>,
    mut solve: F,
) -> Result<Report>
where
    O: fmt::Debug + PartialEq,
    F: FnMut() -> Result<O>,
{
    let mut sample = || -> Result<Duration> {
        let start = Instant::now();
        let value = black_box(solve()?);
        let elapsed = start.elapsed();
        check(&value, expected)?;
        Ok(elapsed)
    };

    if !opts.warmup.is_zero() {
        o.info(format_args!("warming up ({:?})...", opts.warmup))?;
        let start = Instant::now();

        while start.elapsed() < opts.warmup {
            sample()?;
        }
    }

    let mut samples = Vec::new();

    match opts.count {
        Some(count) => {
            o.info(format_args!("sampling {count} time(s)..."))?;

            for _ in 0..count.max(1) {
                samples.push(sample()?);
            }
        }
        None => {
            o.info(format_args!("sampling ({:?})...", opts.time_limit))?;
            let start = Instant::now();

            loop {
                samples.push(sample()?);

                if start.elapsed() >= opts.time_limit {
                    break;
                }
            }
        }
    }

    samples.sort_unstable();
    log::debug!("collected {} samples", samples.len());
    Ok(Report::from_sorted(&samples))
}
