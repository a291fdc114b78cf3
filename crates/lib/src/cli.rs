//! Running solvers from the command line.

mod bench;
pub(crate) mod error;
mod output;
mod stdout_logger;

#[cfg(test)]
mod tests;

use core::fmt;
use core::ops::AddAssign;
use core::str::FromStr;
use core::time::Duration;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, bail, ensure, Context, Result};
use serde::Serialize;

use crate::input::IStr;

pub use self::error::{error_context, LineCol};
use self::output::{Output, OutputKind};

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Solve once and print the answer.
    #[default]
    Default,
    /// Solve repeatedly and print timings.
    Bench,
}

/// Options shared by every solver binary.
#[derive(Debug)]
pub struct Opts {
    pub mode: Mode,
    verbose: bool,
    /// Print JSON lines instead of text.
    json: bool,
    warmup: Duration,
    time_limit: Duration,
    /// Take exactly this many samples instead of sampling for `time_limit`.
    count: Option<usize>,
    /// Read input from this path instead of the default one.
    input: Option<PathBuf>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            mode: Mode::Default,
            verbose: false,
            json: false,
            warmup: Duration::from_millis(100),
            time_limit: Duration::from_millis(400),
            count: None,
            input: None,
        }
    }
}

impl Opts {
    /// Parse options from the process arguments and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;
        opts.install_logger()?;
        Ok(opts)
    }

    /// Parse options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter().map(Into::<OsString>::into);

        while let Some(arg) = it.next() {
            let Some(flag) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match flag {
                "--bench" => {
                    ensure!(opts.mode == Mode::Default, "duplicate `--bench` argument");
                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--warmup" => {
                    opts.warmup = Duration::from_millis(value(&mut it, flag)?);
                }
                "--time-limit" => {
                    opts.time_limit = Duration::from_millis(value(&mut it, flag)?);
                }
                "--count" => {
                    opts.count = Some(value(&mut it, flag)?);
                }
                "--input" => {
                    let path = it.next().context("missing argument to `--input`")?;
                    opts.input = Some(PathBuf::from(path));
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    /// Install the stdout logger, unless the output is JSON.
    pub fn install_logger(&self) -> Result<()> {
        if self.json {
            return Ok(());
        }

        log::set_max_level(if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        });

        log::set_logger(&STDOUT_LOGGER).map_err(|error| anyhow!("failed to set logger: {error}"))
    }

    /// Input path overriding the default one.
    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Human
        }
    }
}

/// Parse the value following `flag`.
fn value<T>(it: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = it
        .next()
        .with_context(|| format!("missing argument to `{flag}`"))?;

    let value = value
        .to_str()
        .with_context(|| format!("non-utf8 argument to `{flag}`"))?;

    value
        .parse()
        .with_context(|| format!("bad argument to `{flag}`"))
}

/// Run `solve` over the input at `read_path`, which is reported as `path`.
///
/// In bench mode the timing report is returned. A solver failing during a
/// benchmark is reported as an error message rather than propagated, so
/// that the remaining solvers of a batch still run.
pub fn run<O>(
    opts: &Opts,
    path: &str,
    read_path: &str,
    expected: Option<O>,
    solve: fn(IStr) -> Result<O>,
) -> Result<Option<Report>>
where
    O: fmt::Debug + PartialEq,
{
    let (input, path) = match opts.input() {
        Some(input) => (crate::input::read(input)?, input.display().to_string()),
        None => (crate::input::read(read_path)?, path.to_owned()),
    };

    log::debug!("{path}: read {} bytes", input.len());

    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    match opts.mode {
        Mode::Default => {
            let start = Instant::now();
            let value = solve(input).map_err(|error| error_context(&path, input, error))?;
            log::debug!("{path}: solved in {:?}", start.elapsed());

            check(&value, expected.as_ref())?;
            o.result(&path, &value)?;
            Ok(None)
        }
        Mode::Bench => match bench::bench(&mut o, opts, expected.as_ref(), || solve(input)) {
            Ok(report) => {
                o.report(&path, &report)?;
                Ok(Some(report))
            }
            Err(error) => {
                o.error(format_args!("{path}: {error:#}"))?;
                Ok(None)
            }
        },
    }
}

/// Compare a solver's answer with the expected one.
fn check<O>(value: &O, expected: Option<&O>) -> Result<()>
where
    O: fmt::Debug + PartialEq,
{
    if let Some(expected) = expected {
        ensure!(
            value == expected,
            "{value:?} (value) != {expected:?} (expected)"
        );
    }

    Ok(())
}

/// Timing report of a benchmark.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Report {
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
}

impl Report {
    /// Summarize sorted samples.
    pub fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();

        let avg = match u32::try_from(count) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => samples.iter().sum::<Duration>() / n,
        };

        Self {
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
            p50: percentile(samples, 50),
            p95: percentile(samples, 95),
            p99: percentile(samples, 99),
        }
    }
}

/// The `n`th percentile of sorted samples.
fn percentile(samples: &[Duration], n: usize) -> Duration {
    let Some(last) = samples.len().checked_sub(1) else {
        return Duration::ZERO;
    };

    samples[(samples.len() * n / 100).min(last)]
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count: {}, min: {:?}, max: {:?}, avg: {:?}, 50th: {:?}, 95th: {:?}, 99th: {:?}",
            self.count, self.min, self.max, self.avg, self.p50, self.p95, self.p99
        )
    }
}

/// Reports are added up to time a whole batch of solvers.
impl AddAssign<&Report> for Report {
    fn add_assign(&mut self, rhs: &Report) {
        self.count += rhs.count;
        self.min += rhs.min;
        self.max += rhs.max;
        self.avg += rhs.avg;
        self.p50 += rhs.p50;
        self.p95 += rhs.p95;
        self.p99 += rhs.p99;
    }
}
