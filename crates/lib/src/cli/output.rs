use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use super::Report;

pub(crate) enum OutputKind {
    /// One JSON object per line.
    Json,
    Human,
}

/// Where a solver's messages, answers and reports go.
pub(crate) struct Output<W> {
    out: W,
    kind: OutputKind,
}

impl<W> Output<W>
where
    W: Write,
{
    pub(crate) fn new(out: W, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    pub(crate) fn info(&mut self, text: impl fmt::Display) -> io::Result<()> {
        self.emit(Event::Message {
            level: Level::Info,
            text: text.to_string(),
        })
    }

    pub(crate) fn error(&mut self, text: impl fmt::Display) -> io::Result<()> {
        self.emit(Event::Message {
            level: Level::Error,
            text: text.to_string(),
        })
    }

    pub(crate) fn result(&mut self, path: &str, value: &impl fmt::Debug) -> io::Result<()> {
        self.emit(Event::Result {
            path,
            output: format!("{value:?}"),
        })
    }

    pub(crate) fn report(&mut self, path: &str, report: &Report) -> io::Result<()> {
        self.emit(Event::Report { path, report })
    }

    fn emit(&mut self, event: Event<'_>) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => serde_json::to_writer(&mut self.out, &event)?,
            OutputKind::Human => write!(self.out, "{event}")?,
        }

        writeln!(self.out)
    }
}

#[derive(Serialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
enum Event<'a> {
    Message { level: Level, text: String },
    Result { path: &'a str, output: String },
    Report { path: &'a str, report: &'a Report },
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Message { level, text } => write!(f, "{level}: {text}"),
            Event::Result { path, output } => write!(f, "{path}: {output}"),
            Event::Report { path, report } => write!(f, "{path}: {report}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Level {
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => f.write_str("info"),
            Level::Error => f.write_str("error"),
        }
    }
}
