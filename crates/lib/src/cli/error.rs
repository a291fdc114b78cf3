use core::fmt;
use core::ops::Range;

use crate::input::{IStr, IStrError, NL};

/// Associate an error with the position in the input it refers to.
pub fn error_context<E>(path: &str, data: IStr, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);
    let pos = pos_from(data.as_data(), find_range(&error));

    error.context(ErrorContext {
        path: path.to_owned(),
        pos,
    })
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    start: usize,
    end: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0, 0);

    pub(crate) const fn new(line: usize, start: usize, end: usize) -> Self {
        Self { line, start, end }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;

        if self.end > self.start {
            write!(f, "{line}:{}-{}", self.start, self.end)
        } else {
            write!(f, "{line}:{}", self.start)
        }
    }
}

/// Need to be able to unwrap an error fully in case it's threaded through
/// multiple layers of processing.
fn find_range(error: &anyhow::Error) -> Range<usize> {
    for cause in error.chain() {
        if let Some(e) = cause.downcast_ref::<IStrError>() {
            return e.span();
        }
    }

    0..0
}

/// Get the line and column of the given span in the input.
pub(crate) fn pos_from(data: &[u8], span: Range<usize>) -> LineCol {
    let Some(d) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let (line, start) = match memchr::memrchr(NL, d) {
        Some(n) => (memchr::memchr_iter(NL, d).count(), d.len() - n - 1),
        None => (0, d.len()),
    };

    let end = match data.get(span) {
        Some(rest) => start + memchr::memchr(NL, rest).unwrap_or(rest.len()),
        None => start,
    };

    LineCol::new(line, start, end)
}

#[derive(Debug)]
struct ErrorContext {
    path: String,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}
