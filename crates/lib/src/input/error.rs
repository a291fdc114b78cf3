use core::ops::Range;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("`{0}` is not an integer or is out of range")]
    NotInteger(&'static str),
    #[error("not utf-8")]
    NotUtf8,
    #[error("expected a line")]
    ExpectedLine,
    #[error("expected {0} values")]
    ExpectedTuple(usize),
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("{0}")]
    Boxed(anyhow::Error),
}

/// Error raised while parsing input, along with the byte range it refers to.
#[derive(Debug, Error)]
#[error("{kind} (at {span:?})")]
pub struct IStrError {
    span: Range<usize>,
    kind: ErrorKind,
}

impl IStrError {
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Byte range of the input the error refers to.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}
