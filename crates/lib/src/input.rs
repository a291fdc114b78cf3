//! Parsing of puzzle input.
//!
//! Input is loaded once into static storage and walked with [IStr], a
//! copyable cursor which remembers its absolute offset into the loaded file.
//! That offset is what lets a parse error be reported as a line and column.

mod error;


use core::ops::Range;
use core::str::{from_utf8, FromStr};
use std::path::Path;

use anyhow::Context;

pub use self::error::{ErrorKind, IStrError};

type Result<T, E = IStrError> = core::result::Result<T, E>;

pub(crate) const NL: u8 = b'\n';

/// Read the input at the given path.
///
/// The file is leaked so that everything parsed out of it can borrow it for
/// `'static`. Inputs are loaded once per process.
pub fn read<P>(path: P) -> anyhow::Result<IStr>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let data = std::fs::read(path).with_context(|| path.display().to_string())?;
    Ok(IStr::new(data.leak()))
}

/// Cursor over puzzle input.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    data: &'static [u8],
    /// Offset of `data` in the input it was cut from.
    index: usize,
}

impl IStr {
    /// Construct a cursor at the start of `data`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut input = IStr::new(b"12 34\n56");
    /// assert_eq!(input.line::<(u32, u32)>()?, (12, 34));
    /// assert_eq!(input.line::<u32>()?, 56);
    /// assert!(input.try_line::<u32>()?.is_none());
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[inline]
    pub fn new(data: &'static [u8]) -> Self {
        Self { data, index: 0 }
    }

    /// Offset of the cursor.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// The bytes left to parse.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Parse the next value.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Parse the next value, or `None` if the input has run out.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line, erroring if there is none.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let index = self.index;

        match self.try_line()? {
            Some(value) => Ok(value),
            None => Err(IStrError::new(index..self.index, ErrorKind::ExpectedLine)),
        }
    }

    /// Parse the next line, or `None` once every line has been consumed.
    ///
    /// The value has to be parsed from the line alone, and whatever the
    /// value leaves of the line is dropped.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        match self.split_once(NL) {
            Some(mut line) => line.try_next(),
            None => Ok(None),
        }
    }

    /// Cut the input at the next `b`, returning what comes before it and
    /// skipping the byte itself. Without a `b`, the rest of the input is
    /// returned. Returns `None` once the input is empty.
    pub fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        match memchr::memchr(b, self.data) {
            Some(at) => {
                let head = self.take(at);
                self.take(1);
                Some(head)
            }
            None => Some(self.take(self.data.len())),
        }
    }

    /// Range of the remaining input.
    #[inline]
    pub(crate) fn span(&self) -> Range<usize> {
        self.index..self.index + self.data.len()
    }

    fn as_str(&self) -> Result<&'static str> {
        from_utf8(self.data).map_err(|_| IStrError::new(self.span(), ErrorKind::NotUtf8))
    }

    /// Skip leading whitespace and cut out the word which follows it.
    fn word(&mut self) -> Option<IStr> {
        let start = self.data.iter().position(|b| !b.is_ascii_whitespace())?;
        self.take(start);

        let len = self
            .data
            .iter()
            .position(u8::is_ascii_whitespace)
            .unwrap_or(self.data.len());

        Some(self.take(len))
    }

    /// Split off and return the first `n` bytes.
    fn take(&mut self, n: usize) -> IStr {
        let (head, tail) = self.data.split_at(n.min(self.data.len()));

        let head = IStr {
            data: head,
            index: self.index,
        };

        self.data = tail;
        self.index += head.data.len();
        head
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Try to parse a value, returning `None` if the input holds nothing
    /// more to parse.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// What to report when [FromInput::from_input] finds nothing.
    #[inline]
    fn missing() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        match Self::try_from_input(p)? {
            Some(value) => Ok(value),
            None => Err(IStrError::new(index..p.index, Self::missing())),
        }
    }
}

/// A value that can be assembled from the parts of a [Split].
pub trait FromInputIter: Sized {
    fn from_parts<I>(parts: I) -> Result<Option<Self>>
    where
        I: Iterator<Item = IStr>;
}

fn number<T>(p: &mut IStr) -> Result<Option<T>>
where
    T: FromStr,
{
    let Some(word) = p.word() else {
        return Ok(None);
    };

    let text = word.as_str()?;

    match text.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(IStrError::new(word.span(), ErrorKind::NotInteger(text))),
    }
}

macro_rules! number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromInput for $ty {
                #[inline]
                fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                    number(p)
                }
            }
        )*
    };
}

number!(u32, u64, usize, i64);

fn part<T, I>(parts: &mut I) -> Result<Option<T>>
where
    T: FromInput,
    I: Iterator<Item = IStr>,
{
    match parts.next() {
        Some(mut part) => T::try_from_input(&mut part),
        None => Ok(None),
    }
}

macro_rules! tuple {
    ($len:literal => $($ty:ident),+) => {
        impl<$($ty,)+> FromInput for ($($ty,)+)
        where
            $($ty: FromInput,)+
        {
            #[inline]
            fn missing() -> ErrorKind {
                ErrorKind::ExpectedTuple($len)
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                Ok(Some(($(
                    match <$ty>::try_from_input(p)? {
                        Some(value) => value,
                        None => return Ok(None),
                    },
                )+)))
            }
        }

        impl<$($ty,)+> FromInputIter for ($($ty,)+)
        where
            $($ty: FromInput,)+
        {
            #[inline]
            fn from_parts<I>(mut parts: I) -> Result<Option<Self>>
            where
                I: Iterator<Item = IStr>,
            {
                Ok(Some(($(
                    match part::<$ty, _>(&mut parts)? {
                        Some(value) => value,
                        None => return Ok(None),
                    },
                )+)))
            }
        }
    };
}

tuple!(2 => A, B);
tuple!(3 => A, B, C);
tuple!(4 => A, B, C, D);

impl FromInput for IStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        Ok(Some(p.take(p.len())))
    }
}

impl FromInput for &'static [u8] {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        Ok(Some(p.take(p.len()).data))
    }
}

impl FromInput for &'static str {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        p.take(p.len()).as_str().map(Some)
    }
}

/// Parses values one after another until the input runs out.
impl<T> FromInput for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let mut output = Vec::new();

        while let Some(value) = T::try_from_input(p)? {
            output.push(value);
        }

        Ok(Some(output))
    }
}

/// Parses one value out of every part, skipping parts which hold nothing.
impl<T> FromInputIter for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn from_parts<I>(parts: I) -> Result<Option<Self>>
    where
        I: Iterator<Item = IStr>,
    {
        let mut output = Vec::new();

        for mut part in parts {
            output.extend(T::try_from_input(&mut part)?);
        }

        Ok(Some(output))
    }
}

/// Split the input on the character `D` and parse `T` from the parts.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// let mut input = IStr::new(b"3 blue,4 red");
/// let Split((a, b)) = input.next::<Split<',', (&str, &str)>>()?;
/// assert_eq!(a, "3 blue");
/// assert_eq!(b, "4 red");
///
/// let mut input = IStr::new(b"1,1,3");
/// let Split(groups) = input.next::<Split<',', Vec<u32>>>()?;
/// assert_eq!(groups, [1, 1, 3]);
/// # Ok::<_, anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<const D: char, T>(pub T);

impl<const D: char, T> FromInput for Split<D, T>
where
    T: FromInputIter,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let parts = Parts {
            input: p,
            byte: D as u8,
        };

        Ok(T::from_parts(parts)?.map(Self))
    }
}

struct Parts<'a> {
    input: &'a mut IStr,
    byte: u8,
}

impl Iterator for Parts<'_> {
    type Item = IStr;

    #[inline]
    fn next(&mut self) -> Option<IStr> {
        self.input.split_once(self.byte)
    }
}

/// Consumes nothing and always succeeds.
#[derive(Debug, Clone, Copy)]
pub struct Skip;

impl FromInput for Skip {
    #[inline]
    fn try_from_input(_: &mut IStr) -> Result<Option<Self>> {
        Ok(Some(Self))
    }
}

/// A whitespace-delimited word, parsed as `T`.
///
/// `W` on its own skips a word.
pub struct W<T = Skip>(pub T);

impl<T> FromInput for W<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some(mut word) = p.word() else {
            return Ok(None);
        };

        Ok(T::try_from_input(&mut word)?.map(W))
    }
}
