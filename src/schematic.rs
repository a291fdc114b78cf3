//! Engine schematic scanning.
//!
//! A schematic is a block of text where runs of digits are part numbers and
//! every character which is neither a digit nor `.` is a symbol. A number
//! is adjacent to a symbol if it touches any of the eight cells around it.

#[cfg(test)]
mod tests;

use core::iter;
use core::mem;
use core::ops::Range;

use lib::prelude::*;

/// A maximal run of digits within a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericToken {
    /// Value of the number, saturating at `u64::MAX`.
    pub value: u64,
    pub row: usize,
    /// First column of the number, inclusive.
    pub start: usize,
    /// Last column of the number, inclusive.
    pub end: usize,
}

impl NumericToken {
    /// Test if the token touches the given column or either column next to
    /// it.
    #[inline]
    fn touches(&self, column: usize) -> bool {
        self.start.max(column.saturating_sub(1)) <= self.end.min(column.saturating_add(1))
    }
}

/// A single character which is neither a digit nor a `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolCell {
    pub row: usize,
    pub column: usize,
    pub symbol: char,
}

/// A parsed schematic.
#[derive(Debug, Default)]
pub struct Schematic {
    /// All tokens, ordered by row and then by column.
    tokens: Vec<NumericToken>,
    /// All symbols, ordered by row and then by column.
    symbols: Vec<SymbolCell>,
    /// The range of `tokens` belonging to each row.
    rows: Vec<Range<usize>>,
}

impl Schematic {
    /// Parse a schematic.
    ///
    /// Rows end at `\n`, `\r\n` or a lone `\r`. Each row is trimmed before
    /// it's indexed and columns count characters, so rows don't need to have
    /// the same length. This never fails since anything that is not a digit
    /// or a `.` is a symbol.
    pub fn parse(text: &str) -> Self {
        let mut schematic = Self::default();

        for (row, line) in rows(text).enumerate() {
            let first = schematic.tokens.len();
            let mut current = None::<NumericToken>;

            for (column, c) in line.trim().chars().enumerate() {
                if let Some(d) = c.to_digit(10) {
                    let token = current.get_or_insert(NumericToken {
                        value: 0,
                        row,
                        start: column,
                        end: column,
                    });

                    token.value = token.value.saturating_mul(10).saturating_add(u64::from(d));
                    token.end = column;
                    continue;
                }

                schematic.tokens.extend(current.take());

                if c != '.' {
                    schematic.symbols.push(SymbolCell {
                        row,
                        column,
                        symbol: c,
                    });
                }
            }

            schematic.tokens.extend(current);
            schematic.rows.push(first..schematic.tokens.len());
        }

        log::debug!(
            "schematic: {} rows, {} tokens, {} symbols",
            schematic.rows.len(),
            schematic.tokens.len(),
            schematic.symbols.len()
        );

        schematic
    }

    /// All numeric tokens, ordered by row and column.
    pub fn tokens(&self) -> &[NumericToken] {
        &self.tokens
    }

    /// All symbols, ordered by row and column.
    pub fn symbols(&self) -> &[SymbolCell] {
        &self.symbols
    }

    /// Get the tokens of the given row.
    fn row(&self, row: usize) -> &[NumericToken] {
        match self.rows.get(row) {
            Some(range) => &self.tokens[range.clone()],
            None => &[],
        }
    }

    /// Iterate over the values of numbers adjacent to `symbol`.
    ///
    /// Rows are visited from above to below, and numbers within a row from
    /// left to right. Every number is yielded at most once.
    pub fn adjacent<'a>(&'a self, symbol: &SymbolCell) -> impl Iterator<Item = u64> + 'a {
        let SymbolCell { row, column, .. } = *symbol;

        [row.checked_sub(1), Some(row), row.checked_add(1)]
            .into_iter()
            .flatten()
            .flat_map(move |row| self.row(row))
            .filter(move |token| token.touches(column))
            .map(|token| token.value)
    }

    /// Compute the adjacent numbers of every symbol.
    pub fn adjacency(&self) -> Vec<(SymbolCell, Vec<u64>)> {
        self.symbols
            .iter()
            .map(|symbol| (*symbol, self.adjacent(symbol).collect()))
            .collect()
    }
}

/// Split text into rows at `\n`, `\r\n` or a lone `\r`. A break at the
/// very end does not start another row.
fn rows(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;

    iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let Some(at) = rest.find(|c: char| c == '\r' || c == '\n') else {
            return Some(mem::take(&mut rest));
        };

        let row = &rest[..at];
        let tail = &rest[at..];
        rest = tail.strip_prefix("\r\n").unwrap_or(&tail[1..]);
        Some(row)
    })
}

/// Scan a schematic, returning the sum of all numbers adjacent to a symbol,
/// counted once per symbol, and the sum of the products of numbers adjacent
/// to symbols which touch exactly two numbers.
///
/// # Examples
///
/// ```
/// let text = "467..114..\n...*......\n..35..633.";
/// assert_eq!(aoc2023::schematic::scan(text), (467 + 35, 467 * 35));
/// ```
pub fn scan(text: &str) -> (u64, u64) {
    let schematic = Schematic::parse(text);

    let mut parts = 0u64;
    let mut gears = 0u64;

    for (_, values) in schematic.adjacency() {
        for &value in &values {
            parts = parts.saturating_add(value);
        }

        if let [a, b] = values[..] {
            gears = gears.saturating_add(a.saturating_mul(b));
        }
    }

    (parts, gears)
}

/// Scan the whole input as one schematic.
pub fn solve(mut input: IStr) -> Result<(u64, u64)> {
    Ok(scan(input.next::<&str>()?))
}
