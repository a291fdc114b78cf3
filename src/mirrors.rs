//! Finding lines of reflection in patterns of ash and rocks.

#[cfg(test)]
mod tests;

use core::mem;

use lib::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    rows: Vec<Vec<u8>>,
    columns: Vec<Vec<u8>>,
}

impl Pattern {
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);

        ensure!(
            rows.iter().all(|row| row.len() == width),
            "rows of the pattern differ in width"
        );

        let columns = (0..width)
            .map(|x| rows.iter().map(|row| row[x]).collect())
            .collect();

        Ok(Self { rows, columns })
    }

    /// Summarize the pattern, where exactly `smudges` tiles differ across
    /// the line of reflection.
    ///
    /// A horizontal line counts the rows above it times a hundred, and a
    /// vertical line counts the columns left of it.
    pub fn summarize(&self, smudges: usize) -> Option<usize> {
        if let Some(n) = reflection(&self.rows, smudges) {
            return Some(n * 100);
        }

        reflection(&self.columns, smudges)
    }
}

/// Find the line between `lines` which reflects them with exactly `smudges`
/// differences, returning the number of lines before it.
fn reflection(lines: &[Vec<u8>], smudges: usize) -> Option<usize> {
    (1..lines.len()).find(|&at| {
        let (before, after) = lines.split_at(at);

        let differences = before
            .iter()
            .rev()
            .zip(after)
            .flat_map(|(a, b)| a.iter().zip(b))
            .filter(|(a, b)| a != b)
            .count();

        differences == smudges
    })
}

/// Parse patterns separated by blank lines.
pub fn patterns(mut input: IStr) -> Result<Vec<Pattern>> {
    let mut patterns = Vec::new();
    let mut rows = Vec::new();

    loop {
        let line = input.try_line::<&'static [u8]>()?.map(|line| line.trim_end());

        match line {
            Some(line) if !line.is_empty() => {
                rows.push(line.to_vec());
            }
            _ => {
                if !rows.is_empty() {
                    patterns.push(Pattern::new(mem::take(&mut rows))?);
                }

                if line.is_none() {
                    break;
                }
            }
        }
    }

    Ok(patterns)
}

pub fn solve(input: IStr) -> Result<(usize, usize)> {
    let mut o1 = 0;
    let mut o2 = 0;

    for (i, pattern) in patterns(input)?.iter().enumerate() {
        let summary = |smudges| {
            pattern
                .summarize(smudges)
                .with_context(|| format!("pattern {} has no reflection", i + 1))
        };

        o1 += summary(0)?;
        o2 += summary(1)?;
    }

    Ok((o1, o2))
}
