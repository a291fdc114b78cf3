//! Extrapolating the histories of an oasis report.

#[cfg(test)]
mod tests;

use lib::prelude::*;

/// Extrapolate a history one value backwards and one value forwards,
/// returning `(previous, next)`.
///
/// Returns `None` if the differences overflow.
pub fn extrapolate(history: &[i64]) -> Option<(i64, i64)> {
    let mut row = history.to_vec();
    let mut firsts = Vec::new();
    let mut next = 0i64;

    while row.iter().any(|&n| n != 0) {
        if let (Some(&first), Some(&last)) = (row.first(), row.last()) {
            firsts.push(first);
            next = next.checked_add(last)?;
        }

        row = row
            .windows(2)
            .map(|w| w[1].checked_sub(w[0]))
            .collect::<Option<_>>()?;
    }

    let previous = firsts
        .iter()
        .rev()
        .try_fold(0i64, |acc, first| first.checked_sub(acc))?;

    Some((previous, next))
}

pub fn solve(mut input: IStr) -> Result<(i64, i64)> {
    let mut o1 = 0i64;
    let mut o2 = 0i64;

    while let Some(history) = input.try_line::<Vec<i64>>()? {
        let (previous, next) = extrapolate(&history).context("history overflows")?;
        o1 = o1.checked_add(next).context("sum overflows")?;
        o2 = o2.checked_add(previous).context("sum overflows")?;
    }

    Ok((o1, o2))
}
