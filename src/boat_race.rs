//! Toy boat races, won by holding the button for long enough.

#[cfg(test)]
mod tests;

use lib::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    pub time: u64,
    pub distance: u64,
}

impl Race {
    /// Test if holding the button for `hold` milliseconds beats the record.
    fn wins(&self, hold: u64) -> bool {
        let travelled = u128::from(hold) * u128::from(self.time - hold);
        travelled > u128::from(self.distance)
    }

    /// Count the ways of beating the record.
    ///
    /// The distance travelled is symmetric around half the race time and
    /// grows towards it, so the shortest winning hold decides the count.
    pub fn ways(&self) -> u64 {
        let half = self.time / 2;

        if !self.wins(half) {
            return 0;
        }

        let (mut lo, mut hi) = (0, half);

        while lo < hi {
            let mid = lo + (hi - lo) / 2;

            if self.wins(mid) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }

        self.time + 1 - 2 * lo
    }
}

/// Parse a line like `Time:      7  15   30`.
fn columns(input: &mut IStr, title: &str) -> Result<Vec<&'static str>> {
    let (W(head), columns) = input.line::<(W<&'static str>, Vec<W<&'static str>>)>()?;
    ensure!(head == title, "expected `{title}`, but got `{head}`");
    Ok(columns.into_iter().map(|W(column)| column).collect())
}

/// Parse every column as its own number.
fn numbers(columns: &[&str]) -> Result<Vec<u64>> {
    columns
        .iter()
        .map(|c| c.parse().with_context(|| format!("bad number `{c}`")))
        .collect()
}

/// Read the columns as one number, ignoring the spaces between them.
fn joined(columns: &[&str]) -> Result<u64> {
    let mut n = 0u64;

    for d in columns.iter().flat_map(|c| c.bytes()) {
        ensure!(d.is_ascii_digit(), "bad digit `{}`", char::from(d));

        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(u64::from(d - b'0')))
            .context("number too large")?;
    }

    Ok(n)
}

pub fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let times = columns(&mut input, "Time:")?;
    let distances = columns(&mut input, "Distance:")?;

    ensure!(
        times.len() == distances.len(),
        "{} times but {} distances",
        times.len(),
        distances.len()
    );

    let races = numbers(&times)?
        .into_iter()
        .zip(numbers(&distances)?)
        .map(|(time, distance)| Race { time, distance });

    let o1 = races.fold(1u64, |product, race| product.saturating_mul(race.ways()));

    let race = Race {
        time: joined(&times)?,
        distance: joined(&distances)?,
    };

    Ok((o1, race.ways()))
}
