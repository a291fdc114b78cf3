//! Distances between galaxies in an expanding universe.

#[cfg(test)]
mod tests;

use lib::prelude::*;

#[derive(Debug)]
pub struct Universe {
    /// Galaxies as `(column, row)`.
    galaxies: Vec<(usize, usize)>,
    /// The number of empty columns to the left of every column.
    empty_columns: Vec<usize>,
    /// The number of empty rows above every row.
    empty_rows: Vec<usize>,
}

/// Count how many indexes below each index are not occupied.
fn empty_before(occupied: &[bool]) -> Vec<usize> {
    occupied
        .iter()
        .scan(0, |empty, &occupied| {
            let before = *empty;
            *empty += usize::from(!occupied);
            Some(before)
        })
        .collect()
}

/// Sum the distances between all pairs of the given coordinates.
fn pairwise(coords: &mut [u64]) -> u128 {
    coords.sort_unstable();

    let mut sum = 0u128;
    let mut before = 0u128;

    for (i, &c) in coords.iter().enumerate() {
        let c = u128::from(c);
        sum += c * i as u128 - before;
        before += c;
    }

    sum
}

impl Universe {
    pub fn parse(mut input: IStr) -> Result<Self> {
        let mut galaxies = Vec::new();
        let mut columns = Vec::new();
        let mut rows = Vec::new();

        while let Some(row) = input.try_line::<&'static [u8]>()? {
            let y = rows.len();
            let mut occupied = false;

            for (x, &b) in row.trim_end().iter().enumerate() {
                match b {
                    b'#' => {
                        galaxies.push((x, y));
                        occupied = true;
                    }
                    b'.' => {}
                    b => bail!("unexpected `{}` at {}:{}", char::from(b), y + 1, x + 1),
                }

                if columns.len() <= x {
                    columns.resize(x + 1, false);
                }

                columns[x] |= b == b'#';
            }

            rows.push(occupied);
        }

        Ok(Self {
            galaxies,
            empty_columns: empty_before(&columns),
            empty_rows: empty_before(&rows),
        })
    }

    /// Sum the distances between every pair of galaxies, when every empty
    /// row and column is `factor` times as wide.
    pub fn distances(&self, factor: u64) -> u64 {
        let grow = factor.saturating_sub(1);

        let expand =
            |n: usize, empty: &[usize]| (n as u64).saturating_add(grow.saturating_mul(empty[n] as u64));

        let mut xs = self
            .galaxies
            .iter()
            .map(|&(x, _)| expand(x, &self.empty_columns))
            .collect::<Vec<_>>();

        let mut ys = self
            .galaxies
            .iter()
            .map(|&(_, y)| expand(y, &self.empty_rows))
            .collect::<Vec<_>>();

        let sum = pairwise(&mut xs) + pairwise(&mut ys);
        u64::try_from(sum).unwrap_or(u64::MAX)
    }
}

pub fn solve(input: IStr) -> Result<(u64, u64)> {
    let universe = Universe::parse(input)?;
    log::debug!("{} galaxies", universe.galaxies.len());
    Ok((universe.distances(2), universe.distances(1_000_000)))
}
