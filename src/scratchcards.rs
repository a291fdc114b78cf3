//! Scratchcards which win points, and later copies of other cards.


use lib::prelude::*;

/// A scratchcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub winning: Vec<u32>,
    pub numbers: Vec<u32>,
}

impl Card {
    /// How many of the numbers on the card are winning numbers.
    pub fn matches(&self) -> usize {
        self.numbers
            .iter()
            .filter(|n| self.winning.contains(n))
            .count()
    }

    /// One point for the first match, doubled for every match after it.
    pub fn points(&self) -> u64 {
        match self.matches() {
            0 => 0,
            n => {
                let shift = u32::try_from(n - 1).unwrap_or(u32::MAX);
                1u64.checked_shl(shift).unwrap_or(u64::MAX)
            }
        }
    }
}

lib::from_input! {
    Card from Split<':', ((W, u32), Split<'|', (Vec<u32>, Vec<u32>)>)> => |Split(((W(_), id), Split((winning, numbers))))| {
        Ok(Card { id, winning, numbers })
    }
}

/// Count the cards held in the end, when a card with `n` matches wins a copy
/// of each of the `n` cards following it.
///
/// Copies of cards past the end of the table are never won.
pub fn copies(matches: &[usize]) -> u64 {
    let mut counts = vec![1u64; matches.len()];

    for (i, &n) in matches.iter().enumerate() {
        let count = counts[i];

        for c in counts.iter_mut().skip(i + 1).take(n) {
            *c = c.saturating_add(count);
        }
    }

    counts.iter().fold(0, |sum, c| sum.saturating_add(*c))
}

pub fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let mut points = 0u64;
    let mut matches = Vec::new();

    while let Some(mut line) = input.try_line::<IStr>()? {
        if line.is_empty() {
            continue;
        }

        let card = line.next::<Card>()?;
        points = points.saturating_add(card.points());
        matches.push(card.matches());
    }

    log::debug!("scratched {} cards", matches.len());
    Ok((points, copies(&matches)))
}
