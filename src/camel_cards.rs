//! Ranking hands of Camel Cards.


use lib::prelude::*;

const CARDS: &[u8] = b"23456789TJQKA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

/// A hand of five cards and its bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    pub cards: [u8; 5],
    pub bid: u64,
}

impl Hand {
    /// The kind of the hand. With `jokers`, every `J` stands in for
    /// whichever card makes the hand strongest.
    pub fn kind(&self, jokers: bool) -> Kind {
        let mut counts = ArrayVec::<(u8, u8), 5>::new();
        let mut wild = 0;

        for &card in &self.cards {
            if jokers && card == b'J' {
                wild += 1;
                continue;
            }

            match counts.iter_mut().find(|(c, _)| *c == card) {
                Some((_, n)) => *n += 1,
                None => counts.push((card, 1)),
            }
        }

        let mut counts = counts
            .into_iter()
            .map(|(_, n)| n)
            .collect::<ArrayVec<u8, 5>>();

        counts.sort_unstable_by(|a, b| b.cmp(a));

        match counts.first_mut() {
            Some(n) => *n += wild,
            None => counts.push(wild),
        }

        match counts[..] {
            [5] => Kind::FiveOfAKind,
            [4, ..] => Kind::FourOfAKind,
            [3, 2] => Kind::FullHouse,
            [3, ..] => Kind::ThreeOfAKind,
            [2, 2, ..] => Kind::TwoPair,
            [2, ..] => Kind::OnePair,
            _ => Kind::HighCard,
        }
    }

    /// Key ordering hands from weakest to strongest.
    pub fn key(&self, jokers: bool) -> (Kind, [u8; 5]) {
        (self.kind(jokers), self.cards.map(|c| strength(c, jokers)))
    }
}

/// Strength of a single card. A joker is the weakest card of all.
fn strength(card: u8, jokers: bool) -> u8 {
    match card {
        b'J' if jokers => 0,
        _ => CARDS.iter().position(|c| *c == card).unwrap_or_default() as u8 + 1,
    }
}

lib::from_input! {
    Hand from (W<&'static [u8]>, u64) => |(W(cards), bid)| {
        let cards = <[u8; 5]>::try_from(cards)
            .map_err(|_| anyhow!("expected five cards, but got {}", cards.len()))?;

        if let Some(c) = cards.iter().find(|c| !CARDS.contains(c)) {
            bail!("unknown card `{}`", char::from(*c));
        }

        Ok(Hand { cards, bid })
    }
}

/// Total winnings, where every bid is multiplied by the rank of its hand.
pub fn winnings(hands: &mut [Hand], jokers: bool) -> u64 {
    hands.sort_by_cached_key(|hand| hand.key(jokers));

    hands
        .iter()
        .zip(1u64..)
        .fold(0, |sum, (hand, rank)| {
            sum.saturating_add(rank.saturating_mul(hand.bid))
        })
}

pub fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let mut hands = Vec::new();

    while let Some(mut line) = input.try_line::<IStr>()? {
        if !line.is_empty() {
            hands.push(line.next::<Hand>()?);
        }
    }

    Ok((winnings(&mut hands, false), winnings(&mut hands, true)))
}
