//! Games of drawing coloured cubes out of a bag.

#[cfg(test)]
mod tests;

use std::num::ParseIntError;

use lib::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("missing `:` after game id")]
    MissingSeparator,
    #[error("expected `Game <id>`, but got `{0}`")]
    MissingPrefix(Box<str>),
    #[error("bad game id `{0}`: {1}")]
    BadId(Box<str>, ParseIntError),
    #[error("expected `<count> <colour>`, but got `{0}`")]
    BadPull(Box<str>),
    #[error("bad count `{0}`: {1}")]
    BadCount(Box<str>, ParseIntError),
    #[error("unknown colour `{0}`")]
    UnknownColour(Box<str>),
}

/// The number of cubes of each colour in a bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bag {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Bag {
    /// The bag the elf plays with.
    pub const DEFAULT: Self = Self {
        red: 12,
        green: 13,
        blue: 14,
    };
}

/// A game, recording the largest number of cubes seen of each colour.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Game {
    /// Parse a line like `Game 1: 3 blue, 4 red; 1 red, 2 green`.
    pub fn parse(line: &str) -> Result<Self, GameError> {
        let (head, draws) = line
            .trim()
            .split_once(':')
            .ok_or(GameError::MissingSeparator)?;

        let id = head
            .strip_prefix("Game ")
            .ok_or_else(|| GameError::MissingPrefix(head.into()))?
            .trim();

        let id = id
            .parse()
            .map_err(|error| GameError::BadId(id.into(), error))?;

        let mut game = Game {
            id,
            ..Game::default()
        };

        for pull in draws.split(';').flat_map(|draw| draw.split(',')) {
            let pull = pull.trim();

            if pull.is_empty() {
                continue;
            }

            let (count, colour) = pull
                .split_once(' ')
                .ok_or_else(|| GameError::BadPull(pull.into()))?;

            let count = count
                .parse::<u32>()
                .map_err(|error| GameError::BadCount(count.into(), error))?;

            let max = match colour.trim() {
                "red" => &mut game.red,
                "green" => &mut game.green,
                "blue" => &mut game.blue,
                other => return Err(GameError::UnknownColour(other.into())),
            };

            *max = (*max).max(count);
        }

        Ok(game)
    }

    /// Test if the game could have been played with the given bag.
    pub fn is_possible(&self, bag: &Bag) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    /// The power of the smallest set of cubes the game could be played with.
    ///
    /// Three `u32` counts always multiply into a `u128`, and the product is
    /// saturated into a `u64`.
    pub fn power(&self) -> u64 {
        let power = u128::from(self.red) * u128::from(self.green) * u128::from(self.blue);
        u64::try_from(power).unwrap_or(u64::MAX)
    }
}

lib::from_input! {
    Game from &'static str => |line| {
        Ok(Game::parse(line)?)
    }
}

/// Sum the ids of the games possible with [Bag::DEFAULT], and the powers of
/// all games.
pub fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let mut o1 = 0u64;
    let mut o2 = 0u64;
    let mut games = 0;

    while let Some(game) = input.try_line::<Game>()? {
        if game.is_possible(&Bag::DEFAULT) {
            o1 = o1.saturating_add(u64::from(game.id));
        }

        o2 = o2.saturating_add(game.power());
        games += 1;
    }

    log::debug!("played {games} games");
    Ok((o1, o2))
}
