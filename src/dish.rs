//! Tilting a platform of rounded rocks and weighing the load on its north
//! support beams.


use core::mem;
use std::collections::HashMap;

use lib::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tilt {
    North,
    West,
    South,
    East,
}

/// Tiles of the platform stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    tiles: Vec<u8>,
    width: usize,
    height: usize,
    /// Scratch space holding one line of tile indexes.
    line: Vec<usize>,
}

impl Platform {
    pub fn parse(mut input: IStr) -> Result<Self> {
        let mut tiles = Vec::new();
        let mut width = None;
        let mut height = 0;

        while let Some(row) = input.try_line::<&'static [u8]>()? {
            let row = row.trim_end();

            if row.is_empty() {
                continue;
            }

            ensure!(
                *width.get_or_insert(row.len()) == row.len(),
                "row {} differs in width",
                height + 1
            );

            if let Some(b) = row.iter().find(|b| !b".#O".contains(b)) {
                bail!("unexpected `{}` on row {}", char::from(*b), height + 1);
            }

            tiles.extend_from_slice(row);
            height += 1;
        }

        Ok(Self {
            tiles,
            width: width.unwrap_or_default(),
            height,
            line: Vec::new(),
        })
    }

    /// Roll rounded rocks in the given direction.
    pub fn tilt(&mut self, tilt: Tilt) {
        let (w, h) = (self.width, self.height);

        let lines = match tilt {
            Tilt::North | Tilt::South => w,
            Tilt::West | Tilt::East => h,
        };

        let mut line = mem::take(&mut self.line);

        for n in 0..lines {
            line.clear();

            match tilt {
                Tilt::North => line.extend((0..h).map(|y| y * w + n)),
                Tilt::South => line.extend((0..h).rev().map(|y| y * w + n)),
                Tilt::West => line.extend((0..w).map(|x| n * w + x)),
                Tilt::East => line.extend((0..w).rev().map(|x| n * w + x)),
            }

            self.roll(&line);
        }

        self.line = line;
    }

    /// Roll rocks towards the start of `line`.
    fn roll(&mut self, line: &[usize]) {
        let mut free = 0;

        for (i, &at) in line.iter().enumerate() {
            match self.tiles[at] {
                b'#' => free = i + 1,
                b'O' => {
                    self.tiles.swap(at, line[free]);
                    free += 1;
                }
                _ => {}
            }
        }
    }

    /// Tilt north, west, south and then east.
    pub fn spin(&mut self) {
        for tilt in [Tilt::North, Tilt::West, Tilt::South, Tilt::East] {
            self.tilt(tilt);
        }
    }

    /// The load on the north support beams.
    pub fn load(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == b'O')
            .map(|(i, _)| self.height - i / self.width)
            .sum()
    }

    /// The load after `count` spins. The platform settles into a cycle,
    /// which is detected to skip ahead.
    pub fn load_after(&mut self, count: usize) -> usize {
        let mut seen = HashMap::new();
        let mut loads = vec![self.load()];
        seen.insert(self.tiles.clone(), 0);

        for n in 1..=count {
            self.spin();

            if let Some(&first) = seen.get(&self.tiles) {
                let period = n - first;
                log::debug!("cycle of {period} spins after {first} spins");
                return loads[first + (count - first) % period];
            }

            seen.insert(self.tiles.clone(), n);
            loads.push(self.load());
        }

        self.load()
    }

    pub fn row(&self, y: usize) -> &[u8] {
        &self.tiles[y * self.width..(y + 1) * self.width]
    }
}

pub fn solve(input: IStr) -> Result<(usize, usize)> {
    let platform = Platform::parse(input)?;

    let mut tilted = platform.clone();
    tilted.tilt(Tilt::North);

    let mut spun = platform;
    Ok((tilted.load(), spun.load_after(1_000_000_000)))
}
