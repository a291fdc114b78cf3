//! Beams of light bouncing around a contraption of mirrors and splitters.


use lib::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    N = 0,
    E = 1,
    S = 2,
    W = 3,
}

impl Dir {
    /// Directions a beam heading this way leaves `tile` in.
    fn through(self, tile: u8) -> ArrayVec<Dir, 2> {
        let mut out = ArrayVec::new();

        match (tile, self) {
            (b'/', Dir::N) | (b'\\', Dir::S) => out.push(Dir::E),
            (b'/', Dir::E) | (b'\\', Dir::W) => out.push(Dir::N),
            (b'/', Dir::S) | (b'\\', Dir::N) => out.push(Dir::W),
            (b'/', Dir::W) | (b'\\', Dir::E) => out.push(Dir::S),
            (b'|', Dir::E | Dir::W) => out.extend([Dir::N, Dir::S]),
            (b'-', Dir::N | Dir::S) => out.extend([Dir::E, Dir::W]),
            _ => out.push(self),
        }

        out
    }
}

#[derive(Debug)]
pub struct Contraption {
    tiles: Vec<u8>,
    width: usize,
    height: usize,
}

impl Contraption {
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

            if let Some(b) = row.iter().find(|b| !b"./\\|-".contains(b)) {
                bail!("unexpected `{}` on row {}", char::from(*b), height + 1);
            }

            tiles.extend_from_slice(row);
            height += 1;
        }

        Ok(Self {
            tiles,
            width: width.unwrap_or_default(),
            height,
        })
    }

    fn step(&self, (x, y): (usize, usize), dir: Dir) -> Option<(usize, usize)> {
        let pos = match dir {
            Dir::N => (x, y.checked_sub(1)?),
            Dir::E => (x + 1, y),
            Dir::S => (x, y + 1),
            Dir::W => (x.checked_sub(1)?, y),
        };

        (pos.0 < self.width && pos.1 < self.height).then_some(pos)
    }

    /// Count the tiles energized by a beam entering at `pos` heading `dir`.
    pub fn energized(&self, pos: (usize, usize), dir: Dir) -> usize {
        // One bit for every direction a beam has passed a tile in.
        let mut seen = vec![0u8; self.tiles.len()];
        let mut queue = vec![(pos, dir)];

        while let Some(((x, y), dir)) = queue.pop() {
            let Some(bits) = seen.get_mut(y * self.width + x) else {
                continue;
            };

            if *bits & (1 << dir as u8) != 0 {
                continue;
            }

            *bits |= 1 << dir as u8;

            for out in dir.through(self.tiles[y * self.width + x]) {
                if let Some(next) = self.step((x, y), out) {
                    queue.push((next, out));
                }
            }
        }

        seen.iter().filter(|bits| **bits != 0).count()
    }

    /// The most tiles energized by a beam entering from any edge.
    pub fn most_energized(&self) -> usize {
        let (w, h) = (self.width, self.height);

        let columns = (0..w).flat_map(|x| [((x, 0), Dir::S), ((x, h.saturating_sub(1)), Dir::N)]);
        let rows = (0..h).flat_map(|y| [((0, y), Dir::E), ((w.saturating_sub(1), y), Dir::W)]);

        columns
            .chain(rows)
            .map(|(pos, dir)| self.energized(pos, dir))
            .max()
            .unwrap_or_default()
    }
}

pub fn solve(input: IStr) -> Result<(usize, usize)> {
    let contraption = Contraption::parse(input)?;
    Ok((contraption.energized((0, 0), Dir::E), contraption.most_energized()))
}
