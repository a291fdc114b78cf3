//! Following a loop of pipes and measuring what it encloses.


use lib::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    N,
    E,
    S,
    W,
}

impl Dir {
    const ALL: [Dir; 4] = [Dir::N, Dir::E, Dir::S, Dir::W];

    fn opposite(self) -> Self {
        match self {
            Dir::N => Dir::S,
            Dir::E => Dir::W,
            Dir::S => Dir::N,
            Dir::W => Dir::E,
        }
    }
}

/// The directions a tile connects to.
fn exits(tile: u8) -> &'static [Dir] {
    match tile {
        b'|' => &[Dir::N, Dir::S],
        b'-' => &[Dir::E, Dir::W],
        b'L' => &[Dir::N, Dir::E],
        b'J' => &[Dir::N, Dir::W],
        b'7' => &[Dir::S, Dir::W],
        b'F' => &[Dir::S, Dir::E],
        _ => &[],
    }
}

/// The tile connecting the two given directions.
fn tile(a: Dir, b: Dir) -> u8 {
    [b'|', b'-', b'L', b'J', b'7', b'F']
        .into_iter()
        .find(|&t| exits(t).contains(&a) && exits(t).contains(&b))
        .unwrap_or(b'.')
}

#[derive(Debug)]
pub struct Maze {
    rows: Vec<&'static [u8]>,
    start: (usize, usize),
}

impl Maze {
    pub fn parse(mut input: IStr) -> Result<Self> {
        let mut rows = Vec::new();
        let mut start = None;

        while let Some(row) = input.try_line::<&'static [u8]>()? {
            let row = row.trim_end();

            if let Some(x) = row.find_byte(b'S') {
                ensure!(start.is_none(), "more than one start");
                start = Some((x, rows.len()));
            }

            rows.push(row);
        }

        Ok(Self {
            rows,
            start: start.context("missing start")?,
        })
    }

    fn get(&self, (x, y): (usize, usize)) -> Option<u8> {
        self.rows.get(y)?.get(x).copied()
    }

    fn step(&self, (x, y): (usize, usize), dir: Dir) -> Option<(usize, usize)> {
        let pos = match dir {
            Dir::N => (x, y.checked_sub(1)?),
            Dir::E => (x + 1, y),
            Dir::S => (x, y + 1),
            Dir::W => (x.checked_sub(1)?, y),
        };

        self.get(pos)?;
        Some(pos)
    }

    /// The directions the start connects to, judging by its neighbours.
    fn start_exits(&self) -> Result<(Dir, Dir)> {
        let mut found = ArrayVec::<Dir, 4>::new();

        for dir in Dir::ALL {
            let Some(pos) = self.step(self.start, dir) else {
                continue;
            };

            if self.get(pos).is_some_and(|t| exits(t).contains(&dir.opposite())) {
                found.push(dir);
            }
        }

        match found[..] {
            [a, b] => Ok((a, b)),
            _ => bail!("start connects to {} pipes", found.len()),
        }
    }

    /// Walk the loop from the start, returning the tiles on it with the
    /// start replaced by the pipe it stands on.
    pub fn walk(&self) -> Result<Vec<Vec<Option<u8>>>> {
        let (first, last) = self.start_exits()?;

        let mut on_loop = self
            .rows
            .iter()
            .map(|row| vec![None; row.len()])
            .collect::<Vec<_>>();

        let (x, y) = self.start;
        on_loop[y][x] = Some(tile(first, last));

        let mut pos = self.start;
        let mut dir = first;

        loop {
            pos = self.step(pos, dir).context("loop leaves the maze")?;

            if pos == self.start {
                break;
            }

            let t = self.get(pos).unwrap_or(b'.');

            dir = match exits(t) {
                &[a, b] if a == dir.opposite() => b,
                &[a, b] if b == dir.opposite() => a,
                _ => bail!("loop is broken at {}:{}", pos.1 + 1, pos.0 + 1),
            };

            let (x, y) = pos;
            ensure!(on_loop[y][x].is_none(), "loop crosses itself");
            on_loop[y][x] = Some(t);
        }

        Ok(on_loop)
    }
}

/// Count the tiles enclosed by the loop.
///
/// Scanning a row from the left, a tile is inside once an odd number of
/// pipes with a northern exit have been crossed.
pub fn enclosed(on_loop: &[Vec<Option<u8>>]) -> usize {
    let mut count = 0;

    for row in on_loop {
        let mut inside = false;

        for tile in row {
            match tile {
                Some(t) if exits(*t).contains(&Dir::N) => inside = !inside,
                Some(_) => {}
                None if inside => count += 1,
                None => {}
            }
        }
    }

    count
}

pub fn solve(input: IStr) -> Result<(usize, usize)> {
    let maze = Maze::parse(input)?;
    let on_loop = maze.walk()?;
    let length = on_loop.iter().flatten().filter(|t| t.is_some()).count();
    log::debug!("loop of {length} pipes");
    Ok((length / 2, enclosed(&on_loop)))
}
