//! The HASH algorithm, and the boxes of lenses it arranges.

#[cfg(test)]
mod tests;

use lib::prelude::*;

/// Hash a string of bytes into a box number.
pub fn hash(bytes: &[u8]) -> u8 {
    bytes
        .iter()
        .fold(0u8, |h, &b| h.wrapping_add(b).wrapping_mul(17))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Take the lens with the label out of its box.
    Remove,
    /// Put a lens of the given focal length into the box.
    Insert(u8),
}

/// Parse a step like `rn=1` or `cm-`.
pub fn step(step: &[u8]) -> Result<(&[u8], Op)> {
    if let Some(label) = step.strip_suffix(b"-") {
        return Ok((label, Op::Remove));
    }

    match step.split_once_str("=") {
        Some((label, &[d @ b'1'..=b'9'])) => Ok((label, Op::Insert(d - b'0'))),
        _ => bail!("bad step `{}`", step.as_bstr()),
    }
}

/// Boxes of labelled lenses, in the order they were put in.
pub struct Boxes<'a> {
    boxes: Vec<Vec<(&'a [u8], u8)>>,
}

impl<'a> Boxes<'a> {
    pub fn new() -> Self {
        Self {
            boxes: vec![Vec::new(); 256],
        }
    }

    pub fn apply(&mut self, label: &'a [u8], op: Op) {
        let lenses = &mut self.boxes[usize::from(hash(label))];
        let at = lenses.iter().position(|(l, _)| *l == label);

        match (op, at) {
            (Op::Remove, Some(at)) => {
                lenses.remove(at);
            }
            (Op::Remove, None) => {}
            (Op::Insert(focal), Some(at)) => {
                lenses[at].1 = focal;
            }
            (Op::Insert(focal), None) => {
                lenses.push((label, focal));
            }
        }
    }

    /// Sum the focusing power of every lens.
    pub fn focusing_power(&self) -> usize {
        self.boxes
            .iter()
            .enumerate()
            .flat_map(|(b, lenses)| {
                lenses
                    .iter()
                    .enumerate()
                    .map(move |(slot, (_, focal))| (b + 1) * (slot + 1) * usize::from(*focal))
            })
            .sum()
    }
}

impl Default for Boxes<'_> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn solve(mut input: IStr) -> Result<(u64, usize)> {
    let Split(steps) = input.next::<Split<',', Vec<&'static [u8]>>>()?;

    let mut o1 = 0u64;
    let mut boxes = Boxes::new();

    for s in steps {
        let s = s.trim();

        if s.is_empty() {
            continue;
        }

        o1 += u64::from(hash(s));
        let (label, op) = step(s)?;
        boxes.apply(label, op);
    }

    Ok((o1, boxes.focusing_power()))
}
