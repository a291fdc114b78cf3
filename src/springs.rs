//! Counting arrangements of damaged springs.

#[cfg(test)]
mod tests;

use lib::prelude::*;

/// A row of springs, which are operational (`.`), damaged (`#`) or unknown
/// (`?`), and the sizes of the groups of damaged springs in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub springs: Vec<u8>,
    pub groups: Vec<usize>,
}

lib::from_input! {
    Record from (W<&'static [u8]>, W<Split<',', Vec<usize>>>) => |(W(springs), W(Split(groups)))| {
        if let Some(b) = springs.iter().find(|b| !b"?.#".contains(b)) {
            bail!("unexpected `{}`", char::from(*b));
        }

        ensure!(!groups.contains(&0), "empty group");

        Ok(Record { springs: springs.to_vec(), groups })
    }
}

impl Record {
    /// Unfold the record into `n` copies of itself, with the springs joined
    /// by unknown springs.
    pub fn unfold(&self, n: usize) -> Self {
        let mut springs = Vec::with_capacity((self.springs.len() + 1) * n);

        for i in 0..n {
            if i > 0 {
                springs.push(b'?');
            }

            springs.extend_from_slice(&self.springs);
        }

        Self {
            springs,
            groups: self.groups.repeat(n),
        }
    }

    /// Count the arrangements of springs matching the groups.
    pub fn arrangements(&self) -> u64 {
        let springs = &self.springs[..];
        let groups = &self.groups[..];
        let (n, m) = (springs.len(), groups.len());

        // ways[i][g] counts the arrangements of `springs[i..]` holding
        // `groups[g..]`. Row `n + 1` is reached when a group ends the row.
        let mut ways = vec![vec![0u64; m + 1]; n + 2];
        ways[n][m] = 1;
        ways[n + 1][m] = 1;

        for i in (0..n).rev() {
            for g in 0..=m {
                let mut w = 0u64;

                if springs[i] != b'#' {
                    w = w.saturating_add(ways[i + 1][g]);
                }

                if let Some(&len) = groups.get(g).filter(|_| springs[i] != b'.') {
                    let end = i + len;

                    if end <= n
                        && !springs[i..end].contains(&b'.')
                        && springs.get(end) != Some(&b'#')
                    {
                        w = w.saturating_add(ways[end + 1][g + 1]);
                    }
                }

                ways[i][g] = w;
            }
        }

        ways[0][0]
    }
}

pub fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let mut o1 = 0u64;
    let mut o2 = 0u64;

    while let Some(mut line) = input.try_line::<IStr>()? {
        if line.is_empty() {
            continue;
        }

        let record = line.next::<Record>()?;
        o1 = o1.saturating_add(record.arrangements());
        o2 = o2.saturating_add(record.unfold(5).arrangements());
    }

    Ok((o1, o2))
}
