//! Following seeds through the maps of an almanac.

#[cfg(test)]
mod tests;

use core::ops::Range;

use lib::prelude::*;

/// Maps a range of source numbers onto destination numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub src: Range<u64>,
    pub dst: u64,
}

impl Rule {
    pub fn new(dst: u64, src: u64, len: u64) -> Self {
        Self {
            src: src..src.saturating_add(len),
            dst,
        }
    }

    fn shift(&self, n: u64) -> u64 {
        self.dst.saturating_add(n - self.src.start)
    }

    /// Convert `n` if this rule covers it.
    pub fn convert(&self, n: u64) -> Option<u64> {
        self.src.contains(&n).then(|| self.shift(n))
    }
}

/// One map of the almanac, like `seed-to-soil`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    pub from: &'static str,
    pub to: &'static str,
    pub rules: Vec<Rule>,
}

impl Map {
    /// Numbers not covered by any rule map onto themselves.
    pub fn convert(&self, n: u64) -> u64 {
        self.rules
            .iter()
            .find_map(|rule| rule.convert(n))
            .unwrap_or(n)
    }

    /// Convert a whole range, splitting it where it straddles rules.
    pub fn convert_range(&self, range: Range<u64>) -> Vec<Range<u64>> {
        let mut output = Vec::new();
        let mut pending = vec![range];

        for rule in &self.rules {
            let mut rest = Vec::new();

            for range in pending {
                let start = range.start.max(rule.src.start);
                let end = range.end.min(rule.src.end);

                if start >= end {
                    rest.push(range);
                    continue;
                }

                output.push(rule.shift(start)..rule.shift(start).saturating_add(end - start));

                if range.start < start {
                    rest.push(range.start..start);
                }

                if end < range.end {
                    rest.push(end..range.end);
                }
            }

            pending = rest;
        }

        output.extend(pending);
        output
    }
}

/// Seeds and the maps they pass through, in the order they are listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    pub seeds: Vec<u64>,
    pub maps: Vec<Map>,
}

impl Almanac {
    pub fn parse(mut input: IStr) -> Result<Self> {
        let (W(_), seeds) = input.line::<(W, Vec<u64>)>()?;
        let mut maps = Vec::new();

        while let Some(mut line) = input.try_line::<IStr>()? {
            if line.is_empty() {
                continue;
            }

            let Split((from, Skip, W(to))) =
                line.next::<Split<'-', (&'static str, Skip, W<&'static str>)>>()?;

            let mut rules = Vec::new();

            while let Some(mut line) = input.try_line::<IStr>()? {
                if line.is_empty() {
                    break;
                }

                let (dst, src, len) = line.next::<(u64, u64, u64)>()?;
                rules.push(Rule::new(dst, src, len));
            }

            log::debug!("{from}-to-{to}: {} rules", rules.len());
            maps.push(Map { from, to, rules });
        }

        Ok(Self { seeds, maps })
    }

    /// Where a single seed ends up.
    pub fn locate(&self, seed: u64) -> u64 {
        self.maps.iter().fold(seed, |n, map| map.convert(n))
    }

    /// The lowest location of any seed.
    pub fn lowest(&self) -> Result<u64> {
        self.seeds
            .iter()
            .map(|&seed| self.locate(seed))
            .min()
            .context("no seeds")
    }

    /// The lowest location when seeds are listed as pairs of a start and a
    /// length. A trailing unpaired number is ignored.
    pub fn lowest_of_ranges(&self) -> Result<u64> {
        let seeds = self
            .seeds
            .chunks_exact(2)
            .map(|pair| pair[0]..pair[0].saturating_add(pair[1]))
            .collect::<Vec<_>>();

        let ranges = self.maps.iter().fold(seeds, |ranges, map| {
            ranges
                .into_iter()
                .flat_map(|range| map.convert_range(range))
                .collect()
        });

        ranges
            .iter()
            .filter(|range| !range.is_empty())
            .map(|range| range.start)
            .min()
            .context("no seed ranges")
    }
}

pub fn solve(input: IStr) -> Result<(u64, u64)> {
    let almanac = Almanac::parse(input)?;
    Ok((almanac.lowest()?, almanac.lowest_of_ranges()?))
}
