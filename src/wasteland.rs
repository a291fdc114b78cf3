//! Navigating a desert network of nodes.


use std::collections::HashMap;

use lib::prelude::*;

/// A line like `AAA = (BBB, CCC)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub name: &'static str,
    pub left: &'static str,
    pub right: &'static str,
}

lib::from_input! {
    Node from (W<&'static str>, W<&'static str>, W<&'static str>, W<&'static str>) => |(W(name), W(eq), W(left), W(right))| {
        ensure!(eq == "=", "expected `=`, but got `{eq}`");

        let left = left
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(','))
            .with_context(|| format!("expected `(<left>,`, but got `{left}`"))?;

        let right = right
            .strip_suffix(')')
            .with_context(|| format!("expected `<right>)`, but got `{right}`"))?;

        Ok(Node { name, left, right })
    }
}

/// The network with every node referred to by its index.
#[derive(Debug)]
pub struct Network {
    names: Vec<&'static str>,
    links: Vec<[usize; 2]>,
}

impl Network {
    pub fn new(nodes: &[Node]) -> Result<Self> {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.name, i))
            .collect::<HashMap<_, _>>();

        let find = |name: &str| {
            index
                .get(name)
                .copied()
                .with_context(|| format!("unknown node `{name}`"))
        };

        let links = nodes
            .iter()
            .map(|node| Ok([find(node.left)?, find(node.right)?]))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            names: nodes.iter().map(|node| node.name).collect(),
            links,
        })
    }

    pub fn node(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| *n == name)
    }

    /// Count the steps taken from `start` until a node for which `end`
    /// returns `true` is reached, following `turns` over and over.
    ///
    /// Errors if the walk ends up going around in circles.
    pub fn steps(&self, turns: &[usize], start: usize, end: impl Fn(&str) -> bool) -> Result<u64> {
        ensure!(!turns.is_empty(), "no instructions");

        let limit = self.names.len().saturating_mul(turns.len());
        let mut node = start;

        for (steps, turn) in turns.iter().cycle().enumerate().take(limit + 1) {
            if end(self.names[node]) {
                return Ok(steps as u64);
            }

            node = self.links[node][*turn];
        }

        bail!("`{}` never reaches an end", self.names[start])
    }
}

/// Least common multiple of two numbers, or `None` on overflow.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    let (mut x, mut y) = (a, b);

    while y != 0 {
        (x, y) = (y, x % y);
    }

    match x {
        0 => Some(0),
        gcd => (a / gcd).checked_mul(b),
    }
}

pub fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let turns = input
        .line::<&'static [u8]>()?
        .trim()
        .iter()
        .map(|turn| match turn {
            b'L' => Ok(0),
            b'R' => Ok(1),
            other => bail!("unknown instruction `{}`", char::from(*other)),
        })
        .collect::<Result<Vec<usize>>>()?;

    let mut nodes = Vec::new();

    while let Some(mut line) = input.try_line::<IStr>()? {
        if !line.is_empty() {
            nodes.push(line.next::<Node>()?);
        }
    }

    let network = Network::new(&nodes)?;
    let start = network.node("AAA").context("missing node `AAA`")?;
    let o1 = network.steps(&turns, start, |name| name == "ZZZ")?;

    let mut o2 = None;

    for (i, node) in nodes.iter().enumerate() {
        if !node.name.ends_with('A') {
            continue;
        }

        let steps = network.steps(&turns, i, |name| name.ends_with('Z'))?;
        log::debug!("{}: {steps} steps", node.name);

        o2 = Some(match o2 {
            None => steps,
            Some(o2) => lcm(o2, steps).context("steps overflow")?,
        });
    }

    Ok((o1, o2.unwrap_or_default()))
}
