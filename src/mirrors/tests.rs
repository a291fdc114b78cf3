use indoc::indoc;
use lib::prelude::*;

use super::{patterns, solve};

const EXAMPLE: &[u8] = indoc! {b"
    #.##..##.
    ..#.##.#.
    ##......#
    ##......#
    ..#.##.#.
    ..##..###
    #.#.##.#.

    #...##..#
    #....#..#
    ..##..###
    #####.##.
    #####.##.
    ..##..###
    #....#..#
"};

#[test]
fn test_example() {
    assert_eq!(solve(IStr::new(EXAMPLE)).unwrap(), (405, 400));
}

#[test]
fn test_summarize() {
    let patterns = patterns(IStr::new(EXAMPLE)).unwrap();
    assert_eq!(patterns.len(), 2);

    assert_eq!(patterns[0].summarize(0), Some(5));
    assert_eq!(patterns[0].summarize(1), Some(300));
    assert_eq!(patterns[1].summarize(0), Some(400));
    assert_eq!(patterns[1].summarize(1), Some(100));
}

#[test]
fn test_blank_lines() {
    let patterns = patterns(IStr::new(b"\n\n#.\n#.\n\n\n#.\n..\n\n")).unwrap();
    assert_eq!(patterns.len(), 2);
    assert_eq!(patterns[0].summarize(0), Some(100));
    assert_eq!(patterns[1].summarize(0), None);
}

#[test]
fn test_no_reflection() {
    assert!(solve(IStr::new(b"#.\n.#\n##\n")).is_err());
}

#[test]
fn test_ragged() {
    assert!(patterns(IStr::new(b"#.#\n#.\n")).is_err());
}
