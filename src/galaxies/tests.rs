use indoc::indoc;
use lib::prelude::*;

use super::{solve, Universe};

const EXAMPLE: &[u8] = indoc! {b"
    ...#......
    .......#..
    #.........
    ..........
    ......#...
    .#........
    .........#
    ..........
    .......#..
    #...#.....
"};

#[test]
fn test_example() {
    assert_eq!(solve(IStr::new(EXAMPLE)).unwrap(), (374, 82000210));
}

#[test]
fn test_factors() {
    let universe = Universe::parse(IStr::new(EXAMPLE)).unwrap();

    assert_eq!(universe.distances(1), 292);
    assert_eq!(universe.distances(10), 1030);
    assert_eq!(universe.distances(100), 8410);
}

#[test]
fn test_single_galaxy() {
    let universe = Universe::parse(IStr::new(b"..\n.#\n")).unwrap();
    assert_eq!(universe.distances(2), 0);
}

#[test]
fn test_unexpected_tile() {
    assert!(Universe::parse(IStr::new(b"..\n.x\n")).is_err());
}
