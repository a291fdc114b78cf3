use indoc::indoc;
use lib::prelude::*;

use super::{solve, Almanac, Map, Rule};

const EXAMPLE: &[u8] = indoc! {b"
    seeds: 79 14 55 13

    seed-to-soil map:
    50 98 2
    52 50 48

    soil-to-fertilizer map:
    0 15 37
    37 52 2
    39 0 15

    fertilizer-to-water map:
    49 53 8
    0 11 42
    42 0 7
    57 7 4

    water-to-light map:
    88 18 7
    18 25 70

    light-to-temperature map:
    45 77 23
    81 45 19
    68 64 13

    temperature-to-humidity map:
    0 69 1
    1 0 69

    humidity-to-location map:
    60 56 37
    56 93 4
"};

#[test]
fn test_example() {
    assert_eq!(solve(IStr::new(EXAMPLE)).unwrap(), (35, 46));
}

#[test]
fn test_parse() {
    let almanac = Almanac::parse(IStr::new(EXAMPLE)).unwrap();

    assert_eq!(almanac.seeds, [79, 14, 55, 13]);
    assert_eq!(almanac.maps.len(), 7);
    assert_eq!(almanac.maps[0].from, "seed");
    assert_eq!(almanac.maps[0].to, "soil");
    assert_eq!(almanac.maps[0].rules[1], Rule::new(52, 50, 48));
    assert_eq!(almanac.locate(79), 82);
    assert_eq!(almanac.locate(13), 35);
}

#[test]
fn test_convert_range() {
    let map = Map {
        from: "seed",
        to: "soil",
        rules: vec![Rule::new(50, 98, 2), Rule::new(52, 50, 48)],
    };

    assert_eq!(map.convert(98), 50);
    assert_eq!(map.convert(10), 10);

    let mut ranges = map.convert_range(40..100);
    ranges.sort_by_key(|range| range.start);
    assert_eq!(ranges, [40..50, 50..52, 52..100]);

    assert_eq!(map.convert_range(0..10), [0..10]);
}

#[test]
fn test_no_seeds() {
    let almanac = Almanac::parse(IStr::new(b"seeds:\n")).unwrap();
    assert!(almanac.lowest().is_err());
    assert!(almanac.lowest_of_ranges().is_err());
}

#[test]
fn test_bad_rule() {
    let input = IStr::new(indoc! {b"
        seeds: 1 2

        seed-to-soil map:
        50 98
    "});

    assert!(Almanac::parse(input).is_err());
}
