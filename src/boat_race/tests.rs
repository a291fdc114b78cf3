use indoc::indoc;
use lib::prelude::*;

use super::{solve, Race};

#[test]
fn test_example() {
    let input = IStr::new(indoc! {b"
        Time:      7  15   30
        Distance:  9  40  200
    "});

    assert_eq!(solve(input).unwrap(), (288, 71503));
}

#[test]
fn test_ways() {
    assert_eq!(Race { time: 7, distance: 9 }.ways(), 4);
    assert_eq!(Race { time: 15, distance: 40 }.ways(), 8);
    // Holding for 10 or 20 only ties the record.
    assert_eq!(Race { time: 30, distance: 200 }.ways(), 9);
    assert_eq!(Race { time: 2, distance: 5 }.ways(), 0);
    assert_eq!(Race { time: 0, distance: 0 }.ways(), 0);
}

#[test]
fn test_mismatched_columns() {
    let input = IStr::new(indoc! {b"
        Time:      7  15
        Distance:  9
    "});

    assert!(solve(input).is_err());
}

#[test]
fn test_wrong_title() {
    let input = IStr::new(b"Distance: 9\nTime: 7\n");
    assert!(solve(input).is_err());
}
