use indoc::indoc;
use lib::prelude::*;

use super::{extrapolate, solve};

#[test]
fn test_example() {
    let input = IStr::new(indoc! {b"
        0 3 6 9 12 15
        1 3 6 10 15 21
        10 13 16 21 30 45
    "});

    assert_eq!(solve(input).unwrap(), (114, 2));
}

#[test]
fn test_extrapolate() {
    assert_eq!(extrapolate(&[0, 3, 6, 9, 12, 15]), Some((-3, 18)));
    assert_eq!(extrapolate(&[10, 13, 16, 21, 30, 45]), Some((5, 68)));
    assert_eq!(extrapolate(&[-2, -4, -6]), Some((0, -8)));
    assert_eq!(extrapolate(&[7]), Some((7, 7)));
    assert_eq!(extrapolate(&[]), Some((0, 0)));
}

#[test]
fn test_overflow() {
    assert_eq!(extrapolate(&[i64::MIN, i64::MAX]), None);
    assert!(solve(IStr::new(b"-9223372036854775808 9223372036854775807\n")).is_err());
}
