use indoc::indoc;
use lib::prelude::*;

use super::{solve, Record};

fn record(line: &'static str) -> Record {
    IStr::new(line.as_bytes()).next::<Record>().unwrap()
}

#[test]
fn test_example() {
    let input = IStr::new(indoc! {b"
        ???.### 1,1,3
        .??..??...?##. 1,1,3
        ?#?#?#?#?#?#?#? 1,3,1,6
        ????.#...#... 4,1,1
        ????.######..#####. 1,6,5
        ?###???????? 3,2,1
    "});

    assert_eq!(solve(input).unwrap(), (21, 525152));
}

#[test]
fn test_arrangements() {
    assert_eq!(record("???.### 1,1,3").arrangements(), 1);
    assert_eq!(record(".??..??...?##. 1,1,3").arrangements(), 4);
    assert_eq!(record("?###???????? 3,2,1").arrangements(), 10);
    assert_eq!(record("### 3").arrangements(), 1);
    assert_eq!(record("#.# 3").arrangements(), 0);
    assert_eq!(record("??? 1").arrangements(), 3);
    assert_eq!(record("#?? 1").arrangements(), 1);
}

#[test]
fn test_unfold() {
    let unfolded = record(".# 1").unfold(5);
    assert_eq!(unfolded.springs, b".#?.#?.#?.#?.#");
    assert_eq!(unfolded.groups, [1; 5]);

    assert_eq!(record(".??..??...?##. 1,1,3").unfold(5).arrangements(), 16384);
    assert_eq!(record("?###???????? 3,2,1").unfold(5).arrangements(), 506250);
}

#[test]
fn test_bad_records() {
    let mut input = IStr::new(b"??x 1\n??? 0\n??? 1,x\n");

    assert!(input.line::<Record>().is_err());
    assert!(input.line::<Record>().is_err());
    assert!(input.line::<Record>().is_err());
}
