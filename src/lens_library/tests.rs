use lib::prelude::*;

use super::{hash, solve, step, Boxes, Op};

const EXAMPLE: &[u8] = b"rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7\n";

#[test]
fn test_example() {
    assert_eq!(solve(IStr::new(EXAMPLE)).unwrap(), (1320, 145));
}

#[test]
fn test_hash() {
    assert_eq!(hash(b"HASH"), 52);
    assert_eq!(hash(b"rn=1"), 30);
    assert_eq!(hash(b"rn"), 0);
    assert_eq!(hash(b"qp"), 1);
    assert_eq!(hash(b""), 0);
}

#[test]
fn test_step() {
    assert_eq!(step(b"rn=1").unwrap(), (&b"rn"[..], Op::Insert(1)));
    assert_eq!(step(b"cm-").unwrap(), (&b"cm"[..], Op::Remove));
    assert!(step(b"cm").is_err());
    assert!(step(b"cm=0").is_err());
    assert!(step(b"cm=12").is_err());
}

#[test]
fn test_boxes() {
    let mut boxes = Boxes::new();
    boxes.apply(b"rn", Op::Insert(1));
    boxes.apply(b"cm", Op::Insert(2));
    boxes.apply(b"rn", Op::Insert(5));
    boxes.apply(b"zz", Op::Remove);

    // Replacing a lens keeps its slot.
    assert_eq!(boxes.focusing_power(), 5 + 2 * 2);

    boxes.apply(b"rn", Op::Remove);
    assert_eq!(boxes.focusing_power(), 2);
}

#[test]
fn test_newlines_are_ignored() {
    let input = IStr::new(b"rn=1,cm-,qp=3,cm=2,qp-,pc=4,\not=9,ab=5,pc-,pc=6,ot=7\n");
    assert_eq!(solve(input).unwrap(), (1320, 145));
}
