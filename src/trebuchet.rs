//! Calibration values hidden in lines of text.


use lib::prelude::*;

/// Digits spelled out with letters, in order of their value starting at one.
const WORDS: [&[u8]; 9] = [
    b"one", b"two", b"three", b"four", b"five", b"six", b"seven", b"eight", b"nine",
];

/// Find the digit at the start of `rest`, and whether it was spelled out.
fn digit_at(rest: &[u8]) -> Option<(bool, u32)> {
    if let [d @ b'0'..=b'9', ..] = rest {
        return Some((false, u32::from(d - b'0')));
    }

    let n = WORDS.iter().position(|word| rest.starts_with(word))?;
    Some((true, n as u32 + 1))
}

/// Calibrate a single line, returning the calibration value only counting
/// numerical digits and the one which also counts spelled out digits.
///
/// Spelled out digits may overlap, so `eightwo` contains both an 8 and a 2.
/// A line without any digits has a calibration value of zero.
///
/// # Examples
///
/// ```
/// use aoc2023::trebuchet::calibrate;
///
/// assert_eq!(calibrate(b"a1b2c3d4e5f"), (15, 15));
/// assert_eq!(calibrate(b"xtwone3four"), (33, 24));
/// assert_eq!(calibrate(b"treb7uchet"), (77, 77));
/// ```
pub fn calibrate(line: &[u8]) -> (u32, u32) {
    let mut digits = None::<(u32, u32)>;
    let mut all = None::<(u32, u32)>;

    for n in 0..line.len() {
        let Some((spelled, d)) = digit_at(&line[n..]) else {
            continue;
        };

        if !spelled {
            digits.get_or_insert((d, d)).1 = d;
        }

        all.get_or_insert((d, d)).1 = d;
    }

    let value = |pair: Option<(u32, u32)>| pair.map_or(0, |(first, last)| first * 10 + last);
    (value(digits), value(all))
}

/// Sum the calibration values of every line.
pub fn solve(mut input: IStr) -> Result<(u32, u32)> {
    let mut o1 = 0u32;
    let mut o2 = 0u32;

    while let Some(line) = input.try_line::<&[u8]>()? {
        let (a, b) = calibrate(line.trim_end());
        o1 = o1.saturating_add(a);
        o2 = o2.saturating_add(b);
    }

    Ok((o1, o2))
}
