use indoc::indoc;

use super::{scan, NumericToken, Schematic, SymbolCell};

const EXAMPLE: &str = indoc! {"
    467..114..
    ...*......
    ..35..633.
    ......#...
    617*......
    .....+.58.
    ..592.....
    ......755.
    ...$.*....
    .664.598..
"};

#[test]
fn test_example() {
    assert_eq!(scan(EXAMPLE), (4361, 467835));
}

#[test]
fn test_idempotent() {
    assert_eq!(scan(EXAMPLE), scan(EXAMPLE));
}

#[test]
fn test_empty() {
    assert_eq!(scan(""), (0, 0));
    assert_eq!(scan("\n\n"), (0, 0));
}

#[test]
fn test_no_symbols() {
    assert_eq!(scan("12..34\n..56..\n"), (0, 0));
}

#[test]
fn test_parse() {
    let schematic = Schematic::parse("12.*\n.7#\n");

    assert_eq!(
        schematic.tokens(),
        [
            NumericToken {
                value: 12,
                row: 0,
                start: 0,
                end: 1
            },
            NumericToken {
                value: 7,
                row: 1,
                start: 1,
                end: 1
            },
        ]
    );

    assert_eq!(
        schematic.symbols(),
        [
            SymbolCell {
                row: 0,
                column: 3,
                symbol: '*'
            },
            SymbolCell {
                row: 1,
                column: 2,
                symbol: '#'
            },
        ]
    );
}

#[test]
fn test_number_at_end_of_row() {
    let schematic = Schematic::parse("..*\n.42");
    let [token] = schematic.tokens() else {
        panic!("expected one token");
    };

    assert_eq!((token.start, token.end, token.value), (1, 2, 42));
    assert_eq!(scan("..*\n.42"), (42, 0));
}

#[test]
fn test_trimmed_rows() {
    let indented = "  467..\n  ...*.\r\n  ..35.  ";
    let plain = "467..\n...*.\n..35.";

    assert_eq!(scan(indented), scan(plain));
    assert_eq!(scan(plain), (502, 467 * 35));
}

#[test]
fn test_row_breaks() {
    assert_eq!(scan("1.\r.*"), (1, 0));
    assert_eq!(scan("467..\r...*.\r..35."), (502, 467 * 35));
    assert_eq!(scan("467..\r\n...*.\r\n..35.\r\n"), (502, 467 * 35));

    let schematic = Schematic::parse("1\r\n\r\n*\r");
    assert_eq!(schematic.rows.len(), 3);
    assert_eq!(schematic.symbols()[0].row, 2);
}

#[test]
fn test_ragged_rows() {
    assert_eq!(scan("1\n..*\n1"), (0, 0));
    assert_eq!(scan("..1\n..*\n1234"), (1 + 1234, 1234));
}

#[test]
fn test_diagonals() {
    let text = indoc! {"
        1.2
        .*.
        3.4
    "};

    let schematic = Schematic::parse(text);
    let adjacency = schematic.adjacency();
    let [(symbol, values)] = &adjacency[..] else {
        panic!("expected one symbol");
    };

    assert_eq!((symbol.row, symbol.column), (1, 1));
    assert_eq!(values, &[1, 2, 3, 4]);
    assert_eq!(scan(text), (10, 0));
}

#[test]
fn test_gear_requires_exactly_two() {
    assert_eq!(scan("2*3"), (5, 6));
    assert_eq!(scan("5*"), (5, 0));
    assert_eq!(scan("2*3\n.4."), (9, 0));
}

#[test]
fn test_shared_number_counts_per_symbol() {
    // 10 touches both symbols and counts once for each of them.
    assert_eq!(scan("*10*"), (20, 0));
    assert_eq!(scan("2*10*3"), (25, 2 * 10 + 10 * 3));
}

#[test]
fn test_same_value_above_and_below() {
    let text = indoc! {"
        .5.
        .*.
        .5.
    "};

    let schematic = Schematic::parse(text);
    let symbol = schematic.symbols()[0];

    assert_eq!(schematic.adjacent(&symbol).collect::<Vec<_>>(), [5, 5]);
    assert_eq!(scan(text), (10, 25));
}

#[test]
fn test_long_token_counted_once() {
    // A token spanning the whole window must not be added once per column.
    assert_eq!(scan("12345\n..*.."), (12345, 0));
}

#[test]
fn test_any_other_character_is_symbol() {
    assert_eq!(scan("7é"), (7, 0));
    assert_eq!(scan("3 4"), (7, 12));
}

#[test]
fn test_overflow_saturates() {
    let (parts, gears) = scan("99999999999999999999999*2");
    assert_eq!(parts, u64::MAX);
    assert_eq!(gears, u64::MAX);
}
