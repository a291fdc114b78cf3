use indoc::indoc;
use lib::prelude::*;

use super::{solve, Bag, Game, GameError};

const EXAMPLE: &str = indoc! {"
    Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
    Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
    Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
    Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
    Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
"};

#[test]
fn test_parse() {
    let game = Game::parse("Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green").unwrap();

    assert_eq!(
        game,
        Game {
            id: 3,
            red: 20,
            green: 13,
            blue: 6
        }
    );

    assert!(!game.is_possible(&Bag::DEFAULT));
    assert_eq!(game.power(), 20 * 13 * 6);
}

#[test]
fn test_example() {
    let input = IStr::new(EXAMPLE.as_bytes());
    assert_eq!(solve(input).unwrap(), (8, 2286));
}

#[test]
fn test_large_power() {
    let game = Game::parse("Game 1: 2000 red, 2000 green, 2000 blue").unwrap();
    assert_eq!(game.power(), 8_000_000_000);

    let line = format!("Game 1: {max} red, {max} green, {max} blue", max = u32::MAX);
    assert_eq!(Game::parse(&line).unwrap().power(), u64::MAX);

    let input = IStr::new(indoc! {b"
        Game 1: 2000 red, 2000 green, 2000 blue
        Game 2: 2000 red, 2000 green, 2000 blue
    "});

    assert_eq!(solve(input).unwrap(), (0, 16_000_000_000));
}

#[test]
fn test_no_draws() {
    let game = Game::parse("Game 7:").unwrap();
    assert_eq!(game.id, 7);
    assert_eq!(game.power(), 0);
    assert!(game.is_possible(&Bag::DEFAULT));
}

#[test]
fn test_errors() {
    assert_eq!(Game::parse("Game 1 3 red"), Err(GameError::MissingSeparator));
    assert_eq!(
        Game::parse("Round 1: 3 red"),
        Err(GameError::MissingPrefix("Round 1".into()))
    );
    assert!(matches!(
        Game::parse("Game x: 3 red"),
        Err(GameError::BadId(id, _)) if &*id == "x"
    ));
    assert_eq!(
        Game::parse("Game 1: 3red"),
        Err(GameError::BadPull("3red".into()))
    );
    assert!(matches!(
        Game::parse("Game 1: many red"),
        Err(GameError::BadCount(count, _)) if &*count == "many"
    ));
    assert_eq!(
        Game::parse("Game 1: 3 red, 2 purple"),
        Err(GameError::UnknownColour("purple".into()))
    );
}

#[test]
fn test_from_input() {
    let mut input = IStr::new(b"Game 1: 1 red\nGame 2: 2 blue, 3 green\n");

    assert_eq!(input.line::<Game>().unwrap().id, 1);
    assert_eq!(input.line::<Game>().unwrap().blue, 2);
    assert!(input.try_line::<Game>().unwrap().is_none());
}

#[test]
fn test_from_input_error_span() {
    let mut input = IStr::new(b"Game 1: 1 red\nGame 2: 2 pink\n");

    assert_eq!(input.line::<Game>().unwrap().id, 1);

    let error = input.line::<Game>().unwrap_err();
    assert_eq!(error.span(), 14..28);
    assert_eq!(input.index(), 29);
}
