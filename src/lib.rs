//! Solutions to Advent of Code 2023.

pub mod almanac;
pub mod beams;
pub mod boat_race;
pub mod camel_cards;
pub mod cubes;
pub mod dish;
pub mod galaxies;
pub mod lens_library;
pub mod mirage;
pub mod mirrors;
pub mod pipe_maze;
pub mod schematic;
pub mod scratchcards;
pub mod springs;
pub mod trebuchet;
pub mod wasteland;
