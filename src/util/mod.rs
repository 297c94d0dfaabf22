pub mod fuzzy;
pub mod parse;
pub mod schedule;
