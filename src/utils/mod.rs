pub mod formatters;
pub mod parsers;
