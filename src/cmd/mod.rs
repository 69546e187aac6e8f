pub mod parse;
pub mod update;
