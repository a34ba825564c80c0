pub mod embed;
pub mod parse;
