pub mod hash;
pub mod parse;
