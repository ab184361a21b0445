pub mod info;
pub mod parse;
pub mod path;
