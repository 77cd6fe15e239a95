pub mod generate;
pub mod intro;
