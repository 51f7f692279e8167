// golfdata/src/commands/mod.rs

pub mod all;
pub mod export;
