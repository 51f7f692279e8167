// golfdata-core/src/ports/mod.rs

pub mod fetcher;

pub use fetcher::Fetcher;
