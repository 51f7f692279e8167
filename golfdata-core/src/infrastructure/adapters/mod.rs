// golfdata-core/src/infrastructure/adapters/mod.rs

pub mod file;
pub mod http;

pub use file::FileFetcher;
pub use http::HttpFetcher;
