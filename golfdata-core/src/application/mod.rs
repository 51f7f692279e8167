// golfdata-core/src/application/mod.rs

pub mod banestatus;
pub mod golfklubber;
pub mod summary;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Cela permet au CLI de faire :
// `use golfdata_core::application::{update_banestatus, update_golfklubber};`
// sans avoir à connaître la structure interne des fichiers.

pub use banestatus::update_banestatus;
pub use golfklubber::update_golfklubber;
pub use summary::RunSummary;
