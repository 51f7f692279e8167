// golfdata-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Ports (Interfaces / Traits)
// Le contrat Fetcher : d'où vient le corps brut
pub mod ports;

// 2. Domain (Cœur du métier)
// Records, snapshots, parser HTML, validation du registre.
// Ne dépend de RIEN d'autre (ni infra, ni app).
pub mod domain;

// 3. Infrastructure (Adapters)
// HTTP, fixtures, écriture JSON, configuration
pub mod infrastructure;

// 4. Application (Use Cases)
// banestatus et golfklubber : fetch -> parse -> write
pub mod application;

// --- GESTION DES ERREURS GLOBALE ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::{ErrorKind, GolfdataError};
