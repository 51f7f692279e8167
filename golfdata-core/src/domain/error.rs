// golfdata-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Unexpected payload shape: {0}")]
    #[diagnostic(
        code(golfdata::domain::shape),
        help("The upstream document changed layout. Inspect it before updating the parser.")
    )]
    Shape(String),

    #[error("No {0} rows found")]
    #[diagnostic(
        code(golfdata::domain::empty_result),
        help("The page was fetched but no table row had a name and a status.")
    )]
    EmptyResult(String),
}
