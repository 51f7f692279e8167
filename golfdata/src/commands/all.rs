// golfdata/src/commands/all.rs
//
// USE CASE: Run both exports. They share nothing, so the second still runs
// when the first fails.

use std::path::Path;

use golfdata_core::domain::configuration::Pipeline;

use crate::cli::SourceArgs;
use crate::commands::export;

pub async fn execute(config_path: Option<&Path>) -> bool {
    let mut ok = true;
    for pipeline in Pipeline::ALL {
        ok &= export::execute(pipeline, config_path, SourceArgs::default()).await;
    }
    ok
}
