//! Batch driver: computes recommendations for the example applicants, prints
//! them and persists the results table.

use std::path::Path;
use std::process::ExitCode;

use chrono::Utc;
use tracing::{error, info};

use credit_line_engine::calculation::compute_batch;
use credit_line_engine::config::{APPLICANTS_FILE, ConfigLoader};
use credit_line_engine::error::EngineResult;
use credit_line_engine::report::{RESULTS_FILE, render_listing, write_report};
use credit_line_engine::telemetry;

const DATA_DIR: &str = "data";

fn main() -> ExitCode {
    telemetry::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Run aborted");
            ExitCode::FAILURE
        }
    }
}

fn run() -> EngineResult<()> {
    let data_dir = Path::new(DATA_DIR);
    let tables = ConfigLoader::load(data_dir)?.into_tables();
    let applicants = ConfigLoader::load_applicants(data_dir.join(APPLICANTS_FILE))?;

    let now = Utc::now();
    info!(applicants = applicants.len(), as_of = %now, "Batch started");
    let results = compute_batch(&tables, &applicants, now)?;

    println!("{}", render_listing(&results)?);
    write_report(RESULTS_FILE, &results)?;

    info!(results = results.len(), "Batch finished");
    println!("Resultados generados en {}", RESULTS_FILE);
    Ok(())
}
