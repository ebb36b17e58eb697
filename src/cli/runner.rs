use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use chartcrop::{CropOutcome, CropParams, PngCodec, crop_directory};

use super::args::CliArgs;
use super::errors::AppError;

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// One stdout line per event, in the order the events happened for this file.
fn outcome_lines(outcome: &CropOutcome) -> Vec<String> {
    let name = display_name(&outcome.source);
    let mut lines = Vec::with_capacity(2);
    if let Some(mismatch) = &outcome.size_warning {
        lines.push(format!("WARN: {name} {mismatch}"));
    }
    match &outcome.result {
        Ok(output) => lines.push(format!("CROPPED {name} -> {}", display_name(output))),
        Err(e) => lines.push(format!("ERROR: {name} failed: {e}")),
    }
    lines
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }

    let params = CropParams::default();
    info!("Cropping PNG screenshots in {:?} with {:?}", args.target, params);

    let report = crop_directory(&PngCodec, &args.target, &params, |outcome| {
        for line in outcome_lines(outcome) {
            println!("{line}");
        }
    })?;

    if report.total == 0 {
        println!("INFO: No PNG files to process in target directory.");
        return Ok(());
    }

    println!(
        "DONE: {}/{} images cropped in {}",
        report.cropped,
        report.total,
        report.target.display()
    );
    Ok(())
}
