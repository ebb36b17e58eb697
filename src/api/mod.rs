//! High-level library API: crop a single screenshot next to itself, or every
//! candidate in a directory with per-file failure isolation. Prefer these
//! entrypoints over the low-level `core` modules when embedding chartcrop.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::discovery::{cropped_output_path, discover_candidates};
use crate::core::params::CropParams;
use crate::core::processing::crop::{check_expected_size, retained_region};
use crate::error::Result;
use crate::io::ImageCodec;
use crate::types::SizeMismatch;

/// Result of cropping one candidate file.
#[derive(Debug)]
pub struct CropOutcome {
    pub source: PathBuf,
    /// Set whenever the image decoded, even if a later step failed
    pub size_warning: Option<SizeMismatch>,
    /// Output path on success, the reason otherwise
    pub result: Result<PathBuf>,
}

impl CropOutcome {
    pub fn is_cropped(&self) -> bool {
        self.result.is_ok()
    }

    pub fn output(&self) -> Option<&Path> {
        self.result.as_ref().ok().map(PathBuf::as_path)
    }
}

/// Batch cropping report
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Absolute path of the processed directory
    pub target: PathBuf,
    pub total: usize,
    pub cropped: usize,
    pub failed: usize,
    /// Previous `_cropped.png` outputs that were not reprocessed
    pub skipped: usize,
    pub outcomes: Vec<CropOutcome>,
}

impl BatchReport {
    fn from_outcomes(target: PathBuf, skipped: usize, outcomes: Vec<CropOutcome>) -> Self {
        let total = outcomes.len();
        let cropped = outcomes.iter().filter(|o| o.is_cropped()).count();
        Self {
            target,
            total,
            cropped,
            failed: total - cropped,
            skipped,
            outcomes,
        }
    }
}

/// Crop `source` with `params` and write `<stem>_cropped.png` beside it.
///
/// Never returns an error: decode, geometry and write failures end up in
/// [`CropOutcome::result`] so a batch can carry on with the next file.
pub fn crop_one<C: ImageCodec>(codec: &C, source: &Path, params: &CropParams) -> CropOutcome {
    let mut size_warning = None;
    let result = crop_to_sibling(codec, source, params, &mut size_warning);
    if let Err(e) = &result {
        warn!("Failed to crop {:?}: {}", source, e);
    }
    CropOutcome {
        source: source.to_path_buf(),
        size_warning,
        result,
    }
}

fn crop_to_sibling<C: ImageCodec>(
    codec: &C,
    source: &Path,
    params: &CropParams,
    size_warning: &mut Option<SizeMismatch>,
) -> Result<PathBuf> {
    let output = cropped_output_path(source);

    let image = codec.open(source)?;
    let size = codec.dimensions(&image);
    *size_warning = check_expected_size(size, params.expected_size);
    if let Some(mismatch) = size_warning {
        warn!("Unexpected size for {:?}: {}", source, mismatch);
    }

    let region = retained_region(size, params.margins)?;
    let cropped = codec.crop_region(&image, region)?;
    codec.save(&cropped, &output)?;

    info!("Cropped {:?} -> {:?} ({})", source, output, region.size());
    Ok(output)
}

/// Crop every candidate in `dir`, in file name order.
///
/// `on_outcome` sees each outcome as soon as its file is done. Only an
/// invalid or unreadable `dir` is an error; per-file failures are counted
/// in the returned report.
pub fn crop_directory<C, F>(
    codec: &C,
    dir: &Path,
    params: &CropParams,
    mut on_outcome: F,
) -> Result<BatchReport>
where
    C: ImageCodec,
    F: FnMut(&CropOutcome),
{
    let discovery = discover_candidates(dir)?;
    let target = fs::canonicalize(dir).or_else(|_| std::path::absolute(dir))?;

    let mut outcomes = Vec::with_capacity(discovery.candidates.len());
    for source in &discovery.candidates {
        let outcome = crop_one(codec, source, params);
        on_outcome(&outcome);
        outcomes.push(outcome);
    }

    let report = BatchReport::from_outcomes(target, discovery.already_cropped, outcomes);
    info!(
        "Batch complete: cropped={} failed={} skipped={}",
        report.cropped, report.failed, report.skipped
    );
    Ok(report)
}
