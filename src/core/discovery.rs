//! Candidate discovery and output naming.
//!
//! A candidate is a regular file directly inside the target directory whose
//! name ends in `.png` (any case) and does not already end in `_cropped.png`.
//! Outputs are written next to their source, so the suffix rule is what keeps
//! a second run from cropping its own results.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};

pub const PNG_EXTENSION: &str = ".png";
pub const CROPPED_SUFFIX: &str = "_cropped.png";

/// Files eligible for cropping, in processing order.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Full paths, sorted ascending by file name
    pub candidates: Vec<PathBuf>,
    /// PNG files left alone because they are previous outputs
    pub already_cropped: usize,
}

pub fn is_png_name(name: &str) -> bool {
    name.to_lowercase().ends_with(PNG_EXTENSION)
}

pub fn is_cropped_name(name: &str) -> bool {
    name.to_lowercase().ends_with(CROPPED_SUFFIX)
}

pub fn is_candidate(name: &str) -> bool {
    is_png_name(name) && !is_cropped_name(name)
}

/// List `dir` (non-recursively) and keep the crop candidates.
///
/// Entries are matched by name and must also be regular files (or symlinks to
/// one): a directory called `x.png` is neither counted nor attempted.
pub fn discover_candidates(dir: &Path) -> Result<Discovery> {
    if !dir.is_dir() {
        return Err(Error::InvalidTarget {
            path: dir.to_path_buf(),
        });
    }

    let mut discovery = Discovery::default();
    let mut named = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        if !is_png_name(&name) {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            debug!("Skipping non-file entry: {:?}", path);
            continue;
        }
        if is_cropped_name(&name) {
            discovery.already_cropped += 1;
            continue;
        }
        named.push((file_name, path));
    }

    named.sort_by(|a, b| a.0.cmp(&b.0));
    discovery.candidates = named.into_iter().map(|(_, path)| path).collect();

    info!(
        "Discovered {} candidate(s) in {:?} ({} already cropped)",
        discovery.candidates.len(),
        dir,
        discovery.already_cropped
    );
    Ok(discovery)
}

/// `<dir>/<stem>_cropped.png` for a source `<dir>/<stem>.<ext>`.
/// The stem is kept byte for byte, casing included; only the extension is normalized.
pub fn cropped_output_path(source: &Path) -> PathBuf {
    let mut name = source.file_stem().unwrap_or_default().to_os_string();
    name.push(CROPPED_SUFFIX);
    source.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    fn names(discovery: &Discovery) -> Vec<String> {
        discovery
            .candidates
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn candidate_filter_is_case_insensitive() {
        assert!(is_candidate("chart.png"));
        assert!(is_candidate("chart.PNG"));
        assert!(is_candidate("Chart.Png"));
        assert!(!is_candidate("chart_cropped.png"));
        assert!(!is_candidate("chart_CROPPED.PNG"));
        assert!(!is_candidate("chart.jpg"));
        assert!(!is_candidate("chart.png.bak"));
        assert!(!is_candidate("png"));
    }

    #[test]
    fn output_path_appends_suffix_to_stem() {
        assert_eq!(
            cropped_output_path(Path::new("/shots/btc.png")),
            PathBuf::from("/shots/btc_cropped.png")
        );
        assert_eq!(
            cropped_output_path(Path::new("/shots/ETH-USDT.PNG")),
            PathBuf::from("/shots/ETH-USDT_cropped.png")
        );
        assert_eq!(
            cropped_output_path(Path::new("shots/v1.2.png")),
            PathBuf::from("shots/v1.2_cropped.png")
        );
    }

    #[cfg(unix)]
    #[test]
    fn output_path_keeps_non_utf8_stems_distinct() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = Path::new("/shots");
        let ff = cropped_output_path(&dir.join(OsStr::from_bytes(b"chart\xFF.png")));
        let fe = cropped_output_path(&dir.join(OsStr::from_bytes(b"chart\xFE.png")));

        assert_ne!(ff, fe);
        assert_eq!(ff.file_name().unwrap().as_bytes(), b"chart\xFF_cropped.png");
        assert_eq!(fe.file_name().unwrap().as_bytes(), b"chart\xFE_cropped.png");
        assert_eq!(ff.parent(), Some(dir));
    }

    #[test]
    fn discovery_keeps_only_fresh_pngs_sorted() {
        let tmp = TempDir::new().unwrap();
        for name in [
            "c.png",
            "a.PNG",
            "b.png",
            "a_cropped.png",
            "b_cropped.png",
            "notes.txt",
            "chart.jpg",
        ] {
            touch(tmp.path(), name);
        }

        let discovery = discover_candidates(tmp.path()).unwrap();
        assert_eq!(names(&discovery), ["a.PNG", "b.png", "c.png"]);
        assert_eq!(discovery.already_cropped, 2);
        assert!(discovery.candidates.iter().all(|p| p.parent() == Some(tmp.path())));
    }

    #[test]
    fn sort_order_is_bytewise() {
        let tmp = TempDir::new().unwrap();
        for name in ["b.png", "B.png", "a10.png", "a2.png"] {
            touch(tmp.path(), name);
        }

        let discovery = discover_candidates(tmp.path()).unwrap();
        assert_eq!(names(&discovery), ["B.png", "a10.png", "a2.png", "b.png"]);
    }

    #[test]
    fn subdirectories_are_not_candidates_or_traversed() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("nested.png")).unwrap();
        fs::create_dir(tmp.path().join("inner")).unwrap();
        touch(&tmp.path().join("inner"), "deep.png");
        touch(tmp.path(), "top.png");

        let discovery = discover_candidates(tmp.path()).unwrap();
        assert_eq!(names(&discovery), ["top.png"]);
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        let discovery = discover_candidates(tmp.path()).unwrap();
        assert!(discovery.candidates.is_empty());
        assert_eq!(discovery.already_cropped, 0);
    }

    #[test]
    fn missing_directory_is_invalid_target() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = discover_candidates(&missing).unwrap_err();
        assert!(matches!(err, Error::InvalidTarget { path } if path == missing));
    }

    #[test]
    fn regular_file_is_invalid_target() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "shot.png");
        let err = discover_candidates(&tmp.path().join("shot.png")).unwrap_err();
        assert!(matches!(err, Error::InvalidTarget { .. }));
    }
}
