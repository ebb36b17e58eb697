#![doc = r#"
chartcrop: strip the UI chrome from fixed-resolution chart screenshots.

Trading chart captures taken at 1920x1080 carry a constant border of toolbars,
headers, side panels and axes. This crate removes fixed pixel margins
(left 40, top 130, right 440, bottom 100) from every eligible PNG in a
directory and writes `<name>_cropped.png` next to each source, leaving a
1440x850 chart. It powers the `chartcrop` CLI and can be embedded directly.

Crop a directory
----------------
```rust,no_run
use std::path::Path;
use chartcrop::{crop_directory, CropParams, PngCodec};

fn main() -> chartcrop::Result<()> {
    let report = crop_directory(&PngCodec, Path::new("/captures"), &CropParams::default(), |outcome| {
        if let Err(e) = &outcome.result {
            eprintln!("{}: {e}", outcome.source.display());
        }
    })?;

    println!("{}/{} cropped in {}", report.cropped, report.total, report.target.display());
    Ok(())
}
```

Crop a single file
------------------
```rust,no_run
use std::path::Path;
use chartcrop::{crop_one, CropParams, PngCodec};

let outcome = crop_one(&PngCodec, Path::new("/captures/btc.png"), &CropParams::default());
if let Some(mismatch) = outcome.size_warning {
    println!("capture size {mismatch}");
}
```

Error handling
--------------
Only directory-level problems are returned as `Err`. Per-file decode,
geometry and write failures are carried in `CropOutcome::result` so that one
bad screenshot never stops a batch.

```rust
use chartcrop::{retained_region, CropMargins, Error, ImageSize};

let err = retained_region(ImageSize::new(300, 200), CropMargins::new(40, 130, 440, 100));
assert!(matches!(err, Err(Error::DegenerateCrop { .. })));
```

Useful modules
--------------
- [`api`]: single-file and directory entry points.
- [`core`]: crop parameters, discovery/naming rules and crop geometry.
- [`io`]: the `ImageCodec` capability and its PNG implementation.
- [`types`]: sizes, margins and regions.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use core::params::{CHART_MARGINS, CropParams, EXPECTED_SIZE};
pub use error::{Error, Result};
pub use types::{CropMargins, CropRegion, ImageSize, SizeMismatch};

// Building blocks
pub use core::discovery::{Discovery, cropped_output_path, discover_candidates, is_candidate};
pub use core::processing::crop::{check_expected_size, retained_region};
pub use io::{ImageCodec, PngCodec};

// High-level API re-exports
pub use api::{BatchReport, CropOutcome, crop_directory, crop_one};
