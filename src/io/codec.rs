use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{CropRegion, ImageSize};

/// Decode, crop and encode capability used by the batch cropper.
///
/// The decoded image is an owned value: it is released when it goes out of
/// scope, on success and on every error path alike.
pub trait ImageCodec {
    type Image;

    fn open(&self, path: &Path) -> Result<Self::Image>;

    fn dimensions(&self, image: &Self::Image) -> ImageSize;

    fn crop_region(&self, image: &Self::Image, region: CropRegion) -> Result<Self::Image>;

    fn save(&self, image: &Self::Image, path: &Path) -> Result<()>;
}

/// `image`-crate backed codec. Sources are sniffed by content; outputs are always PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl ImageCodec for PngCodec {
    type Image = DynamicImage;

    fn open(&self, path: &Path) -> Result<DynamicImage> {
        let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        debug!(
            "Decoded {:?}: {}x{} {:?}",
            path,
            image.width(),
            image.height(),
            image.color()
        );
        Ok(image)
    }

    fn dimensions(&self, image: &DynamicImage) -> ImageSize {
        let (width, height) = image.dimensions();
        ImageSize::new(width, height)
    }

    fn crop_region(&self, image: &DynamicImage, region: CropRegion) -> Result<DynamicImage> {
        // crop_imm clamps to the image bounds; an out-of-bounds region is a caller bug
        let (width, height) = image.dimensions();
        let fits_x = u64::from(region.x) + u64::from(region.width) <= u64::from(width);
        let fits_y = u64::from(region.y) + u64::from(region.height) <= u64::from(height);
        if region.width == 0 || region.height == 0 || !fits_x || !fits_y {
            return Err(Error::external(format_args!(
                "crop region {}x{}+{}+{} does not fit a {}x{} image",
                region.width, region.height, region.x, region.y, width, height
            )));
        }
        Ok(image.crop_imm(region.x, region.y, region.width, region.height))
    }

    fn save(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        image.save_with_format(path, ImageFormat::Png)?;
        debug!("Wrote {:?} ({}x{})", path, image.width(), image.height());
        Ok(())
    }
}
