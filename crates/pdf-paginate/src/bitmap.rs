//! The rendered document as a single raster

use crate::layout::SubRegion;
use crate::types::{PaginateError, Result};
use image::{DynamicImage, RgbaImage, imageops};

/// The fully rendered document, prior to pagination
#[derive(Debug, Clone)]
pub struct SourceBitmap {
    pixels: RgbaImage,
}

impl SourceBitmap {
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width_px(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height_px(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Copy out the pixels of one region.
    ///
    /// # Errors
    /// Returns [`PaginateError::RegionOutOfBounds`] if the region is empty or
    /// does not lie entirely inside the bitmap.
    pub fn extract(&self, region: SubRegion) -> Result<RgbaImage> {
        let fits_horizontally = region
            .x
            .checked_add(region.width)
            .is_some_and(|right| right <= self.width_px());
        let fits_vertically = region
            .y
            .checked_add(region.height)
            .is_some_and(|bottom| bottom <= self.height_px());

        if region.width == 0 || region.height == 0 || !fits_horizontally || !fits_vertically {
            return Err(PaginateError::RegionOutOfBounds(region));
        }

        Ok(imageops::crop_imm(&self.pixels, region.x, region.y, region.width, region.height)
            .to_image())
    }
}

impl From<RgbaImage> for SourceBitmap {
    fn from(pixels: RgbaImage) -> Self {
        Self::new(pixels)
    }
}

impl From<DynamicImage> for SourceBitmap {
    fn from(image: DynamicImage) -> Self {
        Self::new(image.to_rgba8())
    }
}
