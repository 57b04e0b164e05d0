//! Icon overlay loading and compositing

use std::path::Path;

use image::{imageops, RgbaImage};
use thiserror::Error;

/// Side length the overlay icon is resized to before stamping, independent of
/// the QR bitmap's size.
pub const FOOTPRINT_SIDE: u32 = 80;

/// The selected file is not a decodable image.
#[derive(Debug, Error)]
#[error("failed to load overlay icon: {0}")]
pub struct IconLoadError(#[from] image::ImageError);

/// A user-chosen logo stamped onto the center of every encoded symbol.
#[derive(Debug, Clone)]
pub struct OverlayIcon {
    source: RgbaImage,
}

impl OverlayIcon {
    pub fn new(source: RgbaImage) -> Self {
        Self { source }
    }

    pub fn load(path: &Path) -> Result<Self, IconLoadError> {
        let img = image::open(path)?;
        Ok(Self::new(img.to_rgba8()))
    }
}

/// Stamp `icon` onto the center of `base`.
///
/// The icon is resampled to [`FOOTPRINT_SIDE`] with a bicubic-class filter and
/// then copied pixel-for-pixel over the covered region. The stamp overwrites
/// the QR modules beneath it; whether the result stays scannable is up to the
/// symbol's error correction budget and is not validated here.
pub fn composite(base: &RgbaImage, icon: &OverlayIcon) -> RgbaImage {
    let stamp = imageops::resize(
        &icon.source,
        FOOTPRINT_SIDE,
        FOOTPRINT_SIDE,
        imageops::FilterType::CatmullRom,
    );
    let mut out = base.clone();
    let x = base.width().saturating_sub(FOOTPRINT_SIDE) / 2;
    let y = base.height().saturating_sub(FOOTPRINT_SIDE) / 2;
    imageops::replace(&mut out, &stamp, i64::from(x), i64::from(y));
    out
}
