use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;

/// Default file name offered by the save dialog.
pub const DEFAULT_SAVE_NAME: &str = "QRCode_1.png";

/// Copy a bitmap to the system clipboard.
pub fn copy_to_clipboard(img: &RgbaImage) -> Result<()> {
    let (width, height) = img.dimensions();
    let mut cb = arboard::Clipboard::new()?;
    cb.set_image(arboard::ImageData {
        width: width as usize,
        height: height as usize,
        bytes: Cow::Borrowed(img.as_raw().as_slice()),
    })?;
    Ok(())
}

/// Write a bitmap to `path` as PNG.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create save folder {}", parent.display()))?;
    }
    img.save(path)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Directory the save dialog opens in: the user's pictures folder, falling
/// back to the home directory.
pub fn default_save_dir() -> PathBuf {
    dirs_next::picture_dir()
        .or_else(dirs_next::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
