//! QR symbol encoding

use image::{imageops, DynamicImage, Luma, RgbaImage};
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

/// Error correction level used for every symbol.
pub const EC_LEVEL: EcLevel = EcLevel::Q;

/// The input text cannot be represented at the configured error correction
/// level, e.g. it exceeds the symbol capacity.
#[derive(Debug, Error)]
#[error("failed to encode QR code: {0}")]
pub struct EncodeError(#[from] qrcode::types::QrError);

/// Encode trimmed, non-empty text into a square RGBA bitmap of exactly
/// `target_side` pixels per side, with no quiet zone.
///
/// The symbol is rendered at an integral module size and then resampled with
/// nearest-neighbor filtering, so modules stay crisp and the output stays
/// machine-decodable. Encoding is deterministic: the same text and side
/// always produce the same bitmap.
pub fn encode(text: &str, target_side: u32) -> Result<RgbaImage, EncodeError> {
    debug_assert!(target_side > 0);
    debug_assert!(!text.trim().is_empty());

    let code = QrCode::with_error_correction_level(text, EC_LEVEL)?;
    let modules = code.width() as u32;
    let module_px = (target_side / modules).max(1);
    let symbol = code
        .render::<Luma<u8>>()
        .quiet_zone(false)
        .module_dimensions(module_px, module_px)
        .build();

    let exact = imageops::resize(
        &symbol,
        target_side,
        target_side,
        imageops::FilterType::Nearest,
    );
    Ok(DynamicImage::ImageLuma8(exact).to_rgba8())
}
