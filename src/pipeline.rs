use image::RgbaImage;

use crate::encode::{self, EncodeError};
use crate::overlay::{self, OverlayIcon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The displayed image was replaced with a fresh encode.
    Updated,
    /// The input trimmed to nothing; the previous display is retained.
    Ignored,
}

/// Owns the two single-writer slots of the application: the current overlay
/// icon and the currently displayed bitmap.
///
/// The displayed bitmap always equals the result of the last successful
/// encode (plus composite, if an icon is held). Failed encodes leave it
/// untouched, and the icon persists across encodes until replaced.
#[derive(Default)]
pub struct QrSession {
    icon: Option<OverlayIcon>,
    displayed: Option<RgbaImage>,
}

impl QrSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displayed(&self) -> Option<&RgbaImage> {
        self.displayed.as_ref()
    }

    pub fn has_icon(&self) -> bool {
        self.icon.is_some()
    }

    /// Replace the held overlay icon. The previous icon is dropped; the slot
    /// is never cleared once set.
    pub fn set_icon(&mut self, icon: OverlayIcon) {
        self.icon = Some(icon);
    }

    /// Run the full text-change pipeline: trim, encode, composite, replace
    /// the display.
    ///
    /// Empty or whitespace-only input is ignored. On an encode failure the
    /// error is returned and the previous display stays as-is.
    pub fn handle_text_change(
        &mut self,
        raw: &str,
        target_side: u32,
    ) -> Result<PipelineOutcome, EncodeError> {
        let text = raw.trim();
        if text.is_empty() {
            return Ok(PipelineOutcome::Ignored);
        }

        let encoded = encode::encode(text, target_side)?;
        let finished = match &self.icon {
            Some(icon) => overlay::composite(&encoded, icon),
            None => encoded,
        };
        self.displayed = Some(finished);
        tracing::debug!(
            chars = text.len(),
            side = target_side,
            icon = self.icon.is_some(),
            "display updated"
        );
        Ok(PipelineOutcome::Updated)
    }
}
