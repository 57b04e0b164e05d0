//! Borderless window chrome: the drag-to-move state machine, the maximize
//! guard, and the fixed geometry the window is laid out with.

/// Width of the accent line along the top edge.
pub const ACCENT_LINE_WIDTH: f32 = 7.0;
/// Vertical inset of the title string, and the gap reserved above content.
pub const TITLE_PADDING: f32 = 32.0;
/// Horizontal inset of the title string.
pub const TITLE_INSET_X: f32 = 14.0;
/// Point size of the title string.
pub const TITLE_FONT_SIZE: f32 = 16.0;
/// Padding around the QR display area and the input box.
pub const CONTENT_PADDING: f32 = 50.0;
/// Height of the multi-line input box.
pub const INPUT_HEIGHT: f32 = 80.0;
/// Hit-region side of the close glyph.
pub const CLOSE_SIDE: f32 = 32.0;
/// Distance of the close glyph from the top edge.
pub const CLOSE_TOP: f32 = 25.0;
/// Distance of the close glyph from the right edge.
pub const CLOSE_RIGHT_MARGIN: f32 = 20.0;
/// Point size of the close glyph.
pub const CLOSE_FONT_SIZE: f32 = 22.0;

/// Drag-to-move state. At most one drag is active at a time, and the anchor
/// offset captured at drag start stays constant until release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { anchor: (f32, f32) },
}

impl DragState {
    /// Primary button pressed on the window surface at `cursor` (global
    /// coordinates) while the window origin is at `origin`.
    pub fn handle_primary_down(&mut self, cursor: (f32, f32), origin: (f32, f32)) {
        if matches!(self, DragState::Idle) {
            *self = DragState::Dragging {
                anchor: (origin.0 - cursor.0, origin.1 - cursor.1),
            };
        }
    }

    /// Cursor moved to `cursor` (global coordinates). While dragging, returns
    /// the window origin to apply; the position is unconstrained and may lie
    /// off-screen.
    pub fn handle_cursor_move(&self, cursor: (f32, f32)) -> Option<(f32, f32)> {
        match self {
            DragState::Dragging { anchor } => Some((cursor.0 + anchor.0, cursor.1 + anchor.1)),
            DragState::Idle => None,
        }
    }

    /// Primary button released.
    pub fn handle_primary_up(&mut self) {
        *self = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    Normal,
    Maximized,
}

/// Maximize is never permitted; any attempt collapses back to normal.
pub fn corrected_mode(requested: WindowMode) -> WindowMode {
    match requested {
        WindowMode::Normal | WindowMode::Maximized => WindowMode::Normal,
    }
}

/// Window width and provisional height from the work-area height: the window
/// is 70% of the work area tall, and 60% of that height wide. The final
/// height is derived from the layout, see [`layout_for_width`].
pub fn window_size(work_area_height: f32) -> (f32, f32) {
    let height = work_area_height * 0.7;
    (height * 0.6, height)
}

pub fn centered_origin(screen: (f32, f32), size: (f32, f32)) -> (f32, f32) {
    ((screen.0 - size.0) / 2.0, (screen.1 - size.1) / 2.0)
}

/// Fixed content layout for a given window width. All rects are relative to
/// the window's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub display_origin: (f32, f32),
    pub display_side: f32,
    pub input_origin: (f32, f32),
    pub input_size: (f32, f32),
    /// Height the window must have for the input box to sit fully inside it.
    pub window_height: f32,
}

pub fn layout_for_width(width: f32) -> Layout {
    let display_side = width - CONTENT_PADDING;
    let display_origin = (CONTENT_PADDING / 2.0, TITLE_PADDING + CONTENT_PADDING);
    let input_top = display_origin.1 + display_side + CONTENT_PADDING;
    Layout {
        display_origin,
        display_side,
        input_origin: (CONTENT_PADDING / 2.0, input_top),
        input_size: (width - CONTENT_PADDING, INPUT_HEIGHT),
        window_height: input_top + INPUT_HEIGHT + TITLE_PADDING - 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_algebra_matches_anchor_offset() {
        let mut drag = DragState::Idle;
        drag.handle_primary_down((100.0, 100.0), (50.0, 50.0));
        assert!(drag.is_dragging());

        let origin = drag.handle_cursor_move((300.0, 400.0)).expect("dragging");
        assert_eq!(origin, (250.0, 350.0));
    }

    #[test]
    fn anchor_stays_constant_through_a_move_sequence() {
        let mut drag = DragState::Idle;
        drag.handle_primary_down((10.0, 20.0), (0.0, 0.0));

        assert_eq!(drag.handle_cursor_move((15.0, 25.0)), Some((5.0, 5.0)));
        assert_eq!(drag.handle_cursor_move((-40.0, 700.0)), Some((-50.0, 680.0)));
        // moves never re-anchor
        assert_eq!(drag.handle_cursor_move((10.0, 20.0)), Some((0.0, 0.0)));
    }

    #[test]
    fn release_returns_to_idle_and_moves_stop() {
        let mut drag = DragState::Idle;
        drag.handle_primary_down((5.0, 5.0), (0.0, 0.0));
        drag.handle_primary_up();

        assert!(!drag.is_dragging());
        assert_eq!(drag.handle_cursor_move((100.0, 100.0)), None);
    }

    #[test]
    fn second_press_keeps_the_active_drag() {
        let mut drag = DragState::Idle;
        drag.handle_primary_down((10.0, 10.0), (0.0, 0.0));
        drag.handle_primary_down((500.0, 500.0), (400.0, 400.0));

        // still anchored to the first press
        assert_eq!(drag.handle_cursor_move((20.0, 20.0)), Some((10.0, 10.0)));
    }

    #[test]
    fn moves_while_idle_do_nothing() {
        let drag = DragState::Idle;
        assert_eq!(drag.handle_cursor_move((100.0, 100.0)), None);
    }

    #[test]
    fn maximize_is_always_corrected_to_normal() {
        assert_eq!(corrected_mode(WindowMode::Maximized), WindowMode::Normal);
        assert_eq!(corrected_mode(WindowMode::Normal), WindowMode::Normal);
    }

    #[test]
    fn window_size_follows_work_area_height() {
        let (width, height) = window_size(1000.0);
        assert!((height - 700.0).abs() < 1e-3);
        assert!((width - 420.0).abs() < 1e-3);
    }

    #[test]
    fn centered_origin_splits_the_margins() {
        assert_eq!(
            centered_origin((1920.0, 1080.0), (420.0, 604.0)),
            (750.0, 238.0)
        );
    }

    #[test]
    fn layout_stacks_display_and_input_with_fixed_padding() {
        let layout = layout_for_width(420.0);
        assert_eq!(layout.display_origin, (25.0, 82.0));
        assert_eq!(layout.display_side, 370.0);
        assert_eq!(layout.input_origin, (25.0, 502.0));
        assert_eq!(layout.input_size, (370.0, 80.0));
        assert_eq!(layout.window_height, 604.0);
    }

    #[test]
    fn display_area_is_square_for_any_width() {
        for width in [300.0_f32, 420.0, 777.0] {
            let layout = layout_for_width(width);
            assert_eq!(layout.display_side, width - CONTENT_PADDING);
        }
    }
}
