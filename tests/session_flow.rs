use image::{Rgba, RgbaImage};
use qrpad::export;
use qrpad::overlay::{OverlayIcon, FOOTPRINT_SIDE};
use qrpad::pipeline::{PipelineOutcome, QrSession};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

#[test]
fn clearing_the_input_keeps_the_last_encode_on_screen() {
    let mut session = QrSession::new();
    session.handle_text_change("hello there", 300).expect("encode");
    let before = session.displayed().expect("displayed").clone();

    for cleared in ["", "   ", "\n\t"] {
        assert_eq!(
            session.handle_text_change(cleared, 300).expect("pipeline"),
            PipelineOutcome::Ignored
        );
    }
    assert_eq!(session.displayed().expect("displayed").as_raw(), before.as_raw());
}

#[test]
fn solid_icon_becomes_a_centered_footprint_block() {
    let mut session = QrSession::new();
    session.set_icon(OverlayIcon::new(RgbaImage::from_pixel(200, 200, RED)));
    session.handle_text_change("HELLO", 240).expect("encode");

    let img = session.displayed().expect("displayed");
    let offset = (240 - FOOTPRINT_SIDE) / 2;
    for (x, y) in [
        (offset, offset),
        (offset + FOOTPRINT_SIDE - 1, offset + FOOTPRINT_SIDE - 1),
        (120, 120),
    ] {
        assert_eq!(*img.get_pixel(x, y), RED);
    }
    // outside the footprint the symbol is untouched black-and-white
    let corner = *img.get_pixel(0, 0);
    assert!(corner == Rgba([0, 0, 0, 255]) || corner == Rgba([255, 255, 255, 255]));
}

#[test]
fn icon_replacement_reaches_the_display_without_new_text() {
    let mut session = QrSession::new();
    session.handle_text_change("HELLO", 240).expect("encode");
    let plain = session.displayed().expect("displayed").clone();

    session.set_icon(OverlayIcon::new(RgbaImage::from_pixel(64, 64, RED)));
    // the controller re-runs the pipeline with the unchanged input text
    session.handle_text_change("HELLO", 240).expect("encode");

    let stamped = session.displayed().expect("displayed");
    assert_ne!(stamped.as_raw(), plain.as_raw());
    assert_eq!(*stamped.get_pixel(120, 120), RED);
}

#[test]
fn displayed_bitmap_saves_as_a_loadable_png() {
    let mut session = QrSession::new();
    session.handle_text_change("save me", 240).expect("encode");

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(export::DEFAULT_SAVE_NAME);
    export::save_png(session.displayed().expect("displayed"), &path).expect("save");

    let loaded = image::open(&path).expect("open").to_rgba8();
    assert_eq!(
        loaded.as_raw(),
        session.displayed().expect("displayed").as_raw()
    );
}

#[test]
fn capacity_overflow_reports_an_error_and_keeps_the_display() {
    let mut session = QrSession::new();
    session.handle_text_change("short", 240).expect("encode");
    let before = session.displayed().expect("displayed").clone();

    let err = session
        .handle_text_change(&"x".repeat(3000), 240)
        .expect_err("overflow");
    assert!(!err.to_string().is_empty());
    assert_eq!(session.displayed().expect("displayed").as_raw(), before.as_raw());
}
