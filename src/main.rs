use eframe::egui;
use qrpad::gui::{QrPadApp, WINDOW_TITLE};
use qrpad::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    // Placeholder size until the first frame reads the monitor metrics and
    // resizes to 70% of the work-area height.
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_decorations(false)
            .with_resizable(false)
            .with_always_on_top()
            .with_inner_size([420.0, 604.0]),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(|cc| Box::new(QrPadApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))?;
    Ok(())
}
