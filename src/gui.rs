use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

use crate::chrome::{self, DragState, WindowMode};
use crate::export;
use crate::overlay::OverlayIcon;
use crate::pipeline::{PipelineOutcome, QrSession};

pub const WINDOW_TITLE: &str = "QRCode Generator";
const DEFAULT_GREETING: &str = "Hello, I am lalakii";

const ACCENT_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 105, 180);
const CLOSE_HOVER_COLOR: egui::Color32 = egui::Color32::from_rgb(205, 92, 92);
const TOAST_DURATION: f64 = 3.0;

pub struct QrPadApp {
    session: QrSession,
    input: String,
    texture: Option<egui::TextureHandle>,
    drag: DragState,
    toasts: Toasts,
    /// Window has been sized and centered from the monitor metrics.
    sized: bool,
    /// A synthetic text-change is queued (startup greeting, icon change).
    pending_encode: bool,
    /// Side length of the last encode attempt, to re-encode after the
    /// window reaches its final size.
    last_side: Option<u32>,
}

impl QrPadApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self {
            session: QrSession::new(),
            input: DEFAULT_GREETING.to_owned(),
            texture: None,
            drag: DragState::Idle,
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
            sized: false,
            pending_encode: true,
            last_side: None,
        }
    }

    fn add_success_toast(&mut self, text: String) {
        self.toasts.add(Toast {
            text: text.into(),
            kind: ToastKind::Success,
            options: ToastOptions::default().duration_in_seconds(TOAST_DURATION),
        });
    }

    /// Blocking user-facing notice for recoverable failures.
    fn report_error(message: &str) {
        tracing::warn!(%message, "reporting error");
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(WINDOW_TITLE)
            .set_description(message)
            .show();
    }

    fn enforce_window_rules(&mut self, ctx: &egui::Context) {
        let reported = if ctx.input(|i| i.viewport().maximized.unwrap_or(false)) {
            WindowMode::Maximized
        } else {
            WindowMode::Normal
        };
        if chrome::corrected_mode(reported) != reported {
            ctx.send_viewport_cmd(egui::ViewportCommand::Maximized(false));
        }

        if self.sized {
            return;
        }
        if let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) {
            if monitor.x > 0.0 && monitor.y > 0.0 {
                let (width, _) = chrome::window_size(monitor.y);
                let height = chrome::layout_for_width(width).window_height;
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(width, height)));
                let origin = chrome::centered_origin((monitor.x, monitor.y), (width, height));
                ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
                    origin.0, origin.1,
                )));
                self.sized = true;
            }
        }
    }

    /// Background presses move the window; interactive widgets are added
    /// after this surface and take pointer priority over it.
    fn handle_window_drag(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let response = ui.interact(
            ui.max_rect(),
            egui::Id::new("chrome_drag_surface"),
            egui::Sense::click_and_drag(),
        );

        let origin = ctx.input(|i| i.viewport().outer_rect).map(|r| r.min);
        let pointer = ctx.input(|i| i.pointer.latest_pos());
        if let (Some(origin), Some(pointer)) = (origin, pointer) {
            let cursor = (origin.x + pointer.x, origin.y + pointer.y);
            if response.drag_started_by(egui::PointerButton::Primary) {
                self.drag.handle_primary_down(cursor, (origin.x, origin.y));
            } else if response.dragged_by(egui::PointerButton::Primary) {
                if let Some(new_origin) = self.drag.handle_cursor_move(cursor) {
                    ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
                        new_origin.0,
                        new_origin.1,
                    )));
                }
            }
        }
        if response.drag_stopped_by(egui::PointerButton::Primary) {
            self.drag.handle_primary_up();
        }
    }

    fn paint_chrome(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        let painter = ui.painter();

        painter.line_segment(
            [rect.left_top(), rect.right_top()],
            egui::Stroke::new(chrome::ACCENT_LINE_WIDTH, ACCENT_COLOR),
        );
        painter.rect_stroke(
            rect.shrink(0.5),
            0.0,
            egui::Stroke::new(1.0, egui::Color32::from_black_alpha(55)),
        );
        painter.text(
            rect.left_top() + egui::vec2(chrome::TITLE_INSET_X, chrome::TITLE_PADDING),
            egui::Align2::LEFT_TOP,
            WINDOW_TITLE,
            egui::FontId::proportional(chrome::TITLE_FONT_SIZE),
            egui::Color32::BLACK,
        );

        let close_rect = egui::Rect::from_min_size(
            egui::pos2(
                rect.right() - chrome::CLOSE_SIDE - chrome::CLOSE_RIGHT_MARGIN,
                rect.top() + chrome::CLOSE_TOP,
            ),
            egui::Vec2::splat(chrome::CLOSE_SIDE),
        );
        let response = ui.interact(
            close_rect,
            egui::Id::new("chrome_close"),
            egui::Sense::click(),
        );
        let glyph_color = if response.hovered() {
            CLOSE_HOVER_COLOR
        } else {
            egui::Color32::BLACK
        };
        ui.painter().text(
            close_rect.center(),
            egui::Align2::CENTER_CENTER,
            "×",
            egui::FontId::proportional(chrome::CLOSE_FONT_SIZE),
            glyph_color,
        );
        if response.clicked() {
            tracing::info!("close glyph activated");
            ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false));
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn show_content(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        let layout = chrome::layout_for_width(rect.width());

        let display_rect = egui::Rect::from_min_size(
            rect.left_top() + egui::vec2(layout.display_origin.0, layout.display_origin.1),
            egui::Vec2::splat(layout.display_side),
        );
        let display_response = match &self.texture {
            Some(texture) => ui.put(
                display_rect,
                egui::Image::new(texture)
                    .fit_to_exact_size(display_rect.size())
                    .sense(egui::Sense::click()),
            ),
            None => ui.interact(
                display_rect,
                egui::Id::new("qr_display"),
                egui::Sense::click(),
            ),
        };
        display_response.context_menu(|ui| self.display_context_menu(ui));

        let input_rect = egui::Rect::from_min_size(
            rect.left_top() + egui::vec2(layout.input_origin.0, layout.input_origin.1),
            egui::vec2(layout.input_size.0, layout.input_size.1),
        );
        let input_response = ui.put(input_rect, egui::TextEdit::multiline(&mut self.input));

        let side = rect.width() as u32;
        let needs_encode = input_response.changed()
            || self.pending_encode
            || (self.session.displayed().is_some() && self.last_side != Some(side));
        if needs_encode && side > 0 {
            self.pending_encode = false;
            self.run_pipeline(ctx, side);
        }
    }

    fn display_context_menu(&mut self, ui: &mut egui::Ui) {
        if ui.button("Copy").clicked() {
            ui.close_menu();
            self.copy_displayed();
        }
        if ui.button("Change Icon").clicked() {
            ui.close_menu();
            self.change_icon();
        }
        if ui.button("Save").clicked() {
            ui.close_menu();
            self.save_displayed();
        }
    }

    fn run_pipeline(&mut self, ctx: &egui::Context, target_side: u32) {
        self.last_side = Some(target_side);
        match self.session.handle_text_change(&self.input, target_side) {
            Ok(PipelineOutcome::Updated) => self.refresh_texture(ctx),
            Ok(PipelineOutcome::Ignored) => {}
            Err(e) => Self::report_error(&e.to_string()),
        }
    }

    fn refresh_texture(&mut self, ctx: &egui::Context) {
        if let Some(img) = self.session.displayed() {
            let size = [img.width() as usize, img.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
            self.texture = Some(ctx.load_texture("qr", color_image, egui::TextureOptions::NEAREST));
        }
    }

    fn copy_displayed(&mut self) {
        let Some(img) = self.session.displayed() else {
            return;
        };
        let copied = export::copy_to_clipboard(img);
        match copied {
            Ok(()) => self.add_success_toast("Copied QR code to clipboard".to_owned()),
            Err(e) => {
                tracing::error!(error = %e, "clipboard copy failed");
                Self::report_error(&format!("{e:#}"));
            }
        }
    }

    fn change_icon(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Image file", &["jpg", "jpeg", "png"])
            .pick_file()
        else {
            return;
        };
        match OverlayIcon::load(&path) {
            Ok(icon) => {
                tracing::info!(path = %path.display(), "overlay icon replaced");
                self.session.set_icon(icon);
                // synthetic text change so the new overlay shows up without
                // retyping
                self.pending_encode = true;
            }
            Err(e) => Self::report_error(&e.to_string()),
        }
    }

    fn save_displayed(&mut self) {
        let Some(img) = self.session.displayed() else {
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_directory(export::default_save_dir())
            .set_file_name(export::DEFAULT_SAVE_NAME)
            .save_file()
        else {
            return;
        };
        let saved = export::save_png(img, &path);
        match saved {
            Ok(()) => self.add_success_toast(format!("Saved {}", path.display())),
            Err(e) => {
                tracing::error!(error = %e, "save failed");
                Self::report_error(&format!("{e:#}"));
            }
        }
    }
}

impl eframe::App for QrPadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.enforce_window_rules(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                self.handle_window_drag(ctx, ui);
                self.paint_chrome(ctx, ui);
                self.show_content(ctx, ui);
            });

        self.toasts.show(ctx);
    }
}
