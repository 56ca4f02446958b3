//! fourier-epicycles - Fourier series drawing machine
//!
//! Draw a closed curve with the mouse; on release the curve is decomposed
//! with a truncated discrete Fourier transform and redrawn by a chain of
//! rotating circles (epicycles), largest first. The animation loops until
//! the next drawing starts.

use eframe::egui;

mod animation;
mod capture;
mod fourier;
mod render;
mod session;
mod settings;

use animation::AnimationConfig;
use fourier::Point;
use render::{DisplaySettings, PainterCanvas};
use session::{DrawingSession, Surface, DURATION_RANGE, PRECISION_RANGE};
use settings::{AppSettings, SaveGate};

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting fourier-epicycles");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_title("Fourier epicycles"),
        ..Default::default()
    };

    eframe::run_native(
        "fourier-epicycles",
        options,
        Box::new(|cc| Ok(Box::new(EpicycleApp::new(cc)))),
    )
}

/// Main application state
struct EpicycleApp {
    session: DrawingSession,
    display: DisplaySettings,
    settings: AppSettings,
    save_gate: SaveGate,
}

impl EpicycleApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = AppSettings::load();

        let config = AnimationConfig {
            duration_secs: settings.duration_secs,
        };
        let mut session = DrawingSession::new(Surface::new(0.0, 0.0), settings.precision, config);
        session.duration_changed(settings.duration_secs);
        session.show_samples_while_animating = settings.show_samples_while_animating;

        let display = DisplaySettings {
            line_width: settings.line_width,
            ..Default::default()
        };

        Self {
            session,
            display,
            settings,
            save_gate: SaveGate::default(),
        }
    }

    /// Copy live values into the persisted settings and write them out
    fn store_settings(&mut self) {
        self.settings.precision = self.session.precision();
        self.settings.duration_secs = self.session.duration();
        self.settings.line_width = self.display.line_width;
        self.settings.show_samples_while_animating = self.session.show_samples_while_animating;
        self.settings.save();
    }

    fn settings_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Epicycles");
        ui.separator();

        let mut changed = false;

        let mut precision = self.session.precision();
        if ui
            .add(egui::Slider::new(&mut precision, PRECISION_RANGE).text("Precision"))
            .on_hover_text("Number of circles used for the next drawing")
            .changed()
        {
            self.session.precision_changed(precision as i64);
            changed = true;
        }

        let mut duration = self.session.duration();
        if ui
            .add(egui::Slider::new(&mut duration, DURATION_RANGE).text("Cycle (s)"))
            .changed()
        {
            self.session.duration_changed(duration);
            changed = true;
        }

        ui.separator();

        ui.collapsing("Display", |ui| {
            if ui
                .add(egui::Slider::new(&mut self.display.line_width, 0.5..=4.0).text("Line width"))
                .changed()
            {
                changed = true;
            }
            if ui
                .checkbox(
                    &mut self.session.show_samples_while_animating,
                    "Show samples while animating",
                )
                .changed()
            {
                changed = true;
            }
        });

        ui.separator();

        ui.collapsing("Components", |ui| self.components_table(ui));

        ui.separator();

        if ui.button("Clear").clicked() {
            self.session.clear();
        }

        if changed {
            self.save_gate.mark();
        }
    }

    /// Largest components of the running animation
    fn components_table(&self, ui: &mut egui::Ui) {
        const MAX_ROWS: usize = 16;

        let components = self.session.components();
        if components.is_empty() {
            ui.label("Nothing animating");
            return;
        }

        egui::Grid::new("components_grid")
            .striped(true)
            .show(ui, |ui| {
                ui.strong("k");
                ui.strong("amp");
                ui.strong("phase");
                ui.strong("re");
                ui.strong("im");
                ui.end_row();

                for c in components.iter().take(MAX_ROWS) {
                    ui.monospace(c.frequency.to_string());
                    ui.monospace(format!("{:.2}", c.amplitude));
                    ui.monospace(format!("{:+.3}", c.phase));
                    ui.monospace(format!("{:+.2}", c.re));
                    ui.monospace(format!("{:+.2}", c.im));
                    ui.end_row();
                }
            });

        if components.len() > MAX_ROWS {
            ui.small(format!("... {} more", components.len() - MAX_ROWS));
        }
    }

    /// Feed pointer input from the drawing surface into the session
    fn handle_pointer(&mut self, ctx: &egui::Context, response: &egui::Response, now: f64) {
        let (pressed, released, moving, pos) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.is_moving(),
                i.pointer.latest_pos(),
            )
        });
        let to_surface = |p: egui::Pos2| {
            let local = p - response.rect.min;
            Point::new(local.x as f64, local.y as f64)
        };

        if pressed && response.hovered() {
            self.session.pointer_down();
        }

        if moving {
            if let Some(p) = pos {
                self.session.pointer_move(to_surface(p));
            }
        }

        if released {
            self.session.pointer_up(now);
        }
    }
}

impl eframe::App for EpicycleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("fourier-epicycles");
                ui.separator();
                if ui
                    .toggle_value(&mut self.settings.show_settings, "⚙ Settings")
                    .changed()
                {
                    self.save_gate.mark();
                }
                ui.separator();
                ui.label(self.session.status().to_string());
            });
        });

        if self.settings.show_settings {
            egui::SidePanel::left("settings_panel")
                .min_width(220.0)
                .show(ctx, |ui| self.settings_panel(ui));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                let rect = response.rect;

                self.session
                    .viewport_resized(rect.width() as f64, rect.height() as f64);
                self.handle_pointer(ctx, &response, now);

                let mut canvas = PainterCanvas::new(&painter, rect, &self.display);
                self.session.frame(&mut canvas, now);
            });

        let pointer_down = ctx.input(|i| i.pointer.any_down());
        if self.save_gate.ready(pointer_down) {
            self.store_settings();
        }

        if self.session.needs_repaint() {
            ctx.request_repaint();
        }
    }
}
