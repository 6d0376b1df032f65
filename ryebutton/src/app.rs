//! ryebutton application

use egui::{Context, Key, Pos2, Rect, Sense};
use ryecore::repaint::RepaintController;
use ryecore::theme::RyeColors;
use ryecore::widgets::{escaping_button, status_bar, status_text};
use ryecore::{EscapeError, Escaper, Feed, Outcome, PlaygroundSettings, Point, Viewport};
use std::time::Duration;

pub struct RyeButtonApp {
    settings: PlaygroundSettings,
    pointer_feed: Feed<Point>,
    viewport_feed: Feed<Viewport>,
    /// Present while the playground is on screen
    playground: Option<Escaper>,
    caught: u32,
    show_about: bool,
    repaint: RepaintController,
}

impl RyeButtonApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: PlaygroundSettings) -> Self {
        let interval = Duration::from_millis(settings.tick_interval_ms);
        let mut app = Self {
            settings,
            pointer_feed: Feed::new(),
            viewport_feed: Feed::new(),
            playground: None,
            caught: 0,
            show_about: false,
            repaint: RepaintController::with_interval(interval),
        };
        app.mount();
        app
    }

    fn mount(&mut self) {
        if self.playground.is_some() {
            return;
        }
        self.playground = Some(Escaper::mount(
            self.settings.escape,
            self.settings.start,
            &self.pointer_feed,
            &self.viewport_feed,
        ));
        eprintln!("[ryebutton] playground mounted");
    }

    fn unmount(&mut self) {
        if self.playground.take().is_some() {
            eprintln!("[ryebutton] playground unmounted");
        }
    }

    fn toggle_playground(&mut self) {
        if self.playground.is_some() {
            self.unmount();
        } else {
            self.mount();
        }
    }

    fn reset_button(&mut self) {
        if let Some(esc) = &mut self.playground {
            esc.place(self.settings.start);
        }
    }

    fn save_settings(&self) {
        let path = PlaygroundSettings::config_path();
        if let Err(e) = self.settings.save(&path) {
            eprintln!("[ryebutton] failed to save {}: {}", path.display(), e);
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let (toggle, reset) = ctx.input(|i| (i.key_pressed(Key::P), i.key_pressed(Key::R)));
        if toggle {
            self.toggle_playground();
        }
        if reset {
            self.reset_button();
        }
    }

    /// Feed the providers from this frame's input and run the pipeline.
    fn render_playground(&mut self, ui: &mut egui::Ui, surface: Rect) {
        let Some(esc) = self.playground.as_mut() else {
            ui.painter().text(
                surface.center(),
                egui::Align2::CENTER_CENTER,
                "playground hidden  (view > show playground)",
                egui::FontId::proportional(14.0),
                RyeColors::BLACK,
            );
            return;
        };

        self.viewport_feed.publish(Viewport::from(surface.size()));
        if let Some(pos) = ui.ctx().input(|i| i.pointer.hover_pos()) {
            if surface.contains(pos) {
                self.pointer_feed.publish(surface_local(surface, pos));
            }
        }

        if let Outcome::Moved { .. } = esc.evaluate() {
            self.repaint.mark_needs_repaint();
        }

        let response = escaping_button(ui, surface, esc.button(), &self.settings.label);
        if response.clicked() {
            self.caught += 1;
        }
    }
}

fn surface_local(surface: Rect, pos: Pos2) -> Point {
    Point::from(pos - surface.min)
}

impl eframe::App for RyeButtonApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("file", |ui| {
                    if ui.button("save settings").clicked() {
                        self.save_settings();
                        ui.close_menu();
                    }
                    if ui.button("quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        ui.close_menu();
                    }
                });
                ui.menu_button("view", |ui| {
                    let label = if self.playground.is_some() {
                        "* show playground   P"
                    } else {
                        "  show playground   P"
                    };
                    if ui.button(label).clicked() {
                        self.toggle_playground();
                        ui.close_menu();
                    }
                    if ui.button("  reset button      R").clicked() {
                        self.reset_button();
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let mut text = match &self.playground {
                Some(esc) => {
                    let waiting = match esc.readiness() {
                        Err(EscapeError::NotReady(what)) => Some(what),
                        _ => None,
                    };
                    status_text(esc.viewport(), esc.pointer(), waiting, esc.escapes(), self.caught)
                }
                None => status_text(None, None, None, 0, self.caught),
            };
            if self.settings.show_frame_reason {
                text.push_str("  |  frame: ");
                text.push_str(self.repaint.reason().label());
            }
            status_bar(ui, &text);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(RyeColors::WHITE))
            .show(ctx, |ui| {
                let surface = ui.available_rect_before_wrap();
                ui.allocate_rect(surface, Sense::hover());
                self.render_playground(ui, surface);
            });

        if self.show_about {
            egui::Window::new("about ryebutton")
                .collapsible(false)
                .resizable(false)
                .default_width(280.0)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("ryebutton");
                        ui.label(concat!("version ", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        ui.label("try to click the button.");
                    });
                    ui.add_space(8.0);
                    ui.separator();
                    let escape = &self.settings.escape;
                    ui.label(format!("runs when closer than {:.0}px", escape.threshold_distance));
                    ui.label(format!("jumps {:.0}px at a time", escape.escape_distance));
                    ui.label(format!("keeps {:.0}px from the edges", escape.margin));
                    ui.add_space(4.0);
                    ui.label("keys:  P playground   R reset");
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("ok").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }

        self.repaint.set_ticking(self.playground.is_some());
        self.repaint.end_frame(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_local() {
        let surface = Rect::from_min_size(egui::pos2(0.0, 26.0), egui::vec2(960.0, 660.0));
        assert_eq!(surface_local(surface, egui::pos2(100.0, 126.0)), Point::new(100.0, 100.0));
    }
}
