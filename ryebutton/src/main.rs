//! ryebutton - a button that will not let itself be clicked
//!
//! Move the pointer near the button and it jumps away.

mod app;

use app::RyeButtonApp;
use eframe::NativeOptions;
use ryecore::{PlaygroundSettings, RyeTheme};

fn main() -> eframe::Result<()> {
    let settings = PlaygroundSettings::load_or_default();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_title("ryebutton"),
        ..Default::default()
    };

    eframe::run_native(
        "ryebutton",
        options,
        Box::new(move |cc| {
            RyeTheme::apply(&cc.egui_ctx);
            Box::new(RyeButtonApp::new(cc, settings))
        }),
    )
}
