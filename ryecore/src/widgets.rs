//! Render surface pieces: the runaway button and the status line.

use crate::error::Unready;
use crate::geometry::{Point, Viewport};
use crate::theme::{RyeColors, TEXT_SIZE};
use egui::{Rect, Response, Sense, Ui};

const BUTTON_PADDING: egui::Vec2 = egui::vec2(16.0, 6.0);

/// Screen rectangle of a button whose top-left corner sits at the
/// surface-local offset `at`.
pub fn button_rect(surface: Rect, at: Point, size: egui::Vec2) -> Rect {
    Rect::from_min_size(surface.min + egui::Vec2::from(at), size)
}

/// Draw the escaping button at `at` inside `surface`.
///
/// The button is painted with absolute placement, it takes no part in the
/// surrounding layout. White fill and 1px outline, inverted while pressed.
pub fn escaping_button(ui: &mut Ui, surface: Rect, at: Point, label: &str) -> Response {
    let font = egui::FontId::proportional(TEXT_SIZE);
    let text_size = ui
        .fonts(|f| f.layout_no_wrap(label.to_owned(), font.clone(), RyeColors::BLACK))
        .size();
    let rect = button_rect(surface, at, text_size + BUTTON_PADDING * 2.0);
    let response = ui.interact(rect, ui.id().with("escaping_button"), Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(surface);
        let pressed = response.is_pointer_button_down_on();
        let (fill, ink) = if pressed {
            (RyeColors::BLACK, RyeColors::WHITE)
        } else {
            (RyeColors::WHITE, RyeColors::BLACK)
        };
        painter.rect_filled(rect, 0.0, fill);
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, RyeColors::BLACK));
        if response.hovered() && !pressed {
            painter.rect_stroke(rect.shrink(2.0), 0.0, egui::Stroke::new(1.0, RyeColors::BLACK));
        }
        painter.text(rect.center(), egui::Align2::CENTER_CENTER, label, font, ink);
    }

    response
}

/// Status bar: white bg, 1px black top border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(RyeColors::WHITE)
        .stroke(egui::Stroke::new(1.0, RyeColors::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}

/// One-line summary of the playground state for the status bar.
///
/// `waiting` names the input the escape pipeline is still waiting for.
pub fn status_text(
    viewport: Option<Viewport>,
    pointer: Option<Point>,
    waiting: Option<Unready>,
    escapes: u64,
    caught: u32,
) -> String {
    let vp = match viewport {
        Some(v) if v.is_measured() => format!("{:.0}×{:.0}", v.width, v.height),
        _ => "unmeasured".to_string(),
    };
    let ptr = match pointer {
        Some(p) => format!("{:.0}, {:.0}", p.x, p.y),
        None => "-".to_string(),
    };
    let mut line = format!("viewport {}  |  pointer {}  |  {} escapes  |  caught {}", vp, ptr, escapes, caught);
    match waiting {
        Some(Unready::Pointer) => line.push_str("  |  waiting for pointer"),
        Some(Unready::Viewport) => line.push_str("  |  waiting for viewport"),
        None => {}
    }
    line
}
