//! Ink on paper: the playground's black and white look.
//!
//! Only menus, the about window and the status line go through egui's
//! widget styling. The escaping button paints itself with the same two
//! colors and the same inversion on press.

use egui::{Color32, FontId, Rounding, Stroke, TextStyle, Visuals};

pub struct RyeColors;

impl RyeColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Label size for the menus, the status line and the escaping button.
pub const TEXT_SIZE: f32 = 14.0;

pub struct RyeTheme;

impl RyeTheme {
    pub fn apply(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        for text_style in [TextStyle::Body, TextStyle::Button] {
            style.text_styles.insert(text_style, FontId::proportional(TEXT_SIZE));
        }
        style.visuals = Self::visuals();
        ctx.set_style(style);
    }

    /// White surfaces with 1px black outlines. Pressed and open widgets
    /// invert, like the escaping button does while held.
    pub fn visuals() -> Visuals {
        let mut v = Visuals::light();
        v.panel_fill = RyeColors::WHITE;
        v.window_fill = RyeColors::WHITE;
        v.extreme_bg_color = RyeColors::WHITE;
        v.window_stroke = Stroke::new(1.0, RyeColors::BLACK);
        v.window_rounding = Rounding::ZERO;
        v.menu_rounding = Rounding::ZERO;
        v.window_shadow = egui::epaint::Shadow::NONE;
        v.popup_shadow = egui::epaint::Shadow::NONE;
        v.selection.bg_fill = RyeColors::BLACK;
        v.selection.stroke = Stroke::new(1.0, RyeColors::WHITE);

        let widgets = &mut v.widgets;
        for (state, inverted) in [
            (&mut widgets.noninteractive, false),
            (&mut widgets.inactive, false),
            (&mut widgets.hovered, false),
            (&mut widgets.active, true),
            (&mut widgets.open, true),
        ] {
            let (fill, ink) = if inverted {
                (RyeColors::BLACK, RyeColors::WHITE)
            } else {
                (RyeColors::WHITE, RyeColors::BLACK)
            };
            state.bg_fill = fill;
            state.weak_bg_fill = fill;
            state.fg_stroke = Stroke::new(1.0, ink);
            state.bg_stroke = Stroke::new(1.0, RyeColors::BLACK);
            state.rounding = Rounding::ZERO;
            state.expansion = 0.0;
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_widgets_invert() {
        let v = RyeTheme::visuals();
        assert_eq!(v.widgets.inactive.weak_bg_fill, RyeColors::WHITE);
        assert_eq!(v.widgets.inactive.fg_stroke.color, RyeColors::BLACK);
        assert_eq!(v.widgets.active.weak_bg_fill, RyeColors::BLACK);
        assert_eq!(v.widgets.active.fg_stroke.color, RyeColors::WHITE);
        assert_eq!(v.widgets.open.bg_fill, RyeColors::BLACK);
    }

    #[test]
    fn test_flat_surfaces() {
        let v = RyeTheme::visuals();
        assert_eq!(v.panel_fill, RyeColors::WHITE);
        assert_eq!(v.window_rounding, Rounding::ZERO);
        assert_eq!(v.widgets.hovered.rounding, Rounding::ZERO);
        assert_eq!(v.widgets.hovered.bg_stroke, Stroke::new(1.0, RyeColors::BLACK));
    }
}
