use egui::{Context, Visuals, Style, Color32, Rounding, Stroke, FontId, FontFamily, TextStyle};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Theme {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            name: if dark_mode { "Deck Dark" } else { "Deck Light" }.to_string(),
            dark_mode,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Apply the presentation theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    let accent = accent_color();
    let widget_rounding = Rounding::same(6.0);

    if theme.dark_mode {
        visuals.panel_fill = Color32::from_rgb(18, 24, 33);
        visuals.window_fill = Color32::from_rgb(24, 31, 42);
        visuals.extreme_bg_color = Color32::from_rgb(12, 16, 22);
    } else {
        visuals.panel_fill = Color32::from_rgb(248, 250, 252);
        visuals.window_fill = Color32::WHITE;
        visuals.extreme_bg_color = Color32::WHITE;
    }

    for widgets in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widgets.rounding = widget_rounding;
    }
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);

    // Selection and highlighting
    visuals.selection.bg_fill = accent.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent);
    visuals.hyperlink_color = accent;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    // Font sizes
    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(12.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(16.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(15.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace));

    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Brand blue used for titles, active dots and focus strokes
pub fn accent_color() -> Color32 {
    Color32::from_rgb(10, 77, 140)
}

/// Slide title color, readable on either palette
pub fn title_color(visuals: &Visuals) -> Color32 {
    if visuals.dark_mode {
        Color32::from_rgb(120, 170, 230)
    } else {
        accent_color()
    }
}

/// Inactive progress dot color
pub fn muted_accent_color() -> Color32 {
    Color32::from_rgba_unmultiplied(10, 77, 140, 77)
}

/// Get the warning color for the theme
pub fn warning_color() -> Color32 {
    Color32::from_rgb(230, 180, 80)
}
