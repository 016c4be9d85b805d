use egui::{Context, TopBottomPanel, RichText, Grid};
use deck_core::{input::SHORTCUTS, SlideNavigator};

use crate::theme;

/// Shortcuts handled by the application shell rather than the navigator
pub const SHELL_SHORTCUTS: &[(&str, &str)] = &[
    ("F", "Toggle fullscreen"),
    ("N", "Toggle speaker notes"),
    ("F1 / H / ?", "Show this help"),
];

/// Render the status bar
///
/// Shows the live region's announcement, the text screen readers receive on
/// every slide change, plus the content warning count.
pub fn status_bar(ctx: &Context, navigator: &SlideNavigator, issue_count: usize) {
    TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let announcement = navigator
                .live_region()
                .map(|region| region.text())
                .unwrap_or_default();
            ui.label(RichText::new(announcement).small());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new("F1 for shortcuts").small().weak());
                if issue_count > 0 {
                    ui.separator();
                    ui.label(
                        RichText::new(format!("⚠ {} content warning(s)", issue_count))
                            .small()
                            .color(theme::warning_color()),
                    )
                    .on_hover_text("See the log for details");
                }
            });
        });
    });
}

/// Keyboard shortcut help window
pub fn shortcuts_window(ctx: &Context, open: &mut bool) {
    egui::Window::new("Keyboard shortcuts")
        .open(open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            Grid::new("shortcuts_grid")
                .num_columns(2)
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for (keys, action) in SHORTCUTS.iter().chain(SHELL_SHORTCUTS) {
                        ui.label(RichText::new(*keys).strong());
                        ui.label(*action);
                        ui.end_row();
                    }
                });
            ui.add_space(6.0);
            ui.label(RichText::new("Swipe left or right on a touch screen to change slides").weak());
        });
}
