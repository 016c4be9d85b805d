//! Navigation bar: previous/next buttons, slide counter and progress dots

use egui::{Ui, Sense, Color32, Vec2, RichText};
use deck_core::{Control, PointerAdapter, SlideNavigator};
use std::sync::Arc;

use crate::{icons, theme};

/// Navigation panel widget
pub struct NavigationPanel {
    /// Navigator, read for the counter and dot count
    navigation: Arc<SlideNavigator>,

    /// Pointer adapter the buttons and dots go through
    pointer: Arc<PointerAdapter>,

    /// Panel configuration
    config: NavigationPanelConfig,
}

/// Navigation panel configuration
#[derive(Debug, Clone)]
pub struct NavigationPanelConfig {
    /// Show one dot per slide
    pub show_progress_dots: bool,

    /// Button size
    pub button_size: Vec2,

    /// Dot diameter
    pub dot_size: f32,

    /// Color of the current slide's dot
    pub active_dot_color: Color32,

    /// Color of the other dots
    pub dot_color: Color32,
}

impl Default for NavigationPanelConfig {
    fn default() -> Self {
        Self {
            show_progress_dots: false,
            button_size: Vec2::new(120.0, 36.0),
            dot_size: 12.0,
            active_dot_color: theme::accent_color(),
            dot_color: theme::muted_accent_color(),
        }
    }
}

impl NavigationPanel {
    /// Create a new navigation panel
    pub fn new(navigation: Arc<SlideNavigator>, pointer: Arc<PointerAdapter>) -> Self {
        Self {
            navigation,
            pointer,
            config: NavigationPanelConfig::default(),
        }
    }

    /// Set configuration
    pub fn with_config(mut self, config: NavigationPanelConfig) -> Self {
        self.config = config;
        self
    }

    /// Show the navigation panel UI
    pub fn ui(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                // Center the button row
                let row_width = self.config.button_size.x * 2.0 + 120.0;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                self.show_controls(ui);
            });

            if self.config.show_progress_dots {
                ui.add_space(6.0);
                self.show_progress_dots(ui);
            }
        });
    }

    /// Previous button, counter, next button
    fn show_controls(&mut self, ui: &mut Ui) {
        let controls = self.pointer.controls();

        let previous = ui.add_enabled(
            controls.previous_enabled,
            egui::Button::new(RichText::new(format!("{} Previous", icons::PREVIOUS)))
                .min_size(self.config.button_size),
        );
        if previous.on_hover_text("Previous slide (Left Arrow)").clicked() {
            self.pointer.activate(Control::Previous);
        }

        let counter = self.navigation.context().counter;
        ui.add_sized(
            [120.0, self.config.button_size.y],
            egui::Label::new(RichText::new(counter).strong()),
        );

        let next = ui.add_enabled(
            controls.next_enabled,
            egui::Button::new(RichText::new(format!("Next {}", icons::NEXT)))
                .min_size(self.config.button_size),
        );
        if next.on_hover_text("Next slide (Right Arrow)").clicked() {
            self.pointer.activate(Control::Next);
        }
    }

    /// One dot per slide; clicking a dot jumps to that slide
    fn show_progress_dots(&mut self, ui: &mut Ui) {
        let context = self.navigation.context();
        let spacing = 8.0;
        let total = context.total_slides;
        let row_width = total as f32 * (self.config.dot_size + spacing) - spacing;

        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
            ui.spacing_mut().item_spacing.x = spacing;

            for index in 0..total {
                let (rect, response) = ui.allocate_exact_size(
                    Vec2::splat(self.config.dot_size),
                    Sense::click(),
                );

                let color = if context.is_visible(index) {
                    self.config.active_dot_color
                } else if response.hovered() {
                    self.config.active_dot_color.linear_multiply(0.6)
                } else {
                    self.config.dot_color
                };
                ui.painter().circle_filled(rect.center(), self.config.dot_size / 2.0, color);

                let title = self.navigation.slides().title(index);
                if response.on_hover_text(title).clicked() {
                    self.pointer.activate_dot(index);
                }
            }
        });
    }
}
