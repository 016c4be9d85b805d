//! Draws the active slide

use deck_core::{Block, Slide, SlideNavigator};
use egui::{Color32, RichText, Ui};

use crate::theme;

/// Slide view configuration
#[derive(Debug, Clone)]
pub struct SlideViewConfig {
    pub title_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
    pub max_width: f32,
}

impl Default for SlideViewConfig {
    fn default() -> Self {
        Self {
            title_size: 36.0,
            heading_size: 24.0,
            body_size: 19.0,
            max_width: 960.0,
        }
    }
}

/// Renders exactly one slide: the navigator's current one
#[derive(Default)]
pub struct SlideView {
    config: SlideViewConfig,
}

impl SlideView {
    pub fn new(config: SlideViewConfig) -> Self {
        Self { config }
    }

    pub fn ui(&self, ui: &mut Ui, navigator: &SlideNavigator) {
        let context = navigator.context();
        let index = context.position.index();
        let Some(slide) = navigator.slides().get(index) else {
            return;
        };

        egui::ScrollArea::vertical()
            .id_source("slide_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(self.config.max_width);
                    ui.add_space(32.0);
                    self.draw_slide(ui, slide, &context.title);
                });
            });
    }

    fn draw_slide(&self, ui: &mut Ui, slide: &Slide, title: &str) {
        let title_color = theme::title_color(ui.visuals());
        ui.label(
            RichText::new(title)
                .size(self.config.title_size)
                .strong()
                .color(title_color),
        );
        ui.add_space(24.0);

        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
            for block in &slide.blocks {
                self.draw_block(ui, block);
                ui.add_space(12.0);
            }
        });
    }

    fn draw_block(&self, ui: &mut Ui, block: &Block) {
        match block {
            Block::Heading(text) => {
                ui.label(RichText::new(text).size(self.config.heading_size).strong());
            }
            Block::Text(text) => {
                ui.label(RichText::new(text).size(self.config.body_size));
            }
            Block::Bullets(items) => {
                let bullet_color = theme::title_color(ui.visuals());
                for item in items {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new("•").size(self.config.body_size).color(bullet_color));
                        ui.label(RichText::new(item).size(self.config.body_size));
                    });
                }
            }
            Block::Image { source, alt } => {
                // Images are shown by their description; the source is a hover hint
                let caption = alt.as_deref().filter(|alt| !alt.trim().is_empty());
                egui::Frame::none()
                    .stroke(egui::Stroke::new(1.0, Color32::from_gray(160)))
                    .rounding(6.0)
                    .inner_margin(16.0)
                    .show(ui, |ui| {
                        let text = match caption {
                            Some(alt) => RichText::new(format!("🖼 {}", alt)),
                            None => RichText::new("🖼 Image without description")
                                .color(theme::warning_color()),
                        };
                        ui.label(text.size(self.config.body_size));
                    })
                    .response
                    .on_hover_text(source.as_str());
            }
        }
    }
}
