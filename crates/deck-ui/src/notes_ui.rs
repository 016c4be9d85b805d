//! Presenter notes panel

use egui::*;
use deck_core::SlideNavigator;

/// Shows the presenter notes of the current slide
pub struct NotesPanel {
    max_height: f32,
}

impl Default for NotesPanel {
    fn default() -> Self {
        Self { max_height: 160.0 }
    }
}

impl NotesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ui(&self, ui: &mut Ui, navigator: &SlideNavigator) {
        let index = navigator.current_slide();
        let notes = navigator.slides().notes(index);

        ui.horizontal(|ui| {
            ui.label(RichText::new("📝 Speaker notes").strong());
            ui.label(RichText::new(navigator.slides().title(index)).weak());
        });
        ui.separator();

        ScrollArea::vertical()
            .id_source("notes_scroll")
            .max_height(self.max_height)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                if notes.is_empty() {
                    ui.label(RichText::new("No notes for this slide").weak().italics());
                } else {
                    ui.label(notes);
                }
            });
    }
}
