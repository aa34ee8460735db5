use crate::state::LauncherState;
use eframe::egui;
use std::path::Path;

/// Something the user asked for from the toolbar strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarAction {
    Run(String),
    Add,
    ToggleManager,
    Quit,
}

pub fn ui(ui: &mut egui::Ui, state: &LauncherState) -> Option<ToolbarAction> {
    let mut action = None;
    ui.horizontal_centered(|ui| {
        if !state.is_loaded() {
            ui.spinner();
            ui.label("Loading…");
        } else {
            let width = (ui.available_width() - 110.0).max(40.0);
            egui::ScrollArea::horizontal()
                .max_width(width)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for entry in state.entries() {
                            let exists = Path::new(&entry.file_path).is_file();
                            let text = if exists {
                                egui::RichText::new(&entry.name)
                            } else {
                                egui::RichText::new(&entry.name).weak().strikethrough()
                            };
                            let resp = ui
                                .button(text)
                                .on_hover_text(format!("{}\n{}", entry.name, entry.file_path));
                            if resp.clicked() {
                                action = Some(ToolbarAction::Run(entry.id.clone()));
                            }
                        }
                    });
                });
            if !state.entries().is_empty() {
                ui.separator();
            }
        }
        let loaded = state.is_loaded();
        if ui
            .add_enabled(loaded, egui::Button::new("➕"))
            .on_hover_text("Add entry")
            .clicked()
        {
            action = Some(ToolbarAction::Add);
        }
        if ui
            .add_enabled(loaded, egui::Button::new("☰"))
            .on_hover_text("Manage entries")
            .clicked()
        {
            action = Some(ToolbarAction::ToggleManager);
        }
        if ui.button("✖").on_hover_text("Close").clicked() {
            action = Some(ToolbarAction::Quit);
        }
    });
    action
}
