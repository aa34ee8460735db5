use crate::state::LauncherState;
use eframe::egui;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerAction {
    Select(String),
    Run(String),
    Add,
    Edit(String),
    Delete(String),
    Close,
}

/// Entry list with search, selection and the add/edit/delete/run buttons.
#[derive(Default)]
pub struct ManagerView {
    search: String,
}

impl ManagerView {
    pub fn ui(&mut self, ui: &mut egui::Ui, state: &mut LauncherState) -> Option<ManagerAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.heading("Scripts");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Done").clicked() {
                    action = Some(ManagerAction::Close);
                }
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.search).hint_text("Search…"),
                );
                if resp.changed() {
                    state.set_search(self.search.clone());
                }
            });
        });
        ui.separator();

        let selected = state.selected_id().map(str::to_string);
        let list_height = (ui.available_height() - 60.0).max(60.0);
        egui::ScrollArea::vertical()
            .max_height(list_height)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                if state.filtered_len() == 0 {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        if state.search().trim().is_empty() {
                            ui.weak("No scripts yet. Click Add to register one.");
                        } else {
                            ui.weak("No scripts match the search.");
                        }
                    });
                    return;
                }
                for entry in state.filtered_entries() {
                    let is_selected = selected.as_deref() == Some(entry.id.as_str());
                    let resp = ui
                        .selectable_label(is_selected, &entry.name)
                        .on_hover_text(&entry.file_path);
                    if resp.double_clicked() {
                        action = Some(ManagerAction::Run(entry.id.clone()));
                    } else if resp.clicked() {
                        action = Some(ManagerAction::Select(entry.id.clone()));
                    }
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Add").clicked() {
                action = Some(ManagerAction::Add);
            }
            let has_sel = selected.is_some();
            if ui.add_enabled(has_sel, egui::Button::new("Edit")).clicked() {
                action = selected.clone().map(ManagerAction::Edit);
            }
            if ui.add_enabled(has_sel, egui::Button::new("Delete")).clicked() {
                action = selected.clone().map(ManagerAction::Delete);
            }
            if ui.add_enabled(has_sel, egui::Button::new("Run")).clicked() {
                action = selected.clone().map(ManagerAction::Run);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(state.status_text());
            });
        });

        action
    }
}
