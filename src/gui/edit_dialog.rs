use crate::entries::Entry;
use crate::gui::LauncherApp;
use crate::state::{default_name_for, EntryDraft, IconChange};
use eframe::egui;
use rfd::FileDialog;
use std::path::{Path, PathBuf};

/// Add/edit form for a single entry.
#[derive(Default)]
pub struct EditDialog {
    pub open: bool,
    /// `None` while adding a new entry.
    editing: Option<String>,
    name: String,
    file_path: String,
    current_icon: Option<String>,
    icon: IconChange,
    error: Option<String>,
}

impl EditDialog {
    pub fn open_add(&mut self) {
        *self = Self {
            open: true,
            ..Self::default()
        };
    }

    pub fn open_edit(&mut self, entry: &Entry) {
        *self = Self {
            open: true,
            editing: Some(entry.id.clone()),
            name: entry.name.clone(),
            file_path: entry.file_path.clone(),
            current_icon: entry.icon_path.clone(),
            icon: IconChange::Keep,
            error: None,
        };
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Entry"
        } else {
            "Add Entry"
        }
    }

    pub fn draft(&self) -> EntryDraft {
        EntryDraft::new(self.name.clone(), self.file_path.clone()).with_icon(self.icon.clone())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Inline message shown under the form.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fill in the path chosen by the user, deriving a name if none was typed.
    pub fn set_file(&mut self, path: &Path) {
        self.file_path = path.display().to_string();
        if self.name.trim().is_empty() {
            self.name = default_name_for(path);
        }
    }

    pub fn set_icon(&mut self, path: PathBuf) {
        self.icon = IconChange::Replace(path);
    }

    pub fn remove_icon(&mut self) {
        self.icon = IconChange::Remove;
    }

    fn icon_label(&self) -> String {
        let shown = match &self.icon {
            IconChange::Keep => self.current_icon.as_deref().map(PathBuf::from),
            IconChange::Remove => None,
            IconChange::Replace(p) => Some(p.clone()),
        };
        shown
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "(none)".into())
    }

    fn has_icon(&self) -> bool {
        match &self.icon {
            IconChange::Keep => self.current_icon.is_some(),
            IconChange::Remove => false,
            IconChange::Replace(_) => true,
        }
    }

    /// Validate and apply the form. Returns `true` when the dialog can close.
    pub fn submit(&mut self, app: &mut LauncherApp) -> bool {
        if !app.state.is_loaded() {
            self.error = Some("Entries are still loading.".into());
            return false;
        }
        let draft = self.draft();
        if let Err(e) = draft.validate() {
            self.error = Some(e.to_string());
            return false;
        }
        self.error = None;
        let result = match &self.editing {
            Some(id) => app.state.edit_entry(id, draft),
            None => app.state.add_entry(draft).map(|_| ()),
        };
        if let Err(e) = result {
            app.report_error(format!("{e:#}"));
        }
        true
    }

    pub fn ui(&mut self, ctx: &egui::Context, app: &mut LauncherApp) {
        if !self.open {
            return;
        }
        let mut open = self.open;
        let mut close = false;
        egui::Window::new(self.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("entry_form").num_columns(3).show(ui, |ui| {
                    ui.label("Name");
                    ui.text_edit_singleline(&mut self.name);
                    ui.end_row();

                    ui.label("File");
                    ui.text_edit_singleline(&mut self.file_path);
                    if ui.button("Browse").clicked() {
                        if let Some(file) = FileDialog::new()
                            .set_title("Select a file to launch")
                            .add_filter("Supported files", &["bat", "cmd", "exe"])
                            .add_filter("Batch files", &["bat", "cmd"])
                            .add_filter("Executables", &["exe"])
                            .add_filter("All files", &["*"])
                            .pick_file()
                        {
                            self.set_file(&file);
                        }
                    }
                    ui.end_row();

                    ui.label("Icon");
                    ui.label(self.icon_label());
                    ui.horizontal(|ui| {
                        if ui.button("Browse").clicked() {
                            if let Some(file) = FileDialog::new()
                                .set_title("Select an icon image")
                                .add_filter("Images", &["png", "jpg", "jpeg", "ico", "bmp"])
                                .add_filter("All files", &["*"])
                                .pick_file()
                            {
                                self.set_icon(file);
                            }
                        }
                        if self.has_icon() && ui.button("Remove").clicked() {
                            self.remove_icon();
                        }
                    });
                    ui.end_row();
                });

                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::RED, err);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() && self.submit(app) {
                        close = true;
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            });
        if close {
            open = false;
        }
        self.open = open;
    }
}
