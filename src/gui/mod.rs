mod confirmation_modal;
mod edit_dialog;
mod manager;
mod toolbar;

pub use confirmation_modal::{ConfirmationModal, ConfirmationResult};
pub use edit_dialog::EditDialog;
pub use manager::{ManagerAction, ManagerView};
pub use toolbar::ToolbarAction;

use crate::data;
use crate::entries::EntryStore;
use crate::settings::Settings;
use crate::state::LauncherState;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::time::Duration;

/// Toolbar application. The entry manager and the dialogs are drawn inside the
/// same viewport, which grows while any of them is open.
pub struct LauncherApp {
    pub state: LauncherState,
    pub settings: Settings,
    pub show_manager: bool,
    load_started: bool,
    load_rx: Option<Receiver<EntryStore>>,
    toasts: Toasts,
    manager: ManagerView,
    edit_dialog: EditDialog,
    confirm: ConfirmationModal,
    pending_delete: Option<String>,
    current_size: Option<egui::Vec2>,
    quit_requested: bool,
    last_error: Option<String>,
}

impl LauncherApp {
    pub fn new(state: LauncherState, settings: Settings) -> Self {
        Self {
            state,
            settings,
            show_manager: false,
            load_started: false,
            load_rx: None,
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0]),
            manager: ManagerView::default(),
            edit_dialog: EditDialog::default(),
            confirm: ConfirmationModal::default(),
            pending_delete: None,
            current_size: None,
            quit_requested: false,
            last_error: None,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Most recent error passed to [`Self::report_error`].
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Show a non-fatal problem to the user.
    pub fn report_error(&mut self, msg: String) {
        tracing::error!("{msg}");
        self.last_error = Some(msg.clone());
        if self.settings.enable_toasts {
            self.toasts.add(Toast {
                text: msg.into(),
                kind: ToastKind::Error,
                options: ToastOptions::default()
                    .duration_in_seconds(self.settings.toast_duration as f64),
            });
        } else {
            show_message_box(&msg);
        }
    }

    pub fn run_entry(&mut self, id: &str) {
        if let Err(e) = self.state.run_entry(id) {
            // launch failures are modal
            tracing::error!("{e:#}");
            show_message_box(&format!("{e:#}"));
        }
    }

    pub fn open_add_dialog(&mut self) {
        self.edit_dialog.open_add();
    }

    pub fn open_edit_dialog(&mut self, id: &str) {
        if let Some(entry) = self.state.entry(id) {
            self.edit_dialog.open_edit(entry);
        }
    }

    pub fn request_delete(&mut self, id: &str) {
        let Some(entry) = self.state.entry(id) else {
            return;
        };
        if self.settings.confirm_delete {
            self.confirm.open_for(&entry.name);
            self.pending_delete = Some(id.to_string());
        } else {
            self.delete_now(id);
        }
    }

    fn delete_now(&mut self, id: &str) {
        if let Err(e) = self.state.delete_entry(id) {
            self.report_error(format!("{e:#}"));
        }
    }

    pub fn handle_toolbar(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::Run(id) => self.run_entry(&id),
            ToolbarAction::Add if self.state.is_loaded() => self.open_add_dialog(),
            ToolbarAction::ToggleManager if self.state.is_loaded() => {
                self.show_manager = !self.show_manager
            }
            ToolbarAction::Add | ToolbarAction::ToggleManager => {}
            ToolbarAction::Quit => self.quit_requested = true,
        }
    }

    pub fn handle_manager(&mut self, action: ManagerAction) {
        match action {
            ManagerAction::Select(id) => self.state.select(Some(&id)),
            ManagerAction::Run(id) => {
                self.state.select(Some(&id));
                self.run_entry(&id);
            }
            ManagerAction::Add => self.open_add_dialog(),
            ManagerAction::Edit(id) => self.open_edit_dialog(&id),
            ManagerAction::Delete(id) => self.request_delete(&id),
            ManagerAction::Close => self.show_manager = false,
        }
    }

    fn expanded(&self) -> bool {
        self.show_manager || self.edit_dialog.open || self.confirm.is_open()
    }

    /// Read the store on a worker thread so the window is usable meanwhile.
    fn start_loading(&mut self) {
        self.load_started = true;
        let (tx, rx) = channel();
        let paths = self.state.paths().clone();
        let spawned = std::thread::Builder::new()
            .name("entry-loader".into())
            .spawn(move || {
                let _ = tx.send(data::load(&paths));
            });
        match spawned {
            Ok(_) => self.load_rx = Some(rx),
            Err(e) => {
                tracing::warn!("loader thread failed to start: {e}; loading inline");
                self.state.load();
            }
        }
    }

    fn poll_loading(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.load_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(store) => {
                self.state.apply_loaded(store);
                self.load_rx = None;
            }
            Err(TryRecvError::Empty) => ctx.request_repaint_after(Duration::from_millis(50)),
            Err(TryRecvError::Disconnected) => {
                self.load_rx = None;
                self.state.load();
            }
        }
    }

    fn sync_viewport_size(&mut self, ctx: &egui::Context) {
        let (w, h) = if self.expanded() {
            self.settings.manager_size
        } else {
            self.settings.toolbar_size
        };
        let size = egui::vec2(w, h);
        if self.current_size != Some(size) {
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
            self.current_size = Some(size);
        }
    }

    /// Draw one frame.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.poll_loading(ctx);

        let mut toolbar_action = None;
        egui::TopBottomPanel::top("toolbar")
            .exact_height(self.settings.toolbar_size.1 - 8.0)
            .show(ctx, |ui| {
                toolbar_action = toolbar::ui(ui, &self.state);
            });
        if let Some(action) = toolbar_action {
            self.handle_toolbar(action);
        }

        if self.show_manager {
            let mut manager_action = None;
            egui::CentralPanel::default().show(ctx, |ui| {
                manager_action = self.manager.ui(ui, &mut self.state);
            });
            if let Some(action) = manager_action {
                self.handle_manager(action);
            }
        }

        let mut dlg = std::mem::take(&mut self.edit_dialog);
        dlg.ui(ctx, self);
        self.edit_dialog = dlg;

        match self.confirm.ui(ctx) {
            ConfirmationResult::Confirmed => {
                if let Some(id) = self.pending_delete.take() {
                    self.delete_now(&id);
                }
            }
            ConfirmationResult::Cancelled => self.pending_delete = None,
            ConfirmationResult::None => {}
        }

        if self.settings.enable_toasts {
            self.toasts.show(ctx);
        }

        self.sync_viewport_size(ctx);

        if self.quit_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if !self.load_started {
            // First frame is on screen; fetch the entries now.
            self.start_loading();
            ctx.request_repaint();
        }
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

fn show_message_box(msg: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Error")
        .set_description(msg)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
