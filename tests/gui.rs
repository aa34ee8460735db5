use bat_launcher::data::{self, DataPaths};
use bat_launcher::entries::{Entry, EntryStore};
use bat_launcher::gui::{EditDialog, LauncherApp, ManagerAction, ToolbarAction};
use bat_launcher::settings::Settings;
use bat_launcher::state::{EntryDraft, LauncherState};
use eframe::egui;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn frame(ctx: &egui::Context, app: &mut LauncherApp) {
    let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));
}

fn app_with_store(paths: DataPaths) -> LauncherApp {
    let settings = Settings {
        confirm_delete: false,
        enable_toasts: true,
        ..Settings::default()
    };
    LauncherApp::new(LauncherState::new(paths), settings)
}

#[test]
fn entries_load_after_first_frame() {
    let dir = tempdir().unwrap();
    let paths = DataPaths::new(dir.path());
    let store = EntryStore {
        version: 1,
        entries: vec![Entry::new("One", "a.bat"), Entry::new("Two", "b.exe")],
    };
    data::save(&paths, &store).unwrap();

    let ctx = egui::Context::default();
    let mut app = app_with_store(paths);
    assert!(!app.state.is_loaded());

    frame(&ctx, &mut app);
    let deadline = Instant::now() + Duration::from_secs(5);
    while !app.state.is_loaded() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(10));
        frame(&ctx, &mut app);
    }
    assert!(app.state.is_loaded());
    assert_eq!(app.state.entries().len(), 2);
}

#[test]
fn toolbar_and_manager_actions_update_state() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("x.bat");
    std::fs::write(&target, "").unwrap();
    let ctx = egui::Context::default();
    let mut app = app_with_store(DataPaths::new(dir.path().join("app")));
    app.state.load();
    let id = app
        .state
        .add_entry(EntryDraft::new("X", target.to_string_lossy()))
        .unwrap();

    app.handle_toolbar(ToolbarAction::ToggleManager);
    assert!(app.show_manager);
    frame(&ctx, &mut app);

    app.handle_manager(ManagerAction::Select(id.clone()));
    assert_eq!(app.state.selected_id(), Some(id.as_str()));

    app.handle_manager(ManagerAction::Delete(id.clone()));
    assert!(app.state.entries().is_empty());
    frame(&ctx, &mut app);

    app.handle_manager(ManagerAction::Close);
    assert!(!app.show_manager);

    app.handle_toolbar(ToolbarAction::Quit);
    assert!(app.quit_requested());
    frame(&ctx, &mut app);
}

#[test]
fn invalid_form_keeps_dialog_open() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("x.bat");
    std::fs::write(&target, "").unwrap();
    let mut app = app_with_store(DataPaths::new(dir.path().join("app")));
    app.state.load();

    let mut dlg = EditDialog::default();
    dlg.open_add();
    dlg.set_file(&target);
    dlg.set_name("   ");
    assert!(!dlg.submit(&mut app));
    assert_eq!(dlg.error(), Some("Please enter a display name."));
    assert!(app.state.entries().is_empty());
    assert!(app.last_error().is_none());

    dlg.set_name("X");
    assert!(dlg.submit(&mut app));
    assert_eq!(dlg.error(), None);
    assert_eq!(app.state.entries().len(), 1);
}

#[test]
fn failed_save_is_reported_to_the_user() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("app");
    std::fs::write(&blocker, "").unwrap();
    let target = dir.path().join("x.bat");
    std::fs::write(&target, "").unwrap();
    let mut app = app_with_store(DataPaths::new(&blocker));
    app.state.load();

    let mut dlg = EditDialog::default();
    dlg.open_add();
    dlg.set_file(&target);
    assert!(dlg.submit(&mut app));
    assert!(app
        .last_error()
        .is_some_and(|e| e.contains("Failed to save entries")));
    assert_eq!(app.state.entries().len(), 1);

    // The toast is drawn without panicking.
    let ctx = egui::Context::default();
    frame(&ctx, &mut app);
}

#[test]
fn submit_before_load_is_refused() {
    let dir = tempdir().unwrap();
    let paths = DataPaths::new(dir.path().join("app"));
    let saved = EntryStore {
        version: 1,
        entries: vec![Entry::new("Old", "a.bat")],
    };
    data::save(&paths, &saved).unwrap();
    let before = std::fs::read_to_string(&paths.data_file).unwrap();

    let target = dir.path().join("x.bat");
    std::fs::write(&target, "").unwrap();
    let mut app = app_with_store(paths.clone());

    let mut dlg = EditDialog::default();
    dlg.open_add();
    dlg.set_file(&target);
    assert!(!dlg.submit(&mut app));
    assert_eq!(dlg.error(), Some("Entries are still loading."));
    assert_eq!(std::fs::read_to_string(&paths.data_file).unwrap(), before);
}

#[test]
fn toolbar_add_and_manage_wait_for_load() {
    let dir = tempdir().unwrap();
    let mut app = app_with_store(DataPaths::new(dir.path().join("app")));

    app.handle_toolbar(ToolbarAction::ToggleManager);
    assert!(!app.show_manager);

    app.state.load();
    app.handle_toolbar(ToolbarAction::ToggleManager);
    assert!(app.show_manager);
}
