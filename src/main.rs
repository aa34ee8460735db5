#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use bat_launcher::data::DataPaths;
use bat_launcher::gui::LauncherApp;
use bat_launcher::logging;
use bat_launcher::settings::Settings;
use bat_launcher::state::LauncherState;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let paths = DataPaths::default_location();
    let settings_path = paths.settings_file();
    let (settings, settings_err) = match Settings::load_or_create(&settings_path) {
        Ok(s) => (s, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    let log_file = settings.log_to_file.then(|| paths.log_file());
    logging::init(settings.debug_logging, log_file);
    if let Some(e) = settings_err {
        tracing::warn!("ignoring invalid {}: {e}", settings_path.display());
    }
    tracing::info!("data directory: {}", paths.app_dir.display());

    let (w, h) = settings.toolbar_size;
    let mut viewport = egui::ViewportBuilder::default()
        .with_title("BatLauncher")
        .with_inner_size([w, h])
        .with_resizable(false);
    if settings.always_on_top {
        viewport = viewport.with_always_on_top();
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let state = LauncherState::new(paths);
    eframe::run_native(
        "BatLauncher",
        native_options,
        Box::new(move |_cc| Box::new(LauncherApp::new(state, settings))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the UI: {e}"))?;
    Ok(())
}
