use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Also write log output to `bat_launcher.log` in the data directory.
    #[serde(default)]
    pub log_to_file: bool,
    /// Enable toast notifications in the UI.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Duration of toast notifications in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
    #[serde(default = "default_true")]
    pub always_on_top: bool,
    /// Ask before deleting an entry.
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
    /// Window size while only the toolbar is shown.
    #[serde(default = "default_toolbar_size")]
    pub toolbar_size: (f32, f32),
    /// Window size while the entry manager is open.
    #[serde(default = "default_manager_size")]
    pub manager_size: (f32, f32),
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    3.0
}

fn default_true() -> bool {
    true
}

fn default_toolbar_size() -> (f32, f32) {
    (480.0, 56.0)
}

fn default_manager_size() -> (f32, f32) {
    (560.0, 420.0)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_to_file: false,
            enable_toasts: default_toasts(),
            toast_duration: default_toast_duration(),
            always_on_top: true,
            confirm_delete: true,
            toolbar_size: default_toolbar_size(),
            manager_size: default_manager_size(),
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Like [`Self::load`], but writes the defaults out when no file exists
    /// yet so they can be edited by hand.
    pub fn load_or_create(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        let settings = Self::default();
        if let Err(e) = settings.save(path) {
            tracing::warn!("could not write default settings to {}: {e:#}", path.display());
        }
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
