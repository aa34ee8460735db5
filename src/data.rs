use crate::entries::EntryStore;
use anyhow::Context;
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = "BatLauncher";
pub const DATA_FILE: &str = "data.json";
pub const ICONS_DIR: &str = "icons";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "bat_launcher.log";

/// Locations of everything the launcher keeps on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub app_dir: PathBuf,
    pub data_file: PathBuf,
    pub icons_dir: PathBuf,
}

impl DataPaths {
    pub fn new(app_dir: impl Into<PathBuf>) -> Self {
        let app_dir = app_dir.into();
        Self {
            data_file: app_dir.join(DATA_FILE),
            icons_dir: app_dir.join(ICONS_DIR),
            app_dir,
        }
    }

    /// `<local app data>/BatLauncher`, falling back to the home directory and
    /// finally the working directory when the platform reports neither.
    pub fn default_location() -> Self {
        let base = dirs_next::data_local_dir()
            .or_else(dirs_next::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR_NAME))
    }

    pub fn settings_file(&self) -> PathBuf {
        self.app_dir.join(SETTINGS_FILE)
    }

    pub fn log_file(&self) -> PathBuf {
        self.app_dir.join(LOG_FILE)
    }
}

/// Load the entry store. Missing or corrupt data yields an empty store.
pub fn load(paths: &DataPaths) -> EntryStore {
    match load_internal(&paths.data_file) {
        Ok(Some(store)) => {
            tracing::debug!(entries = store.entries.len(), "loaded entry store");
            store
        }
        Ok(None) => EntryStore::default(),
        Err(e) => {
            tracing::warn!("failed to load {}: {e:#}", paths.data_file.display());
            EntryStore::default()
        }
    }
}

fn load_internal(path: &Path) -> anyhow::Result<Option<EntryStore>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&content)?))
}

/// Rewrite the whole store to disk.
pub fn save(paths: &DataPaths, store: &EntryStore) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    if let Some(parent) = paths.data_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let tmp = paths.data_file.with_extension("json.tmp");
    std::fs::write(&tmp, json).with_context(|| format!("failed to write {}", tmp.display()))?;
    std::fs::rename(&tmp, &paths.data_file)
        .with_context(|| format!("failed to replace {}", paths.data_file.display()))?;
    tracing::debug!(entries = store.entries.len(), "saved entry store");
    Ok(())
}

/// Ensure the icon folder exists and return it.
pub fn icons_dir(paths: &DataPaths) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(&paths.icons_dir)
        .with_context(|| format!("failed to create {}", paths.icons_dir.display()))?;
    Ok(paths.icons_dir.clone())
}

/// Destination of an entry's icon: `<icons>/<entry id><.ext>`.
pub fn icon_destination(paths: &DataPaths, source: &Path, entry_id: &str) -> PathBuf {
    let file_name = match source.extension() {
        Some(ext) => format!("{entry_id}.{}", ext.to_string_lossy()),
        None => entry_id.to_string(),
    };
    paths.icons_dir.join(file_name)
}

/// Copy `source` into the icon folder, replacing any previous copy for the
/// same entry. Returns `None` when the copy fails.
pub fn copy_icon(paths: &DataPaths, source: &Path, entry_id: &str) -> Option<PathBuf> {
    let result = icons_dir(paths).and_then(|_| {
        let dest = icon_destination(paths, source, entry_id);
        std::fs::copy(source, &dest)
            .with_context(|| format!("failed to copy {}", source.display()))?;
        Ok(dest)
    });
    match result {
        Ok(dest) => Some(dest),
        Err(e) => {
            tracing::warn!("icon copy failed: {e:#}");
            None
        }
    }
}

/// Remove an icon file if it exists. Errors are ignored.
pub fn delete_icon(path: Option<&str>) {
    let Some(path) = path.filter(|p| !p.is_empty()) else {
        return;
    };
    let path = Path::new(path);
    if !path.exists() {
        return;
    }
    if let Err(e) = std::fs::remove_file(path) {
        tracing::debug!("failed to delete icon {}: {e}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_rooted_at_app_dir() {
        let paths = DataPaths::new("/tmp/app");
        assert_eq!(paths.data_file, PathBuf::from("/tmp/app/data.json"));
        assert_eq!(paths.icons_dir, PathBuf::from("/tmp/app/icons"));
        assert_eq!(paths.settings_file(), PathBuf::from("/tmp/app/settings.json"));
    }

    #[test]
    fn default_location_ends_with_app_name() {
        let paths = DataPaths::default_location();
        assert!(paths.app_dir.ends_with(APP_DIR_NAME));
    }

    #[test]
    fn icon_destination_keeps_extension() {
        let paths = DataPaths::new("/tmp/app");
        assert_eq!(
            icon_destination(&paths, Path::new("/pics/logo.PNG"), "abc"),
            PathBuf::from("/tmp/app/icons/abc.PNG")
        );
        assert_eq!(
            icon_destination(&paths, Path::new("/pics/logo"), "abc"),
            PathBuf::from("/tmp/app/icons/abc")
        );
    }
}
