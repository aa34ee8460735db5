use crate::data::{self, DataPaths};
use crate::entries::{Entry, EntryStore};
use crate::filter::filter_entries;
use crate::launcher;
use anyhow::{anyhow, bail, Context};
use std::path::{Path, PathBuf};

/// What to do with an entry's icon when a draft is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IconChange {
    #[default]
    Keep,
    Remove,
    Replace(PathBuf),
}

/// User input from the add/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryDraft {
    pub name: String,
    pub file_path: String,
    pub icon: IconChange,
}

impl EntryDraft {
    pub fn new(name: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_path: file_path.into(),
            icon: IconChange::Keep,
        }
    }

    pub fn with_icon(mut self, icon: IconChange) -> Self {
        self.icon = icon;
        self
    }

    pub fn for_entry(entry: &Entry) -> Self {
        Self::new(entry.name.clone(), entry.file_path.clone())
    }

    /// Trimmed name and absolute path, or the message to show the user.
    /// Relative paths are resolved against the current directory.
    pub fn validate(&self) -> anyhow::Result<(String, String)> {
        let name = self.name.trim();
        let file_path = self.file_path.trim();
        if name.is_empty() {
            bail!("Please enter a display name.");
        }
        if file_path.is_empty() || !Path::new(file_path).is_file() {
            bail!("Please select a valid file.");
        }
        let file_path = absolute_path(Path::new(file_path))?;
        Ok((name.to_string(), file_path.to_string_lossy().into_owned()))
    }
}

fn absolute_path(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve the current directory")?;
    Ok(cwd.join(path))
}

/// Display name suggested for a freshly picked file.
pub fn default_name_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// In-memory launcher state shared by the toolbar and the manager.
///
/// Every mutation refilters the visible list and rewrites the store. When the
/// write fails the change stays in memory and the error is returned so the UI
/// can report it.
pub struct LauncherState {
    paths: DataPaths,
    store: EntryStore,
    search: String,
    filtered: Vec<usize>,
    selected: Option<String>,
    loaded: bool,
}

impl LauncherState {
    pub fn new(paths: DataPaths) -> Self {
        Self {
            paths,
            store: EntryStore::default(),
            search: String::new(),
            filtered: Vec::new(),
            selected: None,
            loaded: false,
        }
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Read the store from disk. Only the first call has an effect.
    pub fn load(&mut self) {
        if self.loaded {
            return;
        }
        let store = data::load(&self.paths);
        self.apply_loaded(store);
    }

    /// Install a store that was read elsewhere, e.g. on a loader thread.
    pub fn apply_loaded(&mut self, store: EntryStore) {
        if self.loaded {
            tracing::debug!("store already loaded; ignoring");
            return;
        }
        self.store = store;
        self.loaded = true;
        self.refilter();
        tracing::info!(entries = self.store.len(), "entries loaded");
    }

    pub fn entries(&self) -> &[Entry] {
        &self.store.entries
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.store.get(id)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.refilter();
    }

    pub fn filtered_entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.filtered.iter().filter_map(|&i| self.store.entries.get(i))
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.map(str::to_string);
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected.as_deref().and_then(|id| self.store.get(id))
    }

    pub fn status_text(&self) -> String {
        let n = self.filtered.len();
        format!("{n} script{}", if n == 1 { "" } else { "s" })
    }

    /// Create an entry from `draft`, select it and persist. Returns its id.
    pub fn add_entry(&mut self, draft: EntryDraft) -> anyhow::Result<String> {
        self.ensure_loaded()?;
        let (name, file_path) = draft.validate()?;
        let mut entry = Entry::new(name, file_path);
        if let IconChange::Replace(src) = &draft.icon {
            entry.icon_path = data::copy_icon(&self.paths, src, &entry.id)
                .map(|p| p.to_string_lossy().into_owned());
        }
        let id = entry.id.clone();
        tracing::info!(%id, name = %entry.name, "adding entry");
        self.store.entries.push(entry);
        self.selected = Some(id.clone());
        self.refilter();
        self.save()?;
        Ok(id)
    }

    /// Update name, path and icon of an existing entry and persist.
    pub fn edit_entry(&mut self, id: &str, draft: EntryDraft) -> anyhow::Result<()> {
        self.ensure_loaded()?;
        let (name, file_path) = draft.validate()?;
        let paths = self.paths.clone();
        let entry = self
            .store
            .get_mut(id)
            .ok_or_else(|| anyhow!("No entry with id {id}"))?;
        entry.name = name;
        entry.file_path = file_path;
        match draft.icon {
            IconChange::Keep => {}
            IconChange::Remove => {
                data::delete_icon(entry.icon_path.as_deref());
                entry.icon_path = None;
            }
            IconChange::Replace(src) => {
                let unchanged = entry
                    .icon_path
                    .as_deref()
                    .map(|p| Path::new(p) == src.as_path())
                    .unwrap_or(false);
                // The old icon is only dropped once the new copy exists.
                if !unchanged {
                    if let Some(dest) = data::copy_icon(&paths, &src, &entry.id) {
                        let dest = dest.to_string_lossy().into_owned();
                        if entry.icon_path.as_deref() != Some(dest.as_str()) {
                            data::delete_icon(entry.icon_path.as_deref());
                        }
                        entry.icon_path = Some(dest);
                    }
                }
            }
        }
        tracing::info!(%id, "edited entry");
        self.refilter();
        self.save()
    }

    /// Remove an entry together with its icon file and persist.
    pub fn delete_entry(&mut self, id: &str) -> anyhow::Result<()> {
        self.ensure_loaded()?;
        let idx = self
            .store
            .position(id)
            .ok_or_else(|| anyhow!("No entry with id {id}"))?;
        let entry = self.store.entries.remove(idx);
        data::delete_icon(entry.icon_path.as_deref());
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        tracing::info!(%id, name = %entry.name, "deleted entry");
        self.refilter();
        self.save()
    }

    /// Launch an entry. Launch failures carry a
    /// [`LaunchError`](crate::launcher::LaunchError)
    /// inside the returned error.
    pub fn run_entry(&self, id: &str) -> anyhow::Result<()> {
        let entry = self
            .store
            .get(id)
            .ok_or_else(|| anyhow!("No entry with id {id}"))?;
        launcher::launch(&entry.file_path)?;
        Ok(())
    }

    /// Mutations before the initial load would overwrite the saved store.
    fn ensure_loaded(&self) -> anyhow::Result<()> {
        if !self.loaded {
            bail!("Entries are still loading.");
        }
        Ok(())
    }

    fn refilter(&mut self) {
        self.filtered = filter_entries(&self.store.entries, &self.search);
    }

    fn save(&self) -> anyhow::Result<()> {
        data::save(&self.paths, &self.store).map_err(|e| {
            tracing::error!("failed to save entries: {e:#}");
            e.context("Failed to save entries")
        })
    }
}
