use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const STORE_VERSION: u32 = 1;

/// A registered file that can be launched from the toolbar.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<String>,
    #[serde(default = "Local::now")]
    pub created_at: DateTime<Local>,
}

impl Entry {
    /// Create an entry with a fresh identifier stamped with the current time.
    pub fn new(name: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            file_path: file_path.into(),
            icon_path: None,
            created_at: Local::now(),
        }
    }
}

/// Contents of `data.json`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EntryStore {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

fn default_version() -> u32 {
    STORE_VERSION
}

impl Default for EntryStore {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            entries: Vec::new(),
        }
    }
}

impl EntryStore {
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
