use std::{fs, io::ErrorKind, path::{Path, PathBuf}};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::{LayoutError, LayoutStore, TableLayout, TablePosition};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTablePosition {
    pub alias: String,
    pub x: f64,
    pub y: f64,
}

/// On-disk shape of one saved layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedLayout {
    pub query_hash: String,
    pub saved_at: DateTime<Utc>,
    pub tables: Vec<SavedTablePosition>,
}

impl SavedLayout {
    pub fn new(query_hash: &str, layout: &TableLayout) -> Self {
        Self {
            query_hash: query_hash.to_string(),
            saved_at: Utc::now(),
            tables: layout
                .iter()
                .map(|(alias, position)| SavedTablePosition { alias: alias.clone(), x: position.x, y: position.y })
                .collect(),
        }
    }

    pub fn to_layout(&self) -> TableLayout {
        self.tables
            .iter()
            .map(|table| (table.alias.clone(), TablePosition::new(table.x, table.y)))
            .collect()
    }
}

/// Stores each layout as `<dir>/<query hash>.json`.
#[derive(Debug, Clone)]
pub struct FileLayoutStore {
    dir: PathBuf,
}

impl FileLayoutStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, query_hash: &str) -> PathBuf {
        self.dir.join(format!("{}.json", query_hash))
    }

    pub fn load_saved(&self, query_hash: &str) -> Result<Option<SavedLayout>, LayoutError> {
        let path = self.path_of(query_hash);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        Ok(Some(serde_json::from_str(&content)?))
    }
}

impl LayoutStore for FileLayoutStore {
    fn save_layout(&self, query_hash: &str, layout: &TableLayout) -> Result<(), LayoutError> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path_of(query_hash);
        let content = serde_json::to_string_pretty(&SavedLayout::new(query_hash, layout))?;
        fs::write(&path, content)?;

        debug!(path = %path.display(), tables = layout.len(), "layout saved");
        Ok(())
    }

    fn load_layout(&self, query_hash: &str) -> Result<Option<TableLayout>, LayoutError> {
        Ok(self.load_saved(query_hash)?.map(|saved| saved.to_layout()))
    }
}
