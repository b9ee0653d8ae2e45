use std::{collections::HashMap, sync::{Arc, RwLock}};

use tracing::debug;

use crate::layout::{LayoutError, LayoutStore, TableLayout};

/// In-process store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryLayoutStore {
    layouts: Arc<RwLock<HashMap<String, TableLayout>>>,
}

impl MemoryLayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.layouts.read().map(|layouts| layouts.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LayoutStore for MemoryLayoutStore {
    fn save_layout(&self, query_hash: &str, layout: &TableLayout) -> Result<(), LayoutError> {
        let mut layouts = self.layouts.write().map_err(|_| LayoutError::Poisoned)?;
        layouts.insert(query_hash.to_string(), layout.clone());
        debug!(query_hash, tables = layout.len(), "layout saved in memory");
        Ok(())
    }

    fn load_layout(&self, query_hash: &str) -> Result<Option<TableLayout>, LayoutError> {
        let layouts = self.layouts.read().map_err(|_| LayoutError::Poisoned)?;
        Ok(layouts.get(query_hash).cloned())
    }
}
