use std::sync::{Arc, PoisonError, RwLock};

use log::info;

use crate::placement::table::PlacementTables;

/// Shared holder of the current placement tables.
///
/// Readers take a [`snapshot`](TableStore::snapshot) and work on it without
/// holding any lock; the lock only guards the pointer swap. A reload replaces
/// the whole table value, so a reader sees either the old tables or the new
/// ones and never a mix.
#[derive(Debug, Default)]
pub struct TableStore {
    current: RwLock<Arc<PlacementTables>>,
}

impl TableStore {
    pub fn new(tables: PlacementTables) -> Self {
        Self {
            current: RwLock::new(Arc::new(tables)),
        }
    }

    /// Returns the tables current at the time of the call.
    pub fn snapshot(&self) -> Arc<PlacementTables> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replaces the tables, returning the ones that were current before.
    ///
    /// Snapshots taken earlier keep pointing at the previous tables.
    pub fn reload(&self, tables: PlacementTables) -> Arc<PlacementTables> {
        let tables = Arc::new(tables);
        info!(
            special_entries = tables.special().len(),
            default_entries = tables.defaults().len();
            "Reloading placement tables"
        );
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, tables)
    }
}
