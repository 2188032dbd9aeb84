pub mod categories;
pub mod id_store;
pub mod todos;

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;
use tracing::info;

use taskboard_types::models::{Category, Todo};

pub use categories::CategoryRemoval;
pub use id_store::{IdStore, Keyed};

/// Both stores, always locked together so a category delete can check the
/// todos it would orphan without another request mutating them in between.
#[derive(Debug, Default)]
pub struct Tables {
    pub todos: IdStore<Todo>,
    pub categories: IdStore<Category>,
}

/// The in-memory database. All reads and writes go through the domain
/// operations in [`todos`] and [`categories`].
pub struct Database {
    tables: Mutex<Tables>,
}

impl Database {
    pub fn new() -> Self {
        info!("In-memory store initialised");
        Self {
            tables: Mutex::new(Tables::default()),
        }
    }

    pub fn with_tables<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Tables) -> T,
    {
        let tables = self.tables.lock().map_err(|e| anyhow::anyhow!("Store lock poisoned: {}", e))?;
        Ok(f(&tables))
    }

    pub fn with_tables_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Tables) -> T,
    {
        let mut tables = self.tables.lock().map_err(|e| anyhow::anyhow!("Store lock poisoned: {}", e))?;
        Ok(f(&mut tables))
    }

    /// Empty both stores and restart both id counters.
    pub fn reset(&self) -> Result<()> {
        self.with_tables_mut(|tables| {
            tables.todos.clear();
            tables.categories.clear();
        })?;
        info!("Store reset");
        Ok(())
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall-clock now, nudged forward if the clock has not moved past `previous`.
pub(crate) fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::nanoseconds(1)
    }
}
