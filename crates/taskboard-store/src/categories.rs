use anyhow::{Result, anyhow};
use chrono::Utc;
use icu_collator::Collator;
use icu_collator::options::CollatorOptions;

use taskboard_types::models::Category;

use crate::Database;

/// Outcome of [`Database::remove_category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryRemoval {
    Removed,
    NotFound,
    /// Refused: `todos` todos still reference the category.
    InUse { todos: usize },
}

impl Database {
    /// Sorted by name with the root-locale collator at default strength.
    /// Names that collate equal keep insertion order.
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let collator = Collator::try_new(Default::default(), CollatorOptions::default())
            .map_err(|e| anyhow!("failed to load collation data: {e}"))?;

        let mut categories: Vec<Category> =
            self.with_tables(|tables| tables.categories.all().cloned().collect())?;
        categories.sort_by(|a, b| collator.compare(&a.name, &b.name));
        Ok(categories)
    }

    pub fn get_category(&self, id: u64) -> Result<Option<Category>> {
        self.with_tables(|tables| tables.categories.get(id).cloned())
    }

    pub fn create_category(&self, name: &str, color: Option<&str>) -> Result<Category> {
        let now = Utc::now();
        self.with_tables_mut(|tables| {
            tables.categories.insert(Category {
                id: 0,
                name: name.to_string(),
                color: color.map(str::to_string),
                created_at: now,
            })
        })
    }

    /// Replaces both name and color; a `None` color clears it.
    pub fn update_category(&self, id: u64, name: &str, color: Option<&str>) -> Result<Option<Category>> {
        self.with_tables_mut(|tables| {
            let category = tables.categories.get_mut(id)?;
            category.name = name.to_string();
            category.color = color.map(str::to_string);
            Some(category.clone())
        })
    }

    /// Deletes the category unless a todo still points at it. Deletion never
    /// cascades.
    pub fn remove_category(&self, id: u64) -> Result<CategoryRemoval> {
        self.with_tables_mut(|tables| {
            let todos = tables
                .todos
                .all()
                .filter(|todo| todo.category_id == Some(id))
                .count();
            if todos > 0 {
                return CategoryRemoval::InUse { todos };
            }
            if tables.categories.delete(id) {
                CategoryRemoval::Removed
            } else {
                CategoryRemoval::NotFound
            }
        })
    }
}
