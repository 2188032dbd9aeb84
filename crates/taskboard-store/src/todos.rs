use anyhow::Result;
use chrono::Utc;

use taskboard_types::models::Todo;

use crate::{Database, next_timestamp};

impl Database {
    /// All todos, optionally only those in `category_id`, most recently
    /// touched first. Equal timestamps keep insertion order.
    pub fn list_todos(&self, category_id: Option<u64>) -> Result<Vec<Todo>> {
        self.with_tables(|tables| {
            let mut todos: Vec<Todo> = tables
                .todos
                .all()
                .filter(|todo| category_id.is_none() || todo.category_id == category_id)
                .cloned()
                .collect();
            todos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
            todos
        })
    }

    pub fn get_todo(&self, id: u64) -> Result<Option<Todo>> {
        self.with_tables(|tables| tables.todos.get(id).cloned())
    }

    /// The category reference is stored as given; it is only checked when a
    /// category is removed.
    pub fn create_todo(&self, title: &str, category_id: Option<u64>) -> Result<Todo> {
        let now = Utc::now();
        self.with_tables_mut(|tables| {
            tables.todos.insert(Todo {
                id: 0,
                title: title.to_string(),
                done: false,
                category_id,
                created_at: now,
                updated_at: now,
            })
        })
    }

    pub fn toggle_todo(&self, id: u64) -> Result<Option<Todo>> {
        self.update_todo(id, |todo| todo.done = !todo.done)
    }

    pub fn update_todo_title(&self, id: u64, title: &str) -> Result<Option<Todo>> {
        self.update_todo(id, |todo| todo.title = title.to_string())
    }

    /// `None` clears the category.
    pub fn update_todo_category(&self, id: u64, category_id: Option<u64>) -> Result<Option<Todo>> {
        self.update_todo(id, |todo| todo.category_id = category_id)
    }

    /// Returns whether a todo was deleted.
    pub fn remove_todo(&self, id: u64) -> Result<bool> {
        self.with_tables_mut(|tables| tables.todos.delete(id))
    }

    /// Apply one narrow change and bump `updated_at`.
    fn update_todo<F>(&self, id: u64, change: F) -> Result<Option<Todo>>
    where
        F: FnOnce(&mut Todo),
    {
        self.with_tables_mut(|tables| {
            let todo = tables.todos.get_mut(id)?;
            change(todo);
            todo.updated_at = next_timestamp(todo.updated_at);
            Some(todo.clone())
        })
    }
}
