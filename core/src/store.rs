//! In-memory todo store.
//!
//! # Design
//! Items live in a `Vec` in insertion order. Every id-based operation resolves
//! the *first* match, so a duplicate id inserted later is shadowed until the
//! earlier one is deleted. Inserts do not check for an existing id.
//!
//! Reads take the shared lock; `create`, `update` and `delete` hold the
//! exclusive lock across the whole lookup and mutation. Critical sections are
//! short and never await, so a blocking `std::sync::RwLock` is used rather
//! than an async one.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::StoreError;
use crate::types::TodoItem;

/// Process-wide collection of todo items, shared behind an `Arc` by the host.
#[derive(Debug, Default)]
pub struct TodoStore {
    items: RwLock<Vec<TodoItem>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` and returns the stored copy.
    pub fn create(&self, item: TodoItem) -> Result<TodoItem, StoreError> {
        item.validate()?;
        let mut items = self.write()?;
        debug!(id = item.id, "creating todo item");
        items.push(item.clone());
        Ok(item)
    }

    /// Returns the first item whose id equals `id`.
    pub fn get(&self, id: i32) -> Result<TodoItem, StoreError> {
        let items = self.read()?;
        debug!(id, "fetching todo item");
        items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Replaces `name` and `description` of the item matching `new_item.id`.
    ///
    /// The stored id is left untouched.
    pub fn update(&self, new_item: TodoItem) -> Result<TodoItem, StoreError> {
        new_item.validate()?;
        let mut items = self.write()?;
        debug!(id = new_item.id, "updating todo item");
        let item = items
            .iter_mut()
            .find(|item| item.id == new_item.id)
            .ok_or(StoreError::NotFound(new_item.id))?;
        item.name = new_item.name;
        item.description = new_item.description;
        Ok(item.clone())
    }

    /// Removes the first item matching `id` and returns it.
    pub fn delete(&self, id: i32) -> Result<TodoItem, StoreError> {
        let mut items = self.write()?;
        debug!(id, "deleting todo item");
        let position = items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(items.remove(position))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<TodoItem>>, StoreError> {
        self.items.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<TodoItem>>, StoreError> {
        self.items.write().map_err(|_| StoreError::Poisoned)
    }
}
