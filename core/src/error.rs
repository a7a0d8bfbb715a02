//! Error types for the todo store.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the HTTP layer answers it with
//! 404 and a templated message. Validation failures and internal faults both
//! surface as 400 upstream; they stay separate here so logs can tell them
//! apart.

use thiserror::Error;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No stored item carries the requested id.
    #[error("Item with ID: {0} is not found.")]
    NotFound(i32),

    /// The submitted item failed validation.
    #[error("{0}")]
    Validation(String),

    /// A previous operation panicked while holding the store lock.
    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
