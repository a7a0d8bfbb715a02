//! Domain core for the todo service.
//!
//! # Overview
//! Holds the single `TodoItem` entity and the in-memory `TodoStore` that the
//! HTTP layer drives. Nothing here knows about HTTP or an async runtime; the
//! server crate translates `StoreError` into status codes.
//!
//! # Design
//! - The store is an explicit value, constructed once and shared by the host.
//!   Tests build a fresh one each time.
//! - Every operation runs inside one lock acquisition, so a find followed by
//!   a mutation is never interleaved with another writer.
//! - Errors are returned, never panicked: `NotFound` for a missing id and
//!   everything else as a client-facing failure.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::TodoItem;
