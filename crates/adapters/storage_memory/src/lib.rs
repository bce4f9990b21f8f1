//! # shelf-adapter-storage-memory
//!
//! Process-local storage adapter. The store is created empty at startup and
//! discarded on exit; nothing is persisted.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `shelf-app::ports::storage`
//! - Keep entries in insertion order so first-match lookups are deterministic
//! - Serialize all access behind a single lock
//!
//! ## Dependency rule
//! Depends on `shelf-app` (for port traits) and `shelf-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod item_repo;

pub use error::StorageError;
pub use item_repo::InMemoryItemRepository;
