//! Storage port abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable key-value contract journal persistence runs on.
//! - Isolate SQLite details from service orchestration.
//!
//! # Invariants
//! - Implementations treat `write` as a full overwrite of the keyed record.
//!
//! # See also
//! - docs/architecture/storage.md

pub mod kv_store;
