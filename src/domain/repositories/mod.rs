//! Storage trait definitions for the domain layer.
//!
//! Traits define the contract; implementations live in
//! `crate::infrastructure::store`. Mock implementations are generated via
//! `mockall` for testing.

pub mod entry_store;

pub use entry_store::EntryStore;

#[cfg(test)]
pub use entry_store::MockEntryStore;
