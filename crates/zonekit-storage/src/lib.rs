//! # ZoneKit Storage
//!
//! The storage collaborator boundary: flat wire records, the async
//! [`ZoneStore`] trait with upsert-and-prune save semantics, and an
//! in-memory reference store for tests and local tooling.

pub mod memory;
pub mod records;
pub mod store;

pub use memory::MemoryZoneStore;
pub use records::{ZoneRecord, ZoneSubmission};
pub use store::ZoneStore;
