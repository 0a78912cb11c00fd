//! Shared test fixtures for the pde-resolver workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`index`] — [`TestIndex`](index::TestIndex) builder for in-memory indexes
//! - [`snapshot`] — [`SnapshotDir`](snapshot::SnapshotDir) for snapshot files on disk

pub mod index;
pub mod snapshot;
