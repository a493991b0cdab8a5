//! `sidetick-spatial` — per-batch spatial index over entity snapshots.
//!
//! # Crate layout
//!
//! | Module    | Contents                                   |
//! |-----------|--------------------------------------------|
//! | [`index`] | `SnapshotIndex` — R-tree nearest/within queries |
//!
//! The index is ephemeral: built once per batch from the frozen snapshot
//! generation, queried read-only for the batch's lifetime, then discarded.
//! Because it holds only `Copy` snapshot values and is never mutated after
//! construction, any number of worker threads may query it concurrently
//! without locks.

pub mod index;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use index::SnapshotIndex;
