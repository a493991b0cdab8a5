//! `sidetick-behavior` — entity behavior trait, action types, and the stock
//! behavior families.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`action`]  | `Action` enum, `Decision`                                     |
//! | [`context`] | `BatchContext<'a>` — read-only batch inputs shared by all entities |
//! | [`model`]   | `EntityBehavior` trait                                        |
//! | [`hostile`] | `HostileBehavior` — target/attack/chase/wander                |
//! | [`passive`] | `PassiveBehavior` — breeding and slow wander                  |
//! | [`item`]    | `ItemBehavior` — stack merging                                |
//! | [`noop`]    | `NoopBehavior` — placeholder that never acts                  |
//!
//! # Design notes
//!
//! The pipeline's tick is split so behaviors stay pure:
//!
//! 1. **Process** (worker pool): for every snapshot entity, call
//!    [`EntityBehavior::decide`].  All reads go through the immutable
//!    snapshot and [`BatchContext`]; no live-world access, no mutation.
//!
//! 2. **Apply** (control thread): consume the collected [`Decision`]s and
//!    mutate live objects through the host's `WorldMut`.
//!
//! This split means a behavior only needs to be `Send + Sync` — it never
//! holds per-entity mutable state that could race.

pub mod action;
pub mod context;
pub mod hostile;
pub mod item;
pub mod model;
pub mod noop;
pub mod passive;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::{Action, Decision};
pub use context::BatchContext;
pub use hostile::HostileBehavior;
pub use item::ItemBehavior;
pub use model::EntityBehavior;
pub use noop::NoopBehavior;
pub use passive::PassiveBehavior;
