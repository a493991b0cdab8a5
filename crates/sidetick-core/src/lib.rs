//! `sidetick-core` — foundational types for the sidetick entity AI pipeline.
//!
//! This crate is a dependency of every other `sidetick-*` crate.  It
//! intentionally has no `sidetick-*` dependencies and minimal external ones
//! (only `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                       |
//! |------------|------------------------------------------------|
//! | [`ids`]    | `EntityId`, `RegionId`                         |
//! | [`vec3`]   | `Vec3` — world-space position/velocity vector  |
//! | [`kind`]   | `EntityKind` — behavior-family dispatch key    |
//! | [`time`]   | `Tick` — monotonic tick counter                |
//! | [`rng`]    | `EntityRng` — per-entity deterministic RNG     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;
pub mod vec3;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{EntityId, RegionId};
pub use kind::EntityKind;
pub use rng::EntityRng;
pub use time::Tick;
pub use vec3::Vec3;
