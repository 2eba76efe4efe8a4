//! `noc-core` — foundational types for the NoC mesh simulator.
//!
//! This crate is a dependency of every other `noc-*` crate.  It has no
//! `noc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`coord`]       | `Coord`, `MeshShape` (row-major indexing)             |
//! | [`ids`]         | `PacketId`                                            |
//! | [`time`]        | `Cycle`                                               |
//! | [`config`]      | `SimConfig`, `QueueLimit`, `OverflowPolicy`           |
//! | [`rng`]         | `NodeRng` (per-node), `SimRng` (global)               |
//! | [`error`]       | `NocError`, `NocResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{OverflowPolicy, QueueLimit, SimConfig};
pub use coord::{Coord, MeshShape};
pub use error::{NocError, NocResult};
pub use ids::PacketId;
pub use rng::{NodeRng, SimRng};
pub use time::Cycle;
