//! `noc-traffic` — packet injection models.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`model`]    | `TrafficModel` trait and the `Injection` decision enum        |
//! | [`uniform`]  | `UniformTraffic` — Bernoulli injection, uniform destinations  |
//! | [`scripted`] | `ScriptedTraffic` — explicit `(cycle, source, destination)`   |
//! | [`noop`]     | `NoTraffic` — never injects                                   |
//! | [`error`]    | `TrafficError`, `TrafficResult<T>`                            |
//!
//! # Design notes
//!
//! A traffic model is consulted once per node per cycle during the scan
//! phase.  It only decides *whether* and *where* to send; the simulator
//! builds the packet and owns all queue state.  Models take `&self` and a
//! per-node RNG, so they must be `Send + Sync` and keep no mutable state.

pub mod error;
pub mod model;
pub mod noop;
pub mod scripted;
pub mod uniform;

#[cfg(test)]
mod tests;

pub use error::{TrafficError, TrafficResult};
pub use model::{Injection, TrafficModel};
pub use noop::NoTraffic;
pub use scripted::ScriptedTraffic;
pub use uniform::UniformTraffic;
