//! `noc-mesh` — packets, nodes, the grid arena, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`packet`]  | `Packet` — one routing request and its delivery record      |
//! | [`node`]    | `Node` — inbound FIFO plus received log                     |
//! | [`grid`]    | `Grid` — row-major arena of nodes                           |
//! | [`router`]  | `Router` trait, `RouteStep`, `DimensionOrderRouter`         |
//! | [`error`]   | `MeshError`, `MeshResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Packet`.               |

pub mod error;
pub mod grid;
pub mod node;
pub mod packet;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{MeshError, MeshResult};
pub use grid::Grid;
pub use node::Node;
pub use packet::Packet;
pub use router::{DimensionOrder, DimensionOrderRouter, RouteStep, Router};
