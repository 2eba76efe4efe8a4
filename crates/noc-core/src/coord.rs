//! Mesh coordinates and the square mesh shape.
//!
//! Nodes are stored row-major: `index = y * size + x`.  Every crate that
//! keeps per-node arrays (the grid, the per-node RNGs) uses
//! [`MeshShape::index_of`] so the arrays line up.

use std::fmt;

use crate::{NocError, NocResult};

// ── Coord ─────────────────────────────────────────────────────────────────────

/// A node position in the mesh.  `x` is the column, `y` the row.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Hop distance on the mesh: |Δx| + |Δy|.
    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Coord {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        Coord { x, y }
    }
}

// ── MeshShape ─────────────────────────────────────────────────────────────────

/// Dimension of a square `size × size` mesh.
///
/// `MeshShape` is `Copy` and holds no heap data; pass it by value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct MeshShape {
    size: u32,
}

impl MeshShape {
    /// Create a shape, rejecting an empty mesh or one whose node count
    /// overflows `usize`.
    pub fn new(size: u32) -> NocResult<Self> {
        if size == 0 {
            return Err(NocError::Config("grid_size must be at least 1".into()));
        }
        (size as usize)
            .checked_mul(size as usize)
            .ok_or_else(|| NocError::Config(format!("grid_size {size} is too large to index")))?;
        Ok(Self { size })
    }

    #[inline]
    pub fn size(self) -> u32 {
        self.size
    }

    /// Total number of nodes (`size²`).
    #[inline]
    pub fn node_count(self) -> usize {
        self.size as usize * self.size as usize
    }

    #[inline]
    pub fn contains(self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// Row-major index of `coord`, or `None` if it lies outside the mesh.
    #[inline]
    pub fn index_of(self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.y as usize * self.size as usize + coord.x as usize)
    }

    /// Like [`index_of`](Self::index_of) but reports the offending coordinate.
    pub fn checked_index(self, coord: Coord) -> NocResult<usize> {
        self.index_of(coord)
            .ok_or(NocError::OutsideMesh { coord, size: self.size })
    }

    /// Inverse of [`index_of`](Self::index_of).
    ///
    /// # Panics
    /// Panics in debug mode if `index >= node_count()`.
    #[inline]
    pub fn coord_at(self, index: usize) -> Coord {
        debug_assert!(index < self.node_count());
        let size = self.size as usize;
        Coord::new((index % size) as u32, (index / size) as u32)
    }

    /// All coordinates in row-major order.
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        (0..self.node_count()).map(move |i| self.coord_at(i))
    }
}

impl fmt::Display for MeshShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} mesh", self.size, self.size)
    }
}
