//! Deterministic, explicitly listed injections.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use noc_core::{Coord, Cycle, MeshShape, NodeRng};

use crate::{Injection, TrafficError, TrafficModel, TrafficResult};

/// Injects exactly the listed `(cycle, source, destination)` packets.
///
/// An entry whose destination equals its source is reported as
/// [`Injection::SelfDraw`], so scenario tests can exercise the skip path.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTraffic {
    entries: BTreeMap<(Cycle, Coord), Coord>,
}

impl ScriptedTraffic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of entries.  A node may inject at most once per
    /// cycle; a second entry for the same `(cycle, source)` is an error.
    pub fn from_entries<I>(entries: I) -> TrafficResult<Self>
    where
        I: IntoIterator<Item = (Cycle, Coord, Coord)>,
    {
        let mut script = Self::new();
        for (cycle, source, destination) in entries {
            script.push(cycle, source, destination)?;
        }
        Ok(script)
    }

    /// Add one entry.
    pub fn push(&mut self, cycle: Cycle, source: Coord, destination: Coord) -> TrafficResult<()> {
        match self.entries.entry((cycle, source)) {
            Entry::Occupied(_) => Err(TrafficError::DuplicateInjection { cycle, node: source }),
            Entry::Vacant(slot) => {
                slot.insert(destination);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TrafficModel for ScriptedTraffic {
    fn inject(
        &self,
        source: Coord,
        now:    Cycle,
        _shape: MeshShape,
        _rng:   &mut NodeRng,
    ) -> Injection {
        match self.entries.get(&(now, source)) {
            None => Injection::Idle,
            Some(&dest) if dest == source => Injection::SelfDraw,
            Some(&dest) => Injection::To(dest),
        }
    }
}
