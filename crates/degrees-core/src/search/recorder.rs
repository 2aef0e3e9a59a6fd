//! Predecessor edges observed while discovering actors.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::{ActorId, MovieRef};

/// Why a discovered actor is linked to the actor that discovered them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// The shared movie.
    pub movie: MovieRef,
    /// Role of the discovered actor in the movie.
    pub discovered_role: String,
    /// Role of the predecessor actor in the movie.
    pub predecessor_role: String,
}

/// Multimap `discovered → (predecessor → edge)`.
///
/// Predecessors are only ever added, and those of one actor keep the order
/// they were first recorded in. Recording an existing `(discovered,
/// predecessor)` pair again replaces its edge in place, so the last shared
/// movie seen between the two actors is the one reported.
#[derive(Debug, Clone, Default)]
pub struct PathRecorder {
    entries: FxHashMap<ActorId, IndexMap<ActorId, Edge>>,
}

impl PathRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `predecessor` discovered `discovered` via `edge`.
    ///
    /// Returns `true` if the pair was new, `false` if its edge was replaced.
    pub fn record(&mut self, discovered: ActorId, predecessor: ActorId, edge: Edge) -> bool {
        self.entries
            .entry(discovered)
            .or_default()
            .insert(predecessor, edge)
            .is_none()
    }

    /// Returns all recorded predecessors of an actor, in recording order.
    #[must_use]
    pub fn predecessors(&self, discovered: &ActorId) -> Option<&IndexMap<ActorId, Edge>> {
        self.entries.get(discovered)
    }

    /// Returns the first predecessor recorded for an actor.
    #[must_use]
    pub fn first_predecessor(&self, discovered: &ActorId) -> Option<(&ActorId, &Edge)> {
        self.entries.get(discovered)?.first()
    }

    /// Returns `true` if the actor has at least one recorded predecessor.
    #[must_use]
    pub fn contains(&self, discovered: &ActorId) -> bool {
        self.entries.contains_key(discovered)
    }

    /// Number of discovered actors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
