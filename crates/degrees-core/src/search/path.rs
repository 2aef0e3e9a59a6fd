//! Path reconstruction from recorded predecessor edges.

use serde::{Deserialize, Serialize};

use super::recorder::PathRecorder;
use crate::error::{Error, Result};
use crate::model::ActorId;

/// One hop of a reconstructed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    /// Name of the shared movie.
    pub movie: String,
    /// Role of the predecessor actor in the movie.
    pub predecessor_role: String,
    /// Actor the hop starts from.
    pub predecessor: ActorId,
    /// Role of the discovered actor in the movie.
    pub discovered_role: String,
    /// Actor the hop leads to.
    pub discovered: ActorId,
}

/// Walks the recorder back from `end` to `start` and returns the hops in
/// `start → end` order.
///
/// When an actor was discovered by several predecessors, the one recorded
/// first is followed. Returns an empty path when `start == end`.
pub fn reconstruct(recorder: &PathRecorder, start: &ActorId, end: &ActorId) -> Result<Vec<Hop>> {
    let mut hops = Vec::new();
    let mut cursor = end;

    while cursor != start {
        // Each step moves to an actor expanded strictly earlier, so a walk
        // longer than the recorder means the recorder is inconsistent.
        if hops.len() > recorder.len() {
            return Err(Error::BrokenPath(cursor.clone()));
        }

        let (predecessor, edge) = recorder
            .first_predecessor(cursor)
            .ok_or_else(|| Error::BrokenPath(cursor.clone()))?;

        hops.push(Hop {
            movie: edge.movie.name.clone(),
            predecessor_role: edge.predecessor_role.clone(),
            predecessor: predecessor.clone(),
            discovered_role: edge.discovered_role.clone(),
            discovered: cursor.clone(),
        });
        cursor = predecessor;
    }

    hops.reverse();
    Ok(hops)
}
