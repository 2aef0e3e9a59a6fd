//! BFS bookkeeping: the queue of actors awaiting expansion and the set of
//! actors already expanded.

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use crate::config::FrontierPolicy;
use crate::model::ActorId;

/// Queue of actors pending expansion, drained one level at a time.
#[derive(Debug)]
pub struct Frontier {
    queue: VecDeque<ActorId>,
    pending: FxHashSet<ActorId>,
    policy: FrontierPolicy,
}

impl Frontier {
    /// Creates a frontier holding only `start`.
    #[must_use]
    pub fn new(start: ActorId, policy: FrontierPolicy) -> Self {
        let mut frontier = Self {
            queue: VecDeque::new(),
            pending: FxHashSet::default(),
            policy,
        };
        frontier.push(start);
        frontier
    }

    /// Queues an actor. Returns `false` if the policy dropped it as a duplicate.
    pub fn push(&mut self, id: ActorId) -> bool {
        if self.policy == FrontierPolicy::Deduplicate && !self.pending.insert(id.clone()) {
            return false;
        }
        self.queue.push_back(id);
        true
    }

    /// Removes the next actor.
    pub fn pop(&mut self) -> Option<ActorId> {
        let id = self.queue.pop_front()?;
        if self.policy == FrontierPolicy::Deduplicate {
            self.pending.remove(&id);
        }
        Some(id)
    }

    /// Iterates over queued entries in dequeue order.
    pub fn iter(&self) -> impl Iterator<Item = &ActorId> {
        self.queue.iter()
    }

    /// Number of queued entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Actors already expanded. Grows monotonically.
#[derive(Debug, Default)]
pub struct VisitedSet {
    ids: FxHashSet<ActorId>,
}

impl VisitedSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an actor visited. Returns `false` if it already was.
    pub fn insert(&mut self, id: ActorId) -> bool {
        self.ids.insert(id)
    }

    /// Returns `true` if the actor was expanded.
    #[must_use]
    pub fn contains(&self, id: &ActorId) -> bool {
        self.ids.contains(id)
    }

    /// Number of expanded actors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing was expanded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_duplicates_keeps_every_entry() {
        let mut frontier = Frontier::new(ActorId::from("a"), FrontierPolicy::AllowDuplicates);
        assert!(frontier.push(ActorId::from("b")));
        assert!(frontier.push(ActorId::from("b")));
        assert_eq!(frontier.len(), 3);
        let queued: Vec<&str> = frontier.iter().map(ActorId::as_str).collect();
        assert_eq!(queued, vec!["a", "b", "b"]);
        assert_eq!(frontier.pop(), Some(ActorId::from("a")));
        assert_eq!(frontier.pop(), Some(ActorId::from("b")));
        assert_eq!(frontier.pop(), Some(ActorId::from("b")));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_deduplicate_drops_pending_entries() {
        let mut frontier = Frontier::new(ActorId::from("a"), FrontierPolicy::Deduplicate);
        assert!(frontier.push(ActorId::from("b")));
        assert!(!frontier.push(ActorId::from("b")));
        assert!(!frontier.push(ActorId::from("a")));
        assert_eq!(frontier.len(), 2);

        // Once dequeued, an actor may be queued again.
        assert_eq!(frontier.pop(), Some(ActorId::from("a")));
        assert!(frontier.push(ActorId::from("a")));
    }

    #[test]
    fn test_visited_set_is_monotonic() {
        let mut visited = VisitedSet::new();
        assert!(visited.is_empty());
        assert!(visited.insert(ActorId::from("a")));
        assert!(!visited.insert(ActorId::from("a")));
        assert!(visited.contains(&ActorId::from("a")));
        assert_eq!(visited.len(), 1);
    }
}
