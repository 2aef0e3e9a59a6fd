//! Level-synchronous BFS over the lazily fetched actor/movie graph.
//!
//! The graph is never materialized: each expanded actor costs one actor
//! fetch plus one movie fetch per credit, and every cast member not yet
//! expanded becomes a frontier entry with a recorded predecessor edge.
//! The search stops the moment the target is discovered, without
//! finishing the current movie, actor or level.

use serde::Serialize;
use tracing::{debug, info};

use super::frontier::{Frontier, VisitedSet};
use super::path::{reconstruct, Hop};
use super::recorder::{Edge, PathRecorder};
use crate::config::SearchConfig;
use crate::error::Result;
use crate::model::{ActorId, MovieRef};
use crate::source::{DataSource, MovieFetch};

/// Receives progress notifications while a search runs.
///
/// All methods default to no-ops; `()` ignores everything.
pub trait SearchObserver: Send {
    /// A new level started with `frontier_len` queued entries.
    fn on_level(&mut self, _degrees: usize, _frontier_len: usize) {}

    /// An actor record was fetched and is being expanded.
    fn on_expand(&mut self, _actor: &ActorId, _name: &str) {}

    /// A not-yet-expanded actor was reached through a shared movie.
    fn on_discover(&mut self, _actor: &ActorId) {}
}

impl SearchObserver for () {}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Levels started.
    pub levels: usize,
    /// Actor records fetched and expanded.
    pub actors_expanded: usize,
    /// Movie fetches issued, unavailable ones included.
    pub movies_fetched: usize,
    /// Movie fetches answered with "unavailable".
    pub movies_unavailable: usize,
    /// Distinct actors with at least one recorded predecessor.
    pub actors_discovered: usize,
    /// Frontier entries skipped or dropped as duplicates.
    pub duplicates_skipped: usize,
}

/// A successful search: the hop count and the recorded predecessor edges.
#[derive(Debug, Clone)]
pub struct Separation {
    /// Levels started when the target was found (1 when start == end).
    pub degrees: usize,
    /// Predecessor edges recorded during the search.
    pub recorder: PathRecorder,
    /// Search statistics.
    pub stats: SearchStats,
    start: ActorId,
    end: ActorId,
}

impl Separation {
    /// Actor the search started from.
    #[must_use]
    pub fn start(&self) -> &ActorId {
        &self.start
    }

    /// Actor the search looked for.
    #[must_use]
    pub fn end(&self) -> &ActorId {
        &self.end
    }

    /// Reconstructs the connecting path in `start → end` order.
    pub fn path(&self) -> Result<Vec<Hop>> {
        reconstruct(&self.recorder, &self.start, &self.end)
    }
}

/// Terminal outcome of a search that did not fail.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// The target was found.
    Connected(Separation),
    /// The frontier was exhausted without reaching the target.
    NotConnected {
        /// Search statistics.
        stats: SearchStats,
    },
    /// The configured depth limit stopped the search.
    DepthLimitReached {
        /// Levels completed before stopping.
        degrees: usize,
        /// Search statistics.
        stats: SearchStats,
    },
}

impl SearchOutcome {
    /// Returns the degrees of separation if the actors are connected.
    #[must_use]
    pub fn degrees(&self) -> Option<usize> {
        match self {
            Self::Connected(sep) => Some(sep.degrees),
            _ => None,
        }
    }

    /// Returns the search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        match self {
            Self::Connected(sep) => &sep.stats,
            Self::NotConnected { stats } | Self::DepthLimitReached { stats, .. } => stats,
        }
    }
}

/// Degrees-of-separation search over a [`DataSource`].
///
/// # Example
///
/// ```rust
/// use degrees_core::search::SeparationSearch;
/// use degrees_core::source::InMemoryDataSource;
/// use degrees_core::ActorId;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), degrees_core::Error> {
/// let mut source = InMemoryDataSource::new();
/// source.add_movie("m1", "First", &[("a", "Lead"), ("b", "Friend")]);
///
/// let outcome = SeparationSearch::new(&source)
///     .run(&ActorId::from("a"), &ActorId::from("b"))
///     .await?;
/// assert_eq!(outcome.degrees(), Some(1));
/// # Ok(())
/// # }
/// ```
pub struct SeparationSearch<'a, S: DataSource + ?Sized> {
    source: &'a S,
    config: SearchConfig,
}

impl<'a, S: DataSource + ?Sized> SeparationSearch<'a, S> {
    /// Creates a search with default settings.
    #[must_use]
    pub fn new(source: &'a S) -> Self {
        Self::with_config(source, SearchConfig::default())
    }

    /// Creates a search with the given settings.
    #[must_use]
    pub fn with_config(source: &'a S, config: SearchConfig) -> Self {
        Self { source, config }
    }

    /// Searches for the shortest chain of shared credits from `start` to `end`.
    pub async fn run(&self, start: &ActorId, end: &ActorId) -> Result<SearchOutcome> {
        self.run_observed(start, end, &mut ()).await
    }

    /// Like [`run`](Self::run), reporting progress to `observer`.
    ///
    /// An actor fetch failure, or a movie fetch failing with anything other
    /// than "unavailable", aborts the search and is returned as is.
    pub async fn run_observed(
        &self,
        start: &ActorId,
        end: &ActorId,
        observer: &mut dyn SearchObserver,
    ) -> Result<SearchOutcome> {
        info!(
            "Searching {} -> {} via {} source",
            start,
            end,
            self.source.source_type()
        );

        let mut session = Session::new(start.clone(), &self.config);

        while !session.frontier.is_empty() {
            if let Some(limit) = self.config.depth_limit() {
                if session.degrees >= limit {
                    // Only expanded actors are left: the next level would
                    // skip them all, so the graph is exhausted.
                    if session.frontier_spent() {
                        session.stats.duplicates_skipped += session.frontier.len();
                        break;
                    }
                    info!("Depth limit {} reached", limit);
                    let stats = session.finish_stats();
                    return Ok(SearchOutcome::DepthLimitReached {
                        degrees: session.degrees,
                        stats,
                    });
                }
            }

            let level_size = session.frontier.len();
            session.degrees += 1;
            session.stats.levels = session.degrees;
            info!("Level {}: {} frontier entries", session.degrees, level_size);
            observer.on_level(session.degrees, level_size);

            for _ in 0..level_size {
                let Some(current) = session.frontier.pop() else {
                    break;
                };

                if current == *end {
                    return Ok(session.connected(end));
                }

                if !session.visited.insert(current.clone()) {
                    session.stats.duplicates_skipped += 1;
                    continue;
                }

                if session.expand(self.source, &current, end, observer).await? {
                    return Ok(session.connected(end));
                }
            }
        }

        info!("Frontier exhausted after {} levels", session.degrees);
        Ok(SearchOutcome::NotConnected {
            stats: session.finish_stats(),
        })
    }
}

/// Searches with default settings.
pub async fn search<S: DataSource + ?Sized>(
    source: &S,
    start: &ActorId,
    end: &ActorId,
) -> Result<SearchOutcome> {
    SeparationSearch::new(source).run(start, end).await
}

/// State owned by one search invocation.
struct Session {
    start: ActorId,
    frontier: Frontier,
    visited: VisitedSet,
    recorder: PathRecorder,
    stats: SearchStats,
    degrees: usize,
}

impl Session {
    fn new(start: ActorId, config: &SearchConfig) -> Self {
        Self {
            frontier: Frontier::new(start.clone(), config.frontier_policy),
            start,
            visited: VisitedSet::new(),
            recorder: PathRecorder::new(),
            stats: SearchStats::default(),
            degrees: 0,
        }
    }

    /// Expands one actor. Returns `true` as soon as `end` is discovered.
    async fn expand<S: DataSource + ?Sized>(
        &mut self,
        source: &S,
        current: &ActorId,
        end: &ActorId,
        observer: &mut dyn SearchObserver,
    ) -> Result<bool> {
        let actor = source.fetch_actor(current).await?;
        self.stats.actors_expanded += 1;
        debug!(
            "Expanding {} ({}): {} credits",
            current,
            actor.name,
            actor.credits.len()
        );
        observer.on_expand(current, &actor.name);

        for credit in actor.credits {
            self.stats.movies_fetched += 1;
            let movie = match source.fetch_movie(&credit.movie_id).await? {
                MovieFetch::Found(movie) => movie,
                MovieFetch::Unavailable => {
                    self.stats.movies_unavailable += 1;
                    debug!("Skipping unavailable movie {}", credit.movie_id);
                    continue;
                }
            };

            let movie_ref = MovieRef::new(credit.movie_id, &movie);
            for member in movie.cast {
                if self.visited.contains(&member.actor_id) {
                    continue;
                }

                if !self.frontier.push(member.actor_id.clone()) {
                    self.stats.duplicates_skipped += 1;
                }
                self.recorder.record(
                    member.actor_id.clone(),
                    current.clone(),
                    Edge {
                        movie: movie_ref.clone(),
                        discovered_role: member.role,
                        predecessor_role: credit.role.clone(),
                    },
                );
                observer.on_discover(&member.actor_id);

                if member.actor_id == *end {
                    info!(
                        "Found {} at {} degrees via {}",
                        end, self.degrees, movie_ref.name
                    );
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }

    /// Returns `true` if every queued entry was already expanded.
    fn frontier_spent(&self) -> bool {
        self.frontier.iter().all(|id| self.visited.contains(id))
    }

    fn finish_stats(&mut self) -> SearchStats {
        self.stats.actors_discovered = self.recorder.len();
        self.stats
    }

    fn connected(mut self, end: &ActorId) -> SearchOutcome {
        let stats = self.finish_stats();
        SearchOutcome::Connected(Separation {
            degrees: self.degrees,
            recorder: self.recorder,
            stats,
            start: self.start,
            end: end.clone(),
        })
    }
}
