//! In-memory data source over a hand-built filmography.

use async_trait::async_trait;
use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};

use super::{DataSource, MovieFetch};
use crate::error::{Error, Result};
use crate::model::{Actor, ActorId, CastMember, Credit, Movie, MovieId};

/// A data source backed by maps, with fetch tracing and failure injection.
///
/// # Example
///
/// ```rust
/// use degrees_core::source::InMemoryDataSource;
///
/// let mut source = InMemoryDataSource::new();
/// source.add_movie("m1", "First", &[("a", "Lead"), ("b", "Villain")]);
/// assert_eq!(source.actor_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDataSource {
    actors: FxHashMap<ActorId, Actor>,
    movies: FxHashMap<MovieId, Movie>,
    unavailable: FxHashSet<MovieId>,
    failing: FxHashSet<ActorId>,
    actor_fetches: Mutex<Vec<ActorId>>,
    movie_fetches: Mutex<Vec<MovieId>>,
}

impl InMemoryDataSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an actor with no credits, or renames an existing one.
    pub fn add_actor(&mut self, id: &str, name: &str) {
        self.actors
            .entry(ActorId::from(id))
            .and_modify(|a| a.name = name.to_string())
            .or_insert_with(|| Actor {
                name: name.to_string(),
                credits: Vec::new(),
            });
    }

    /// Adds a movie and credits every cast member with it.
    ///
    /// Unknown cast members are created with their id as name.
    pub fn add_movie(&mut self, id: &str, name: &str, cast: &[(&str, &str)]) {
        let movie_id = MovieId::from(id);
        let mut members = Vec::with_capacity(cast.len());

        for &(actor_id, role) in cast {
            let actor = self
                .actors
                .entry(ActorId::from(actor_id))
                .or_insert_with(|| Actor {
                    name: actor_id.to_string(),
                    credits: Vec::new(),
                });
            actor.credits.push(Credit {
                movie_id: movie_id.clone(),
                role: role.to_string(),
            });
            members.push(CastMember {
                actor_id: ActorId::from(actor_id),
                name: actor.name.clone(),
                role: role.to_string(),
            });
        }

        self.movies.insert(
            movie_id,
            Movie {
                name: name.to_string(),
                cast: members,
            },
        );
    }

    /// Credits an actor with a movie without adding the movie record.
    pub fn add_credit(&mut self, actor_id: &str, movie_id: &str, role: &str) {
        self.actors
            .entry(ActorId::from(actor_id))
            .or_insert_with(|| Actor {
                name: actor_id.to_string(),
                credits: Vec::new(),
            })
            .credits
            .push(Credit {
                movie_id: MovieId::from(movie_id),
                role: role.to_string(),
            });
    }

    /// Makes every fetch of this movie report [`MovieFetch::Unavailable`].
    pub fn mark_unavailable(&mut self, movie_id: &str) {
        self.unavailable.insert(MovieId::from(movie_id));
    }

    /// Makes every fetch of this actor fail.
    pub fn fail_actor(&mut self, actor_id: &str) {
        self.failing.insert(ActorId::from(actor_id));
    }

    /// Returns the number of known actors.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Returns the actor ids fetched so far, in fetch order.
    #[must_use]
    pub fn actor_fetches(&self) -> Vec<ActorId> {
        self.actor_fetches.lock().clone()
    }

    /// Returns the movie ids fetched so far, in fetch order.
    #[must_use]
    pub fn movie_fetches(&self) -> Vec<MovieId> {
        self.movie_fetches.lock().clone()
    }
}

#[async_trait]
impl DataSource for InMemoryDataSource {
    fn source_type(&self) -> &'static str {
        "memory"
    }

    async fn fetch_actor(&self, id: &ActorId) -> Result<Actor> {
        self.actor_fetches.lock().push(id.clone());

        if self.failing.contains(id) {
            return Err(Error::Source(format!("injected failure for actor '{id}'")));
        }

        self.actors
            .get(id)
            .cloned()
            .ok_or_else(|| Error::Source(format!("unknown actor '{id}'")))
    }

    async fn fetch_movie(&self, id: &MovieId) -> Result<MovieFetch> {
        self.movie_fetches.lock().push(id.clone());

        if self.unavailable.contains(id) {
            return Ok(MovieFetch::Unavailable);
        }

        self.movies
            .get(id)
            .cloned()
            .map(MovieFetch::Found)
            .ok_or_else(|| Error::Source(format!("unknown movie '{id}'")))
    }
}
