//! Data sources that resolve actor and movie identifiers to records.
//!
//! The search engine only talks to the [`DataSource`] trait. Two
//! implementations ship with the crate:
//!
//! - [`HttpDataSource`]: fetches JSON records from a base URL.
//! - [`InMemoryDataSource`]: a hand-built graph, used by tests and demos.

mod http;
mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Actor, ActorId, Movie, MovieId};

pub use http::HttpDataSource;
pub use memory::InMemoryDataSource;

/// Outcome of a movie fetch that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieFetch {
    /// The movie record was fetched and decoded.
    Found(Movie),
    /// The source declined to serve this movie (e.g. access denied).
    /// Not an error: the credit simply yields no edges.
    Unavailable,
}

/// Resolves identifiers to filmography records.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Short name used in logs.
    fn source_type(&self) -> &'static str;

    /// Fetches an actor and their credits.
    ///
    /// There is no "not found" outcome at this boundary: a missing actor
    /// is an error.
    async fn fetch_actor(&self, id: &ActorId) -> Result<Actor>;

    /// Fetches a movie and its cast.
    async fn fetch_movie(&self, id: &MovieId) -> Result<MovieFetch>;
}
