//! Filmography records: actors, movies and their identifiers.
//!
//! Identifiers are opaque strings in the data source's addressing scheme
//! (for the default source, the URL slug of the record). Records are
//! fetched lazily and only live for the expansion step that requested them.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of an actor record.
    ActorId
);

string_id!(
    /// Identifier of a movie record.
    MovieId
);

/// One entry of an actor's filmography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    /// Movie the actor appeared in.
    pub movie_id: MovieId,
    /// The actor's role in that movie.
    pub role: String,
}

/// An actor and their filmography, in the order the source lists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Display name.
    pub name: String,
    /// Movie credits.
    pub credits: Vec<Credit>,
}

/// One entry of a movie's cast list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    /// Actor identifier.
    pub actor_id: ActorId,
    /// Display name.
    pub name: String,
    /// Role in the movie.
    pub role: String,
}

/// A movie and its cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Display name.
    pub name: String,
    /// Cast list.
    pub cast: Vec<CastMember>,
}

/// The part of a movie an edge keeps once the record itself is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRef {
    /// Movie identifier.
    pub id: MovieId,
    /// Display name.
    pub name: String,
}

impl MovieRef {
    /// Builds a reference to a fetched movie.
    #[must_use]
    pub fn new(id: MovieId, movie: &Movie) -> Self {
        Self {
            id,
            name: movie.name.clone(),
        }
    }
}
