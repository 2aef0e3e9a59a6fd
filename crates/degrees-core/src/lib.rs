//! # degrees-core
//!
//! Degrees of separation between actors in a filmography graph that is
//! discovered lazily from a remote data source.
//!
//! The graph is bipartite (actors and movies) and never fully known: the
//! search fetches an actor's credits, then each movie's cast, level by
//! level, recording which actor discovered which. The shortest chain of
//! shared credits is then rebuilt from those records.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use degrees_core::config::DegreesConfig;
//! use degrees_core::search::{SearchOutcome, SeparationSearch};
//! use degrees_core::source::HttpDataSource;
//! use degrees_core::ActorId;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), degrees_core::Error> {
//! let config = DegreesConfig::load()?;
//! let source = HttpDataSource::new(&config.source)?;
//!
//! let outcome = SeparationSearch::with_config(&source, config.search)
//!     .run(&ActorId::from("amitabh-bachchan"), &ActorId::from("robert-de-niro"))
//!     .await?;
//!
//! if let SearchOutcome::Connected(sep) = outcome {
//!     println!("Degrees of Separation: {}", sep.degrees);
//!     for hop in sep.path()? {
//!         println!("{}: {} -> {}", hop.movie, hop.predecessor, hop.discovered);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::uninlined_format_args, clippy::manual_assert))]

pub mod config;
pub mod error;
pub mod model;
pub mod search;
pub mod source;

pub use config::{DegreesConfig, FrontierPolicy};
pub use error::{Error, Result};
pub use model::{Actor, ActorId, CastMember, Credit, Movie, MovieId, MovieRef};
pub use search::{Hop, SearchOutcome, SeparationSearch};
pub use source::{DataSource, MovieFetch};
