//! Degrees-of-separation search.
//!
//! Provides the BFS engine, its bookkeeping (frontier, visited set,
//! predecessor recorder) and path reconstruction.
//!
//! # Example
//!
//! ```rust
//! use degrees_core::search::{search, SearchOutcome};
//! use degrees_core::source::InMemoryDataSource;
//! use degrees_core::ActorId;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), degrees_core::Error> {
//! let mut source = InMemoryDataSource::new();
//! source.add_movie("m1", "First", &[("a", "Lead"), ("b", "Friend")]);
//! source.add_movie("m2", "Second", &[("b", "Hero"), ("c", "Sidekick")]);
//!
//! let SearchOutcome::Connected(sep) =
//!     search(&source, &ActorId::from("a"), &ActorId::from("c")).await?
//! else {
//!     panic!("a and c share b");
//! };
//! assert_eq!(sep.degrees, 2);
//! assert_eq!(sep.path()?.len(), 2);
//! # Ok(())
//! # }
//! ```

mod engine;
mod frontier;
mod path;
mod recorder;


pub use engine::{search, SearchObserver, SearchOutcome, SearchStats, Separation, SeparationSearch};
pub use frontier::{Frontier, VisitedSet};
pub use path::{reconstruct, Hop};
pub use recorder::{Edge, PathRecorder};
