//! HTTP data source serving JSON actor and movie records.
//!
//! Records are addressed as `<base_url>/<id>`. Actor documents carry a
//! `movies` list, movie documents a `cast` list; every entry is
//! `{ "url", "name", "role" }` where `url` is the linked record's id.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{DataSource, MovieFetch};
use crate::config::SourceConfig;
use crate::error::{Error, Result};
use crate::model::{Actor, ActorId, CastMember, Credit, Movie, MovieId};

/// Fetches records from a remote JSON source.
pub struct HttpDataSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDataSource {
    /// Creates a source from validated configuration.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Returns the base URL records are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id.trim_start_matches('/'))
    }

    async fn get(&self, id: &str) -> Result<reqwest::Response> {
        let url = self.record_url(id);
        debug!("GET {}", url);
        Ok(self.client.get(&url).send().await?)
    }
}

#[derive(Debug, Deserialize)]
struct ActorDocument {
    name: String,
    #[serde(default)]
    movies: Vec<LinkEntry>,
}

#[derive(Debug, Deserialize)]
struct MovieDocument {
    name: String,
    #[serde(default)]
    cast: Vec<LinkEntry>,
}

#[derive(Debug, Deserialize)]
struct LinkEntry {
    url: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    role: String,
}

impl From<ActorDocument> for Actor {
    fn from(doc: ActorDocument) -> Self {
        Self {
            name: doc.name,
            credits: doc
                .movies
                .into_iter()
                .map(|m| Credit {
                    movie_id: MovieId::from(m.url),
                    role: m.role,
                })
                .collect(),
        }
    }
}

impl From<MovieDocument> for Movie {
    fn from(doc: MovieDocument) -> Self {
        Self {
            name: doc.name,
            cast: doc
                .cast
                .into_iter()
                .map(|c| CastMember {
                    actor_id: ActorId::from(c.url),
                    name: c.name,
                    role: c.role,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    fn source_type(&self) -> &'static str {
        "http"
    }

    async fn fetch_actor(&self, id: &ActorId) -> Result<Actor> {
        let resp = self.get(id.as_str()).await?;

        if !resp.status().is_success() {
            return Err(Error::Status {
                kind: "actor",
                id: id.to_string(),
                status: resp.status().as_u16(),
            });
        }

        let body = resp.bytes().await?;
        let doc: ActorDocument = serde_json::from_slice(&body)?;
        Ok(doc.into())
    }

    async fn fetch_movie(&self, id: &MovieId) -> Result<MovieFetch> {
        let resp = self.get(id.as_str()).await?;

        // Single attempt: any non-success status means the movie is not served.
        if !resp.status().is_success() {
            debug!("Movie {} unavailable: {}", id, resp.status());
            return Ok(MovieFetch::Unavailable);
        }

        let body = resp.bytes().await?;
        let doc: MovieDocument = serde_json::from_slice(&body)?;
        Ok(MovieFetch::Found(doc.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base_url: &str) -> HttpDataSource {
        let config = SourceConfig {
            base_url: base_url.to_string(),
            ..SourceConfig::default()
        };
        HttpDataSource::new(&config).unwrap()
    }

    #[test]
    fn test_record_url_joins_single_slash() {
        let src = source("https://data.example.com/");
        assert_eq!(src.base_url(), "https://data.example.com");
        assert_eq!(
            src.record_url("amitabh-bachchan"),
            "https://data.example.com/amitabh-bachchan"
        );
        assert_eq!(src.record_url("/sholay"), "https://data.example.com/sholay");
    }

    #[test]
    fn test_actor_document_conversion() {
        let json = r#"{
            "url": "amitabh-bachchan",
            "type": "Person",
            "name": "Amitabh Bachchan",
            "movies": [
                {"name": "Sholay", "url": "sholay", "role": "Actor"},
                {"name": "Deewaar", "url": "deewaar", "role": "Actor"}
            ]
        }"#;
        let actor: Actor = serde_json::from_str::<ActorDocument>(json).unwrap().into();
        assert_eq!(actor.name, "Amitabh Bachchan");
        assert_eq!(actor.credits.len(), 2);
        assert_eq!(actor.credits[1].movie_id.as_str(), "deewaar");
        assert_eq!(actor.credits[1].role, "Actor");
    }

    #[test]
    fn test_movie_document_missing_cast_is_empty() {
        let movie: Movie = serde_json::from_str::<MovieDocument>(r#"{"name": "Short"}"#)
            .unwrap()
            .into();
        assert_eq!(movie.name, "Short");
        assert!(movie.cast.is_empty());
    }
}
