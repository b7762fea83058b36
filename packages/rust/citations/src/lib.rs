//! Citation-graph and author-metadata clients.
//!
//! This crate provides:
//! - [`CitationClient`] — lists works citing (or cited by) a DOI via the
//!   OpenCitations COCI index
//! - [`AuthorClient`] — resolves first/last author given names via the
//!   Crossref works API

pub mod authors;
pub mod index;

pub use authors::AuthorClient;
pub use index::CitationClient;

use std::time::Duration;

use gendercite_shared::{GenderciteError, Result};

/// User-Agent string for all outgoing requests.
const USER_AGENT: &str = concat!("gendercite/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client used by both API clients.
pub(crate) fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| GenderciteError::Network(format!("failed to build HTTP client: {e}")))
}
