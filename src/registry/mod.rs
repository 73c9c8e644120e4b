//! Registry search: the external company-name lookup and its offline stand-in

pub mod client;
pub mod fallback;

// Re-export main functionality
pub use client::RegistrySearchClient;
pub use fallback::SyntheticRegistry;

use crate::error::Result;
use crate::types::RegistryMatch;
use async_trait::async_trait;
use rand::RngCore;

/// A source of registered company names similar to a search term
#[async_trait]
pub trait RegistrySearch: Send + Sync {
    /// Search for up to `limit` companies resembling `term`.
    ///
    /// `similarity` on each returned match is relative to `term` as given.
    /// Randomness, where a source needs any, comes only from `rng`.
    async fn search(
        &self,
        term: &str,
        limit: usize,
        rng: &mut (dyn RngCore + Send),
    ) -> Result<Vec<RegistryMatch>>;

    /// Get the source name for logging
    fn source_name(&self) -> &'static str;
}
