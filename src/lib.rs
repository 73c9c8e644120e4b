//! Company Forge - company name availability checking
//!
//! Validates proposed company names against registration naming conventions,
//! searches a company registry for conflicting names and suggests
//! alternatives.

pub mod engine;
pub mod error;
pub mod name;
pub mod registry;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use error::{CompanyForgeError, Result};
pub use types::{
    BatchConfig, ConflictReport, ConventionReport, FallbackConfig, GenerationConfig,
    NameCheckResult, RegistrationStatus, RegistryConfig, RegistryMatch, ResolverConfig, Verdict,
};

// Re-export main functionality
pub use engine::{recommend, ConflictResolver, NameChecker};
pub use name::{normalize, similarity, AlternativeNameGenerator, ConventionValidator};
pub use registry::{RegistrySearch, RegistrySearchClient, SyntheticRegistry};
pub use session::{BatchSummary, HistoryEntry, ScoreBand, SearchHistory, SessionReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
