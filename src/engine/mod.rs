//! Name check pipeline: conflict resolution, verdicts and the checker entry points

pub mod checker;
pub mod recommend;
pub mod resolver;

// Re-export main functionality
pub use checker::NameChecker;
pub use recommend::recommend;
pub use resolver::ConflictResolver;
