//! Relevance: the job matching and ranking engine behind the auto-apply
//! workflow.
//!
//! The engine is a pure library. Collaborators (retrieval, ingestion,
//! presentation) materialize [`JobPosting`] and [`UserPreferences`] values
//! and inject them; the engine never touches storage or the network. Every
//! operation is a deterministic function of its inputs plus one reference
//! instant read per ranking pass, so the engine is safe to call
//! concurrently from any number of request handlers without locking.

pub mod config;
pub mod errors;
pub mod matching;
pub mod models;

pub use config::{ScoringConfig, Weights};
pub use errors::EngineError;
pub use matching::pipeline::{MatchOutcome, Pagination, RankingPipeline};
pub use matching::scoring::RelevanceScorer;
pub use matching::selector::JobFilter;
pub use models::{JobPosting, RankedPage, ScoredJob, UserPreferences};
