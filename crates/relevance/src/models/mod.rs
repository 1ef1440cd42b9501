pub mod job;
pub mod preferences;
pub mod scored;

pub use job::JobPosting;
pub use preferences::UserPreferences;
pub use scored::{RankedPage, ScoredJob};
