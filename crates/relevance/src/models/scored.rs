use serde::{Deserialize, Serialize};

use super::job::JobPosting;

/// A job paired with its relevance score. Transient: computed per request
/// and handed to the presentation layer, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredJob {
    pub job: JobPosting,
    /// Relevance in [0.0, 100.0], rounded to two decimals.
    pub score: f64,
}

/// One page of scored jobs plus the pre-pagination candidate count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedPage {
    pub total: usize,
    pub items: Vec<ScoredJob>,
}
