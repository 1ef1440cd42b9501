use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::EngineError;

/// A job posting as materialized by the retrieval layer.
///
/// Read-only from the engine's perspective; ingestion owns mutation.
/// Optional fields are modeled explicitly: a posting either has a value or
/// a well-defined empty state, never an ambiguous absent attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Ingestion resolves an unknown remote status to false.
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub salary_min: Option<u32>,
    #[serde(default)]
    pub salary_max: Option<u32>,
    /// Absent means unknown recency; the scorer treats unknown as fresh.
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
    /// Always a collection, possibly empty.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Origin label (e.g. "linkedin", "indeed"). Never affects the score.
    #[serde(default)]
    pub source: Option<String>,
    /// Canonical URL. Never affects the score.
    #[serde(default)]
    pub url: Option<String>,
}

impl JobPosting {
    /// Checks the caller contract: title and company are required.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.title.trim().is_empty() {
            return Err(EngineError::InvalidInput(format!(
                "job {} has an empty title",
                self.id
            )));
        }
        if self.company.trim().is_empty() {
            return Err(EngineError::InvalidInput(format!(
                "job {} has an empty company",
                self.id
            )));
        }
        Ok(())
    }

    /// Title, description, and tags joined into one text blob so the
    /// tokenizer sees all fields at once and cross-field overlap works.
    /// Tags are space-joined; multi-word tags contribute word tokens.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description.as_deref().unwrap_or(""),
            self.tags.join(" ")
        )
    }
}
