//! Candidate selection: structural filters over the job collection and
//! the coarse preference pre-filter that bounds the scoring workload.
//!
//! Everything here is a pure predicate: no mutation, idempotent, and
//! order-independent, so filters can be applied in any order or repeated
//! without changing the surviving set.

use chrono::{DateTime, Duration, Utc};

use crate::models::{JobPosting, UserPreferences};

// ────────────────────────────────────────────────────────────────────────────
// Structural filter
// ────────────────────────────────────────────────────────────────────────────

/// Independent optional predicates over the job collection.
///
/// Each predicate left unset accepts every job; set predicates combine
/// with AND. An empty list predicate is treated as unset.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Case-insensitive substring on the job title.
    pub title: Option<String>,
    /// Case-insensitive substring on the company name.
    pub company: Option<String>,
    /// OR across the list: any one location matching accepts the job.
    pub locations: Option<Vec<String>>,
    /// Exact match on the remote flag.
    pub remote: Option<bool>,
    /// Met when either salary bound reaches the threshold.
    pub min_salary: Option<u32>,
    /// Jobs with an unknown posting date always pass this window.
    pub posted_within_days: Option<i64>,
    /// Every requested tag must appear, case-insensitively, inside some
    /// job tag.
    pub tags: Option<Vec<String>>,
}

impl JobFilter {
    pub fn matches(&self, job: &JobPosting, now: DateTime<Utc>) -> bool {
        if let Some(title) = &self.title {
            if !contains_ci(&job.title, title) {
                return false;
            }
        }

        if let Some(company) = &self.company {
            if !contains_ci(&job.company, company) {
                return false;
            }
        }

        if let Some(locations) = &self.locations {
            if !locations.is_empty() {
                let job_location = job.location.as_deref().unwrap_or("");
                if !locations.iter().any(|l| contains_ci(job_location, l)) {
                    return false;
                }
            }
        }

        if let Some(remote) = self.remote {
            if job.remote != remote {
                return false;
            }
        }

        if let Some(min_salary) = self.min_salary {
            if !salary_meets(job, min_salary) {
                return false;
            }
        }

        if let Some(days) = self.posted_within_days {
            if days > 0 {
                let cutoff = now - Duration::days(days);
                // Unknown posting date is never excluded by recency.
                if let Some(posted_at) = job.posted_at {
                    if posted_at < cutoff {
                        return false;
                    }
                }
            }
        }

        if let Some(tags) = &self.tags {
            let all_present = tags
                .iter()
                .all(|t| job.tags.iter().any(|jt| contains_ci(jt, t)));
            if !all_present {
                return false;
            }
        }

        true
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Preference pre-filter (matching path only)
// ────────────────────────────────────────────────────────────────────────────

/// Coarse preference gate applied before the scoring pass.
///
/// Preferred titles (substring in the job title) and included keywords
/// (substring in the description) form one OR-set; when that set is empty
/// no title/keyword gating happens at all. Remote-only, preferred
/// locations, and a positive minimum salary are additional AND gates.
/// The gate exists to shrink the candidate set, not to rank: it is a
/// recall-preserving filter, deliberately looser than the scorer.
pub fn passes_preference_prefilter(job: &JobPosting, prefs: &UserPreferences) -> bool {
    let mut gated = false;
    let mut hit = false;

    if !prefs.job_titles.is_empty() {
        gated = true;
        hit = prefs.job_titles.iter().any(|t| contains_ci(&job.title, t));
    }
    if !hit && !prefs.keywords_include.is_empty() {
        gated = true;
        let description = job.description.as_deref().unwrap_or("");
        hit = prefs
            .keywords_include
            .iter()
            .any(|k| contains_ci(description, k));
    }
    if gated && !hit {
        return false;
    }

    if prefs.remote_only && !job.remote {
        return false;
    }

    if !prefs.locations.is_empty() {
        let job_location = job.location.as_deref().unwrap_or("");
        if !prefs.locations.iter().any(|l| contains_ci(job_location, l)) {
            return false;
        }
    }

    if let Some(min_salary) = prefs.effective_min_salary() {
        if !salary_meets(job, min_salary) {
            return false;
        }
    }

    true
}

fn salary_meets(job: &JobPosting, min_salary: u32) -> bool {
    job.salary_max.map_or(false, |s| s >= min_salary)
        || job.salary_min.map_or(false, |s| s >= min_salary)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
