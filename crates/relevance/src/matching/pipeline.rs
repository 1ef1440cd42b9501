//! Ranking pipeline: selection, scoring, ordering, and pagination over an
//! injected job collection.

use std::cmp::Ordering;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScoringConfig;
use crate::errors::EngineError;
use crate::matching::scoring::RelevanceScorer;
use crate::matching::selector::{passes_preference_prefilter, JobFilter};
use crate::models::{JobPosting, RankedPage, ScoredJob, UserPreferences};

pub const DEFAULT_PER_PAGE: usize = 25;
pub const MAX_PER_PAGE: usize = 100;

/// Page window over a candidate set, clamped at construction to the
/// bounds the public endpoints accept.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    page: usize,
    per_page: usize,
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

/// Ranked matches plus a snapshot of the preferences they were ranked
/// against, so a presentation layer can echo the effective criteria
/// without re-fetching them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub preferences: UserPreferences,
    pub page: RankedPage,
}

/// Orchestrates selection, scoring, and ordering. Stateless apart from
/// the scorer configuration; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct RankingPipeline {
    scorer: RelevanceScorer,
}

impl RankingPipeline {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            scorer: RelevanceScorer::new(config),
        }
    }

    pub fn scorer(&self) -> &RelevanceScorer {
        &self.scorer
    }

    /// General listing path: structural filter, paginate the candidate
    /// set, then score only the surviving page. The caller's retrieval
    /// order (typically most-recent-first) is preserved; scores are
    /// attached, not sorted on.
    pub fn score_listing(
        &self,
        jobs: &[JobPosting],
        prefs: Option<&UserPreferences>,
        filter: &JobFilter,
        pagination: Pagination,
    ) -> Result<RankedPage, EngineError> {
        validate_jobs(jobs)?;

        // One reference instant per pass so every job decays against the
        // same clock and relative order cannot drift mid-pass.
        let now = Utc::now();

        let candidates: Vec<&JobPosting> =
            jobs.iter().filter(|job| filter.matches(job, now)).collect();
        let total = candidates.len();

        let items: Vec<ScoredJob> = candidates
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.per_page())
            .map(|job| ScoredJob {
                job: job.clone(),
                score: self.scorer.score(job, prefs, now),
            })
            .collect();

        debug!(
            total,
            returned = items.len(),
            page = pagination.page(),
            "scored job listing"
        );

        Ok(RankedPage { total, items })
    }

    /// Preference-matching path: coarse pre-filter, score every survivor,
    /// stable sort by score descending (ties keep retrieval order), then
    /// paginate. Scoring the full candidate set before paginating keeps
    /// true top matches from being clipped by the page window.
    pub fn rank_matches(
        &self,
        jobs: &[JobPosting],
        prefs: Option<&UserPreferences>,
        pagination: Pagination,
    ) -> Result<MatchOutcome, EngineError> {
        validate_jobs(jobs)?;

        let now = Utc::now();

        let candidates: Vec<&JobPosting> = match prefs {
            Some(p) => jobs
                .iter()
                .filter(|job| passes_preference_prefilter(job, p))
                .collect(),
            None => jobs.iter().collect(),
        };
        let total = candidates.len();

        let mut scored: Vec<ScoredJob> = candidates
            .into_iter()
            .map(|job| ScoredJob {
                job: job.clone(),
                score: self.scorer.score(job, prefs, now),
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let items: Vec<ScoredJob> = scored
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.per_page())
            .collect();

        debug!(
            total,
            returned = items.len(),
            page = pagination.page(),
            "ranked preference matches"
        );

        Ok(MatchOutcome {
            preferences: prefs.cloned().unwrap_or_default(),
            page: RankedPage { total, items },
        })
    }
}

/// Caller contract check: every candidate job must carry a title and a
/// company before any of it is scored.
fn validate_jobs(jobs: &[JobPosting]) -> Result<(), EngineError> {
    for job in jobs {
        job.validate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn job(title: &str, description: &str, days_old: i64) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: Some("Remote".to_string()),
            remote: true,
            description: Some(description.to_string()),
            salary_min: None,
            salary_max: None,
            posted_at: Some(Utc::now() - Duration::days(days_old)),
            tags: vec![],
            source: None,
            url: None,
        }
    }

    fn pipeline() -> RankingPipeline {
        RankingPipeline::default()
    }

    #[test]
    fn test_pagination_clamps_page_and_per_page() {
        let p = Pagination::new(0, 500);
        assert_eq!(p.page(), 1);
        assert_eq!(p.per_page(), MAX_PER_PAGE);

        let p = Pagination::default();
        assert_eq!(p.page(), 1);
        assert_eq!(p.per_page(), DEFAULT_PER_PAGE);
    }

    #[test]
    fn test_listing_filters_paginates_then_scores() {
        let jobs = vec![
            job("Rust Engineer", "services", 1),
            job("Go Engineer", "services", 2),
            job("Rust Developer", "tooling", 3),
            job("Rust Lead", "platform", 4),
        ];
        let filter = JobFilter {
            title: Some("rust".to_string()),
            ..JobFilter::default()
        };

        let page = pipeline()
            .score_listing(&jobs, None, &filter, Pagination::new(1, 2))
            .unwrap();

        // Three survive the filter; the first page holds two, in the
        // caller's retrieval order.
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].job.title, "Rust Engineer");
        assert_eq!(page.items[1].job.title, "Rust Developer");
        assert!(page.items.iter().all(|s| s.score > 0.0));
    }

    #[test]
    fn test_listing_page_past_the_end_is_empty() {
        let jobs = vec![job("Rust Engineer", "services", 1)];
        let page = pipeline()
            .score_listing(&jobs, None, &JobFilter::default(), Pagination::new(5, 25))
            .unwrap();
        assert_eq!(page.total, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_listing_preserves_retrieval_order() {
        let jobs = vec![
            job("Backend Engineer", "rust and databases", 10),
            job("Backend Engineer", "rust and databases", 1),
        ];
        let prefs = UserPreferences {
            job_titles: vec!["backend engineer".to_string()],
            ..UserPreferences::default()
        };

        let page = pipeline()
            .score_listing(&jobs, Some(&prefs), &JobFilter::default(), Pagination::default())
            .unwrap();

        // The fresher job scores higher, but listing order is the
        // caller's, not score order.
        assert_eq!(page.items[0].job.id, jobs[0].id);
        assert!(page.items[0].score < page.items[1].score);
    }

    #[test]
    fn test_match_path_scores_all_before_paginating() {
        // The strongest match sits last in retrieval order, beyond the
        // first page's window; score-then-paginate must surface it.
        let jobs = vec![
            job("Senior Staff Engineer", "general work", 1),
            job("Principal Engineer Manager", "general work", 2),
            job("Engineer", "rust all day", 3),
        ];
        let prefs = UserPreferences {
            job_titles: vec!["engineer".to_string()],
            tech_stack: vec!["rust".to_string()],
            ..UserPreferences::default()
        };

        let outcome = pipeline()
            .rank_matches(&jobs, Some(&prefs), Pagination::new(1, 2))
            .unwrap();

        assert_eq!(outcome.page.total, 3);
        assert_eq!(outcome.page.items.len(), 2);
        assert_eq!(outcome.page.items[0].job.id, jobs[2].id);
    }

    #[test]
    fn test_match_path_ties_keep_retrieval_order() {
        let jobs = vec![
            job("Platform Engineer", "same text", 0),
            job("Platform Engineer", "same text", 0),
            job("Platform Engineer", "same text", 0),
        ];
        let prefs = UserPreferences {
            job_titles: vec!["platform engineer".to_string()],
            ..UserPreferences::default()
        };

        let outcome = pipeline()
            .rank_matches(&jobs, Some(&prefs), Pagination::default())
            .unwrap();

        let ids: Vec<_> = outcome.page.items.iter().map(|s| s.job.id).collect();
        assert_eq!(ids, jobs.iter().map(|j| j.id).collect::<Vec<_>>());
    }

    #[test]
    fn test_match_path_prefilter_shrinks_candidate_set() {
        let jobs = vec![
            job("Rust Engineer", "systems", 1),
            job("Accountant", "ledgers", 1),
        ];
        let prefs = UserPreferences {
            job_titles: vec!["rust".to_string()],
            ..UserPreferences::default()
        };

        let outcome = pipeline()
            .rank_matches(&jobs, Some(&prefs), Pagination::default())
            .unwrap();

        assert_eq!(outcome.page.total, 1);
        assert_eq!(outcome.page.items[0].job.title, "Rust Engineer");
    }

    #[test]
    fn test_match_path_without_preferences_scores_baseline_for_all() {
        let jobs = vec![job("Anything", "at all", 0), job("Whatever", "else", 0)];
        let outcome = pipeline().rank_matches(&jobs, None, Pagination::default()).unwrap();

        assert_eq!(outcome.page.total, 2);
        assert!(outcome.page.items.iter().all(|s| s.score == 35.0));
        // The echoed preference snapshot degrades to empty defaults.
        assert!(outcome.preferences.job_titles.is_empty());
    }

    #[test]
    fn test_match_outcome_echoes_the_preferences_used() {
        let jobs = vec![job("Rust Engineer", "systems", 1)];
        let prefs = UserPreferences {
            job_titles: vec!["rust".to_string()],
            remote_only: true,
            ..UserPreferences::default()
        };

        let outcome = pipeline()
            .rank_matches(&jobs, Some(&prefs), Pagination::default())
            .unwrap();

        assert_eq!(outcome.preferences.job_titles, vec!["rust".to_string()]);
        assert!(outcome.preferences.remote_only);
    }

    #[test]
    fn test_invalid_job_surfaces_invalid_input_error() {
        let jobs = vec![job("Fine", "ok", 0), job("", "no title", 0)];

        let err = pipeline()
            .rank_matches(&jobs, None, Pagination::default())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));

        let err = pipeline()
            .score_listing(&jobs, None, &JobFilter::default(), Pagination::default())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn test_scores_are_bounded_across_a_whole_pass() {
        let jobs: Vec<_> = (0..20)
            .map(|i| job(&format!("Engineer {i}"), "rust remote systems", i))
            .collect();
        let prefs = UserPreferences {
            job_titles: vec!["engineer".to_string()],
            tech_stack: vec!["rust".to_string()],
            keywords_exclude: vec!["systems".to_string()],
            remote_only: true,
            ..UserPreferences::default()
        };

        let outcome = pipeline()
            .rank_matches(&jobs, Some(&prefs), Pagination::new(1, 100))
            .unwrap();

        assert!(outcome
            .page
            .items
            .iter()
            .all(|s| (0.0..=100.0).contains(&s.score)));
    }
}
