//! Composite relevance scoring: token overlap against user preferences,
//! location and salary signals, an exclusion penalty, and recency decay
//! folded into one bounded score.

use chrono::{DateTime, Utc};

use crate::config::ScoringConfig;
use crate::matching::recency::decay_multiplier;
use crate::matching::similarity::jaccard;
use crate::matching::tokenizer::tokenize;
use crate::models::{JobPosting, UserPreferences};

/// Stateless scorer; cheap to clone and safe to share across request
/// handlers.
#[derive(Debug, Clone, Default)]
pub struct RelevanceScorer {
    config: ScoringConfig,
}

impl RelevanceScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores one job against a user's preferences at the reference
    /// instant `now`. Returns a value in [0.0, 100.0], two decimals.
    ///
    /// The ordering is load-bearing: the weighted positive sum comes
    /// first, then the exclusion penalty and recency multiply it down, so
    /// both scale with how strong the match already is.
    pub fn score(
        &self,
        job: &JobPosting,
        prefs: Option<&UserPreferences>,
        now: DateTime<Utc>,
    ) -> f64 {
        let recency = decay_multiplier(
            job.posted_at,
            now,
            self.config.half_life_days,
            self.config.recency_floor,
        );

        // No preference record: baseline score proportional to freshness.
        let Some(prefs) = prefs else {
            return round2(100.0 * (self.config.baseline * recency).min(1.0));
        };

        let title_tokens = tokenize(&job.title);
        let job_tokens = tokenize(&job.combined_text());

        let title_match = jaccard(&title_tokens, &tokenize(&prefs.job_titles.join(" ")));
        let tech_match = jaccard(&job_tokens, &tokenize(&prefs.tech_stack.join(" ")));
        let include_match = jaccard(&job_tokens, &tokenize(&prefs.keywords_include.join(" ")));
        let bonus = 1.0 + location_bonus(job, prefs) + salary_bonus(job, prefs);

        let weights = self.config.weights;
        let mut score = weights.title * title_match
            + weights.tech * tech_match
            + weights.include * include_match
            + weights.bonus * bonus;

        // Headroom above 1.0 is intentional: the bonus term alone can push
        // past the final bound before the penalty and decay apply.
        score = score.clamp(0.0, self.config.pre_decay_ceiling);
        score *= self.exclusion_penalty(&job_tokens, prefs);
        score *= recency;

        round2(100.0 * score.clamp(0.0, 1.0))
    }

    /// Multiplier in [1 - exclusion_cap, 1.0]. Excluded keywords can
    /// suppress a score but never fully zero it out.
    fn exclusion_penalty(&self, job_tokens: &[String], prefs: &UserPreferences) -> f64 {
        let exclude_tokens = tokenize(&prefs.keywords_exclude.join(" "));
        if exclude_tokens.is_empty() {
            return 1.0;
        }
        1.0 - jaccard(job_tokens, &exclude_tokens).min(self.config.exclusion_cap)
    }
}

/// Remote and location bonus. Remote-only users reward remote jobs (+0.1)
/// and penalize on-site ones (-0.2); a preferred location appearing inside
/// the job's location string adds another +0.1.
fn location_bonus(job: &JobPosting, prefs: &UserPreferences) -> f64 {
    let mut bonus = 0.0;
    if prefs.remote_only {
        bonus += if job.remote { 0.1 } else { -0.2 };
    }
    if !prefs.locations.is_empty() {
        let job_location = job.location.as_deref().unwrap_or("").to_lowercase();
        if prefs
            .locations
            .iter()
            .any(|l| job_location.contains(&l.to_lowercase()))
        {
            bonus += 0.1;
        }
    }
    bonus
}

/// Salary bonus: only applies when both the user minimum and the job's
/// salary ceiling are known (+0.1 when the ceiling meets the minimum,
/// -0.15 when it falls short).
fn salary_bonus(job: &JobPosting, prefs: &UserPreferences) -> f64 {
    match (prefs.effective_min_salary(), job.salary_max) {
        (Some(min), Some(max)) if max >= min => 0.1,
        (Some(_), Some(_)) => -0.15,
        _ => 0.0,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
