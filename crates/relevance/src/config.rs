//! Tunable scoring constants and their environment overrides.
//!
//! The magnitudes here (weights, bonuses, caps) are tuned values with no
//! derivation from first principles; they are surfaced as configuration so
//! deployments can adjust them without touching the scoring code.

use anyhow::{Context, Result};

/// Component weights for the composite relevance score.
///
/// Title overlap dominates, tech stack and included keywords follow, and
/// the remaining weight carries the location/salary bonus term.
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub title: f64,
    pub tech: f64,
    pub include: f64,
    pub bonus: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            title: 0.45,
            tech: 0.25,
            include: 0.20,
            bonus: 0.10,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.title + self.tech + self.include + self.bonus
    }
}

/// All tunables of the relevance scorer in one place.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub weights: Weights,
    /// Half-life of the recency decay, in days.
    pub half_life_days: f64,
    /// Lower bound of the recency multiplier; arbitrarily old postings are
    /// penalized but stay rankable against ties.
    pub recency_floor: f64,
    /// At most this fraction of a score can be suppressed by excluded
    /// keywords, so one incidental overlapping word cannot hide a job.
    pub exclusion_cap: f64,
    /// Ceiling for the weighted sum before decay and penalties apply. The
    /// bonus term can push past 1.0, hence the headroom above the final
    /// score bound.
    pub pre_decay_ceiling: f64,
    /// Pre-recency score assigned when a user has no preference record.
    pub baseline: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            half_life_days: 30.0,
            recency_floor: 0.1,
            exclusion_cap: 0.9,
            pre_decay_ceiling: 1.5,
            baseline: 0.35,
        }
    }
}

impl ScoringConfig {
    /// Loads the default configuration with per-field environment
    /// overrides. A missing variable keeps the default; a malformed one is
    /// a startup error rather than a silent fallback.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mut config = Self::default();
        if let Some(v) = read_env_f64("RELEVANCE_HALF_LIFE_DAYS")? {
            config.half_life_days = v;
        }
        if let Some(v) = read_env_f64("RELEVANCE_RECENCY_FLOOR")? {
            config.recency_floor = v;
        }
        if let Some(v) = read_env_f64("RELEVANCE_EXCLUSION_CAP")? {
            config.exclusion_cap = v;
        }
        if let Some(v) = read_env_f64("RELEVANCE_PRE_DECAY_CEILING")? {
            config.pre_decay_ceiling = v;
        }
        if let Some(v) = read_env_f64("RELEVANCE_BASELINE")? {
            config.baseline = v;
        }
        Ok(config)
    }
}

fn read_env_f64(key: &str) -> Result<Option<f64>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<f64>()
            .map(Some)
            .with_context(|| format!("{key} must be a number, got '{raw}'")),
        Err(_) => Ok(None),
    }
}
