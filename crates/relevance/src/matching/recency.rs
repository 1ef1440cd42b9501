//! Time-decay weighting for posting freshness.

use chrono::{DateTime, Utc};

/// Converts a posting timestamp into a multiplier in (0.0, 1.0].
///
/// A missing timestamp maps to 1.0: unknown recency is treated as "not
/// stale". Non-positive elapsed time (clock skew putting the posting in
/// the future) also maps to 1.0. Otherwise the multiplier halves every
/// `half_life_days`, floored at `floor` so old postings keep a nonzero
/// weight and stay rankable.
pub fn decay_multiplier(
    posted_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    half_life_days: f64,
    floor: f64,
) -> f64 {
    let Some(posted_at) = posted_at else {
        return 1.0;
    };

    let elapsed_secs = (now - posted_at).num_seconds() as f64;
    if elapsed_secs <= 0.0 {
        return 1.0;
    }

    let half_life_secs = half_life_days * 86_400.0;
    let decay = 0.5_f64.powf(elapsed_secs / half_life_secs);
    decay.max(floor)
}
