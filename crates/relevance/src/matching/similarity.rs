//! Set-overlap similarity between token bags.

use std::collections::HashSet;

/// Jaccard similarity over the token sets of two bags: intersection size
/// over union size. Duplicates within a bag collapse.
///
/// Either bag empty is defined as 0.0 (never NaN), so scoring degrades
/// gracefully on missing text instead of failing.
pub fn jaccard(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_against_anything_is_zero() {
        assert_eq!(jaccard(&[], &bag(&["rust"])), 0.0);
        assert_eq!(jaccard(&bag(&["rust"]), &[]), 0.0);
        assert_eq!(jaccard(&[], &[]), 0.0);
    }

    #[test]
    fn test_identical_bags_are_one() {
        let a = bag(&["rust", "backend"]);
        assert_eq!(jaccard(&a, &a), 1.0);
    }

    #[test]
    fn test_disjoint_bags_are_zero() {
        assert_eq!(jaccard(&bag(&["rust"]), &bag(&["java"])), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // {software, engineer, intern} vs {software, engineer}: 2 / 3
        let score = jaccard(
            &bag(&["software", "engineer", "intern"]),
            &bag(&["software", "engineer"]),
        );
        assert!((score - 2.0 / 3.0).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_duplicates_collapse_before_comparison() {
        let score = jaccard(&bag(&["rust", "rust", "rust"]), &bag(&["rust"]));
        assert_eq!(score, 1.0);
    }
}
