use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-user matching preferences.
///
/// The record as a whole may be absent (the user never set preferences);
/// callers pass `None` and the scorer degrades to its baseline path rather
/// than erroring. Empty lists mean "no constraint" on that dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    pub user_id: Uuid,
    #[serde(default)]
    pub job_titles: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub remote_only: bool,
    #[serde(default)]
    pub min_salary: Option<u32>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub keywords_include: Vec<String>,
    #[serde(default)]
    pub keywords_exclude: Vec<String>,
}

impl UserPreferences {
    /// A zero minimum salary means "no salary preference".
    pub fn effective_min_salary(&self) -> Option<u32> {
        self.min_salary.filter(|&s| s > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_min_salary_is_no_preference() {
        let prefs = UserPreferences {
            min_salary: Some(0),
            ..UserPreferences::default()
        };
        assert_eq!(prefs.effective_min_salary(), None);
    }

    #[test]
    fn test_positive_min_salary_is_kept() {
        let prefs = UserPreferences {
            min_salary: Some(85_000),
            ..UserPreferences::default()
        };
        assert_eq!(prefs.effective_min_salary(), Some(85_000));
    }

    #[test]
    fn test_deserializes_with_all_lists_missing() {
        let json = format!(r#"{{"user_id": "{}"}}"#, Uuid::new_v4());
        let prefs: UserPreferences = serde_json::from_str(&json).unwrap();
        assert!(prefs.job_titles.is_empty());
        assert!(prefs.keywords_exclude.is_empty());
        assert!(!prefs.remote_only);
        assert_eq!(prefs.min_salary, None);
    }
}
