//! Skill entity.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use super::non_blank;

/// A skill with its grouping category and a 1–5 level.
///
/// `level` accepts a JSON number (integer or float) or a numeric string.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub level: Option<f64>,
}

impl Skill {
    pub fn name(&self) -> Option<&str> {
        non_blank(&self.name)
    }

    pub fn category(&self) -> Option<&str> {
        non_blank(&self.category)
    }

    /// Level rounded to the nearest integer, `0` when missing or not a number.
    pub fn level(&self) -> i64 {
        match self.level {
            Some(level) if level.is_finite() => level.round() as i64,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_level_from_number() {
        let skill: Skill =
            serde_json::from_value(json!({ "name": "Rust", "category": "Backend", "level": 4 }))
                .unwrap();
        assert_eq!(skill.level(), 4);
        assert_eq!(skill.category(), Some("Backend"));
    }

    #[test]
    fn test_level_from_numeric_string() {
        let skill: Skill = serde_json::from_value(json!({ "name": "SQL", "level": "3" })).unwrap();
        assert_eq!(skill.level(), 3);
    }

    #[test]
    fn test_level_from_float() {
        let skill: Skill =
            serde_json::from_value(json!({ "name": "Rust", "level": 4.0 })).unwrap();
        assert_eq!(skill.level(), 4);

        let skill: Skill = serde_json::from_value(json!({ "name": "Go", "level": "3.6" })).unwrap();
        assert_eq!(skill.level(), 4);
    }

    #[test]
    fn test_missing_level_is_zero() {
        let skill: Skill = serde_json::from_value(json!({ "name": "Go", "level": null })).unwrap();
        assert_eq!(skill.level(), 0);
        assert!(skill.category().is_none());
    }
}
