//! Education entity.

use serde::{Deserialize, Serialize};

use super::non_blank;

/// A degree or course, returned inside `GET /education`.
///
/// A missing `end_date` means the studies are still in progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub field_of_study: Option<String>,
    pub description: Option<String>,
}

impl Education {
    pub fn degree(&self) -> Option<&str> {
        non_blank(&self.degree)
    }

    pub fn institution(&self) -> Option<&str> {
        non_blank(&self.institution)
    }

    pub fn start_date(&self) -> Option<&str> {
        non_blank(&self.start_date)
    }

    pub fn end_date(&self) -> Option<&str> {
        non_blank(&self.end_date)
    }

    pub fn field_of_study(&self) -> Option<&str> {
        non_blank(&self.field_of_study)
    }

    pub fn description(&self) -> Option<&str> {
        non_blank(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_education_from_json() {
        let edu: Education = serde_json::from_value(json!({
            "degree": "BSc Computer Science",
            "institution": "UNAM",
            "startDate": "2015-08-01",
            "endDate": null,
            "fieldOfStudy": "Computing"
        }))
        .unwrap();

        assert_eq!(edu.degree(), Some("BSc Computer Science"));
        assert_eq!(edu.field_of_study(), Some("Computing"));
        assert!(edu.end_date().is_none());
        assert!(edu.description().is_none());
    }
}
