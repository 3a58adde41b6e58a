//! Work experience entity.

use serde::{Deserialize, Serialize};

use super::non_blank;

/// A job or engagement, returned inside `GET /experience`.
///
/// Dates are kept as the raw strings the API sends; formatting happens at
/// render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub position: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current_job: Option<bool>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl Experience {
    pub fn position(&self) -> Option<&str> {
        non_blank(&self.position)
    }

    pub fn company(&self) -> Option<&str> {
        non_blank(&self.company)
    }

    pub fn start_date(&self) -> Option<&str> {
        non_blank(&self.start_date)
    }

    /// End date, or `None` while the job is ongoing.
    ///
    /// A job flagged as current has no end even if the API sends one.
    pub fn end_date(&self) -> Option<&str> {
        if self.is_current_job() {
            return None;
        }
        non_blank(&self.end_date)
    }

    pub fn is_current_job(&self) -> bool {
        self.is_current_job.unwrap_or(false)
    }

    pub fn location(&self) -> Option<&str> {
        non_blank(&self.location)
    }

    pub fn description(&self) -> Option<&str> {
        non_blank(&self.description)
    }
}
