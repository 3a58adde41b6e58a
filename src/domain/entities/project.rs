//! Project entity.

use serde::{Deserialize, Serialize};

use super::non_blank;
use crate::utils::formatters::split_technologies;

/// A showcased project, returned inside `GET /project`.
///
/// `technologies` is a single comma separated string on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub technologies: Option<String>,
    pub live_url: Option<String>,
    pub git_hub_url: Option<String>,
}

impl Project {
    pub fn title(&self) -> Option<&str> {
        non_blank(&self.title)
    }

    pub fn description(&self) -> Option<&str> {
        non_blank(&self.description)
    }

    pub fn image_url(&self) -> Option<&str> {
        non_blank(&self.image_url)
    }

    pub fn live_url(&self) -> Option<&str> {
        non_blank(&self.live_url)
    }

    pub fn git_hub_url(&self) -> Option<&str> {
        non_blank(&self.git_hub_url)
    }

    /// Technology tags in the order the API lists them.
    pub fn technology_tags(&self) -> Vec<String> {
        self.technologies
            .as_deref()
            .map(split_technologies)
            .unwrap_or_default()
    }
}
