//! Personal info entity describing the portfolio owner.

use serde::{Deserialize, Serialize};

use super::non_blank;

/// Profile of the portfolio owner, returned by `GET /personalinfo`.
///
/// `profile_image_url` is carried but not rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linked_in_url: Option<String>,
    pub git_hub_url: Option<String>,
    pub profile_image_url: Option<String>,
}

impl PersonalInfo {
    pub fn full_name(&self) -> Option<&str> {
        non_blank(&self.full_name)
    }

    pub fn title(&self) -> Option<&str> {
        non_blank(&self.title)
    }

    pub fn bio(&self) -> Option<&str> {
        non_blank(&self.bio)
    }

    pub fn email(&self) -> Option<&str> {
        non_blank(&self.email)
    }

    pub fn phone(&self) -> Option<&str> {
        non_blank(&self.phone)
    }

    pub fn location(&self) -> Option<&str> {
        non_blank(&self.location)
    }

    pub fn linked_in_url(&self) -> Option<&str> {
        non_blank(&self.linked_in_url)
    }

    pub fn git_hub_url(&self) -> Option<&str> {
        non_blank(&self.git_hub_url)
    }
}
