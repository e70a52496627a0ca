//! Public page types
//!
//! The published page bundles the owner's profile with the grid document.

use crate::GridLayoutData;
use serde::{Deserialize, Serialize};

/// Owner of a published page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// URL handle, the page lives at `/u/<username>`
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Custom domain shown on the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            ..Self::default()
        }
    }

    /// Path of the public page
    pub fn page_path(&self) -> String {
        format!("/u/{}", self.username)
    }
}

/// Everything needed to render a public page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicPageData {
    pub profile: UserProfile,
    pub grid: GridLayoutData,
}
