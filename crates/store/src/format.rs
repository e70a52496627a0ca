//! Layout file format

use chrono::{DateTime, Utc};
use grid_model::{GridLayoutData, PublicPageData};
use serde::{Deserialize, Serialize};

/// File format version
pub const FORMAT_VERSION: u32 = 1;

/// File extension for saved layouts
pub const FILE_EXTENSION: &str = "grid.json";

/// File header for format identification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileHeader {
    /// Magic string for format identification
    pub magic: String,
    /// Format version
    pub version: u32,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl FileHeader {
    pub const MAGIC: &'static str = "GRID-LAYOUT";

    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            magic: Self::MAGIC.to_string(),
            version: FORMAT_VERSION,
            created: now,
            modified: now,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.magic == Self::MAGIC && self.version <= FORMAT_VERSION
    }

    /// Bump the modification time, keeping the creation time
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

impl Default for FileHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// A saved layout: header plus the document, with an optional owner profile
/// when the file describes a public page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFile {
    pub header: FileHeader,
    pub grid: GridLayoutData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<grid_model::UserProfile>,
}

impl LayoutFile {
    pub fn new(grid: GridLayoutData) -> Self {
        Self {
            header: FileHeader::new(),
            grid,
            profile: None,
        }
    }

    pub fn from_page(page: PublicPageData) -> Self {
        Self {
            header: FileHeader::new(),
            grid: page.grid,
            profile: Some(page.profile),
        }
    }

    /// The public page this file describes, if it carries a profile
    pub fn page(&self) -> Option<PublicPageData> {
        self.profile.as_ref().map(|profile| PublicPageData {
            profile: profile.clone(),
            grid: self.grid.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_validity() {
        let mut header = FileHeader::new();
        assert!(header.is_valid());
        assert!(header.created <= header.modified);

        header.version = FORMAT_VERSION + 1;
        assert!(!header.is_valid());

        header.version = FORMAT_VERSION;
        header.magic = "OTHER-FORMAT".to_string();
        assert!(!header.is_valid());
    }

    #[test]
    fn test_timestamps_are_rfc3339() {
        let file = LayoutFile::new(GridLayoutData::new(2, 2));
        let value = serde_json::to_value(&file).unwrap();
        let created = value["header"]["created"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(created).is_ok());
        assert!(value.get("profile").is_none());
    }
}
