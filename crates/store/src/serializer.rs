//! Layout serialization

use crate::{LayoutFile, Result, StoreError};
use grid_model::{GridLayoutData, PublicPageData};
use tracing::debug;

/// Serialize a layout to JSON inside a fresh file header
pub fn serialize(layout: &GridLayoutData) -> Result<String> {
    serialize_file(&LayoutFile::new(layout.clone()))
}

/// Serialize a public page (profile and layout)
pub fn serialize_page(page: &PublicPageData) -> Result<String> {
    serialize_file(&LayoutFile::from_page(page.clone()))
}

pub fn serialize_file(file: &LayoutFile) -> Result<String> {
    let json = serde_json::to_string_pretty(file)?;
    Ok(json)
}

/// Deserialize a layout from JSON.
///
/// Accepts both a full `LayoutFile` and a bare layout document, which is
/// what the page service stores. The layout must satisfy the grid
/// invariants.
pub fn deserialize(json: &str) -> Result<GridLayoutData> {
    Ok(deserialize_file(json)?.grid)
}

/// Deserialize a public page; fails if the file carries no profile
pub fn deserialize_page(json: &str) -> Result<PublicPageData> {
    deserialize_file(json)?
        .page()
        .ok_or_else(|| StoreError::InvalidFormat("File has no profile".to_string()))
}

pub fn deserialize_file(json: &str) -> Result<LayoutFile> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    let file = if value.get("header").is_some() {
        let file: LayoutFile = serde_json::from_value(value)?;
        if !file.header.is_valid() {
            return Err(StoreError::InvalidFormat(format!(
                "Invalid or unsupported format version: {}",
                file.header.version
            )));
        }
        file
    } else {
        debug!("reading bare layout document");
        LayoutFile::new(serde_json::from_value(value)?)
    };

    file.grid.validate()?;
    Ok(file)
}
