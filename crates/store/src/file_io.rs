//! File I/O operations

use crate::{LayoutFile, Result, StoreError};
use grid_model::GridLayoutData;
use std::path::Path;
use tracing::debug;

/// Save a layout to a file.
///
/// If `path` already holds a layout file, its creation time and profile are
/// kept and only the grid and modification time change.
pub async fn save_layout(layout: &GridLayoutData, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut file = match tokio::fs::read_to_string(path).await {
        Ok(json) => replace_grid(&json, layout),
        Err(_) => LayoutFile::new(layout.clone()),
    };
    save_file(&mut file, path).await
}

/// Write a full layout file, bumping its modification time
pub async fn save_file(file: &mut LayoutFile, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    file.header.touch();
    let json = crate::serialize_file(file)?;
    tokio::fs::write(path, json).await?;
    debug!(path = %path.display(), items = file.grid.items.len(), "layout saved");
    Ok(())
}

/// The previous file with `layout` as its grid, or a fresh file if `json`
/// is not a readable layout
fn replace_grid(json: &str, layout: &GridLayoutData) -> LayoutFile {
    match crate::deserialize_file(json) {
        Ok(mut file) => {
            file.grid = layout.clone();
            file
        }
        Err(e) => {
            debug!(error = %e, "overwriting unreadable layout file");
            LayoutFile::new(layout.clone())
        }
    }
}

/// Load a layout from a file
pub async fn load_layout(path: impl AsRef<Path>) -> Result<GridLayoutData> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(StoreError::FileNotFound(path.display().to_string()));
    }

    let json = tokio::fs::read_to_string(path).await?;
    crate::deserialize(&json)
}

/// Save a layout synchronously
pub fn save_layout_sync(layout: &GridLayoutData, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut file = match std::fs::read_to_string(path) {
        Ok(json) => replace_grid(&json, layout),
        Err(_) => LayoutFile::new(layout.clone()),
    };
    save_file_sync(&mut file, path)
}

/// Write a full layout file synchronously, bumping its modification time
pub fn save_file_sync(file: &mut LayoutFile, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    file.header.touch();
    let json = crate::serialize_file(file)?;
    std::fs::write(path, json)?;
    debug!(path = %path.display(), items = file.grid.items.len(), "layout saved");
    Ok(())
}

/// Load a layout synchronously
pub fn load_layout_sync(path: impl AsRef<Path>) -> Result<GridLayoutData> {
    Ok(load_file_sync(path)?.grid)
}

/// Load a full layout file, header and optional profile included
pub fn load_file_sync(path: impl AsRef<Path>) -> Result<LayoutFile> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(StoreError::FileNotFound(path.display().to_string()));
    }

    let json = std::fs::read_to_string(path)?;
    crate::deserialize_file(&json)
}
