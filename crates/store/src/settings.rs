//! Editor settings management
//!
//! This module provides settings persistence, loading, and updating
//! for the page editor.

use crate::Result;
use grid_model::{GridConfig, Template};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main editor settings container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EditorSettings {
    /// General editor settings
    #[serde(default)]
    pub general: GeneralSettings,
    /// Grid sizing and gesture settings
    #[serde(default)]
    pub grid: GridConfig,
}

impl EditorSettings {
    /// Replace unusable grid values with defaults, logging what was wrong
    fn sanitized(mut self) -> Self {
        if let Some(problem) = self.grid.check() {
            tracing::warn!("Invalid grid settings, using defaults: {}", problem);
            self.grid = GridConfig::default();
        }
        self
    }
}

/// General editor settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    /// Editor theme
    pub theme: Theme,
    /// Template a new page starts from
    pub default_template: Template,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            default_template: Template::Starter,
        }
    }
}

/// Editor theme
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Settings manager for loading, saving, and updating editor settings
pub struct SettingsManager {
    /// Path to the settings file
    settings_path: PathBuf,
    /// Current settings (cached)
    current: EditorSettings,
}

impl SettingsManager {
    /// Create a new settings manager with the given app data directory
    pub fn new(app_data_dir: PathBuf) -> Self {
        let settings_path = app_data_dir.join("settings.json");
        Self {
            settings_path,
            current: EditorSettings::default(),
        }
    }

    /// Get the path to the settings file
    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    /// Load settings from disk, or return defaults if file doesn't exist
    pub async fn load(&mut self) -> Result<&EditorSettings> {
        self.current = if self.settings_path.exists() {
            let content = tokio::fs::read_to_string(&self.settings_path).await?;
            Self::parse(&content)
        } else {
            EditorSettings::default()
        };
        Ok(&self.current)
    }

    /// Load settings synchronously (for use during startup)
    pub fn load_sync(&mut self) -> Result<&EditorSettings> {
        self.current = if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            Self::parse(&content)
        } else {
            EditorSettings::default()
        };
        Ok(&self.current)
    }

    fn parse(content: &str) -> EditorSettings {
        match serde_json::from_str::<EditorSettings>(content) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                tracing::warn!("Failed to parse settings file, using defaults: {}", e);
                EditorSettings::default()
            }
        }
    }

    /// Save current settings to disk
    pub async fn save(&self) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.settings_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(&self.current)?;
        tokio::fs::write(&self.settings_path, content).await?;
        Ok(())
    }

    /// Save settings synchronously
    pub fn save_sync(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.current)?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }

    /// Get current settings
    pub fn get(&self) -> &EditorSettings {
        &self.current
    }

    /// Update settings and save to disk
    pub async fn update(&mut self, settings: EditorSettings) -> Result<()> {
        self.current = settings;
        self.save().await
    }

    /// Update settings synchronously
    pub fn update_sync(&mut self, settings: EditorSettings) -> Result<()> {
        self.current = settings;
        self.save_sync()
    }

    /// Reset settings to defaults and save
    pub async fn reset(&mut self) -> Result<&EditorSettings> {
        self.current = EditorSettings::default();
        self.save().await?;
        Ok(&self.current)
    }

    /// Reset settings to defaults synchronously
    pub fn reset_sync(&mut self) -> Result<&EditorSettings> {
        self.current = EditorSettings::default();
        self.save_sync()?;
        Ok(&self.current)
    }

    /// Update only grid settings
    pub async fn update_grid(&mut self, grid: GridConfig) -> Result<()> {
        self.current.grid = grid;
        self.save().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = EditorSettings::default();

        assert_eq!(settings.general.theme, Theme::System);
        assert_eq!(settings.general.default_template, Template::Starter);
        assert_eq!(settings.grid.gap, 16.0);
        assert_eq!(settings.grid.min_cell_width, 40.0);
        assert_eq!(settings.grid.activation_distance, 8.0);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings = SettingsManager::parse(r#"{ "grid": { "gap": 8.0 } }"#);
        assert_eq!(settings.grid.gap, 8.0);
        assert_eq!(settings.grid.default_cols, 12);
        assert_eq!(settings.general, GeneralSettings::default());
    }

    #[test]
    fn test_invalid_grid_values_fall_back() {
        let settings = SettingsManager::parse(r#"{ "grid": { "min_cell_width": 0.0 } }"#);
        assert_eq!(settings.grid, GridConfig::default());
    }

    #[test]
    fn test_unparsable_file_falls_back() {
        assert_eq!(SettingsManager::parse("{ not json"), EditorSettings::default());
    }

    #[test]
    fn test_theme_serialization() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::to_string(&Theme::System).unwrap(), "\"system\"");
    }

    #[test]
    fn test_settings_manager_load_save_sync() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().to_path_buf());

        // Load should return defaults when no file exists
        let settings = manager.load_sync().unwrap();
        assert_eq!(settings, &EditorSettings::default());

        let mut new_settings = EditorSettings::default();
        new_settings.general.theme = Theme::Dark;
        new_settings.general.default_template = Template::Profile;
        manager.update_sync(new_settings).unwrap();

        let mut manager2 = SettingsManager::new(temp_dir.path().to_path_buf());
        let loaded = manager2.load_sync().unwrap();
        assert_eq!(loaded.general.theme, Theme::Dark);
        assert_eq!(loaded.general.default_template, Template::Profile);
    }

    #[test]
    fn test_settings_manager_reset_sync() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().to_path_buf());

        let mut new_settings = EditorSettings::default();
        new_settings.grid.gap = 4.0;
        manager.update_sync(new_settings).unwrap();

        let settings = manager.reset_sync().unwrap();
        assert_eq!(settings.grid.gap, 16.0);
    }

    #[tokio::test]
    async fn test_settings_manager_async() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().to_path_buf());

        manager.load().await.unwrap();

        let mut grid = GridConfig::default();
        grid.activation_distance = 12.0;
        manager.update_grid(grid).await.unwrap();

        let mut manager2 = SettingsManager::new(temp_dir.path().to_path_buf());
        let loaded = manager2.load().await.unwrap();
        assert_eq!(loaded.grid.activation_distance, 12.0);
    }
}
