//! Application configuration management

use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::drag::DEFAULT_DRAG_THRESHOLD;
use super::error::DocshelfError;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Editor settings
    pub editor: EditorConfig,
    /// UI settings
    pub ui: UiConfig,
    /// Drag-and-drop settings
    pub drag: DragConfig,
    /// Folder settings
    pub folders: FolderConfig,
    /// Start with the welcome documents and default folders
    pub seed_sample_data: bool,
}

/// Editor-specific settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Font size in pixels
    pub font_size: f32,
    /// Open documents in preview mode
    pub start_in_preview: bool,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme (light/dark)
    pub theme: String,
    /// Sidebar width
    pub sidebar_width: f32,
    /// How long a notification stays in the status bar
    pub toast_seconds: f32,
}

/// Drag-and-drop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Pointer displacement in points before a press becomes a drag
    pub threshold_px: f32,
}

/// Folder settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderConfig {
    /// Whether new folders start expanded
    pub expand_new: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
            ui: UiConfig::default(),
            drag: DragConfig::default(),
            folders: FolderConfig::default(),
            seed_sample_data: true,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            start_in_preview: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            sidebar_width: 280.0,
            toast_seconds: 3.0,
        }
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            threshold_px: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

impl Default for FolderConfig {
    fn default() -> Self {
        Self { expand_new: true }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "docshelf", "Docshelf")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load the configuration used at startup
    pub fn load_or_init() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_or_init_at(&path),
            None => {
                tracing::warn!("{}, using defaults", DocshelfError::ConfigDir);
                Self::default()
            }
        }
    }

    /// Load `path`, creating it with defaults when missing.
    /// An unreadable file is logged and left as it is.
    pub fn load_or_init_at(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                let config = Self::default();
                if let Err(e) = config.save_to(path) {
                    tracing::warn!("Failed to write default config: {}", e);
                }
                config
            }
            Err(e) => {
                tracing::error!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file. `None` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content).map_err(|source| DocshelfError::ConfigFormat {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(config))
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Drag threshold, never negative
    pub fn drag_threshold(&self) -> f32 {
        self.drag.threshold_px.max(0.0)
    }
}
