//! Settings management

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    Settings,
    loader,
};

/// Holds the validated settings of one workspace.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Current settings
    current_settings: Settings,

    /// Workspace root path
    workspace_root: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: Settings::default(), workspace_root: None }
    }

    /// Loads and validates the settings of `workspace_root`.
    ///
    /// Falls back to defaults when there is no workspace or no settings file.
    ///
    /// # Errors
    /// - file read error
    /// - JSON parse error
    /// - validation errors
    pub fn load_settings(&mut self, workspace_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for workspace: {:?}", workspace_root);

        let settings = if let Some(root) = &workspace_root {
            loader::load_from_workspace(root)?.map_or_else(Settings::default, |ws| {
                tracing::debug!("Loaded workspace settings: {:?}", ws);
                ws
            })
        } else {
            Settings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.workspace_root = workspace_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &Settings {
        &self.current_settings
    }

    #[must_use]
    pub const fn workspace_root(&self) -> Option<&PathBuf> {
        self.workspace_root.as_ref()
    }

    /// Messages document path, resolved against the workspace root.
    #[must_use]
    pub fn document_path(&self) -> PathBuf {
        let document = Path::new(&self.current_settings.document);
        match &self.workspace_root {
            Some(root) if document.is_relative() => root.join(document),
            _ => document.to_path_buf(),
        }
    }
}
