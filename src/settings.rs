// Devprof - App Settings
// Settings live in ~/.devprof/settings.json (or $DEVPROF_HOME/settings.json).
// Missing fields fall back to defaults so older files keep loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::allocator::{AllocatorConfig, CategoryWeights, ClassificationMode};
use crate::constants::{
    APP_FOLDER, APP_HOME_ENV, ASSIGNMENTS_FILENAME, SETTINGS_FILENAME, SETTINGS_VERSION,
    TEMPLATES_FILENAME,
};
use crate::error::{DevprofError, Result};
use crate::hash::DigestAlgorithm;
use crate::store::TextStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub version: u32,
    pub weights: CategoryWeights,
    pub digest: DigestAlgorithm,
    pub classification: ClassificationMode,
    /// Overrides `<app dir>/device_assignments.json`
    pub assignments_path: Option<PathBuf>,
    /// Overrides `<app dir>/device_templates.json`
    pub templates_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            weights: CategoryWeights::default(),
            digest: DigestAlgorithm::default(),
            classification: ClassificationMode::default(),
            assignments_path: None,
            templates_path: None,
        }
    }
}

/// App folder: $DEVPROF_HOME if set, otherwise ~/.devprof
pub fn app_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(APP_HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let home = directories::BaseDirs::new()
        .ok_or_else(|| DevprofError::Config("Could not determine home directory".to_string()))?;
    Ok(home.home_dir().join(APP_FOLDER))
}

pub fn default_settings_path() -> Result<PathBuf> {
    Ok(app_dir()?.join(SETTINGS_FILENAME))
}

impl Settings {
    /// Load settings, returning defaults when the file does not exist
    pub fn load(store: &dyn TextStore, path: &Path) -> Result<Self> {
        let content = match store.read_text(path) {
            Ok(Some(content)) => content,
            Ok(None) => {
                log::debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(DevprofError::PersistenceRead { path: path.to_path_buf(), source });
            }
        };

        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| DevprofError::Config(format!("{}: {}", path.display(), e)))?;

        if settings.version > SETTINGS_VERSION {
            log::warn!(
                "Settings version {} is newer than supported version {}",
                settings.version,
                SETTINGS_VERSION
            );
        }
        settings.weights.validate()?;
        Ok(settings)
    }

    pub fn save(&self, store: &dyn TextStore, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        store
            .write_text(path, &json)
            .map_err(|source| DevprofError::PersistenceWrite { path: path.to_path_buf(), source })
    }

    pub fn allocator_config(&self) -> AllocatorConfig {
        AllocatorConfig {
            weights: self.weights,
            digest: self.digest,
            classification: self.classification,
        }
    }

    pub fn assignments_file(&self, app_dir: &Path) -> PathBuf {
        self.assignments_path
            .clone()
            .unwrap_or_else(|| app_dir.join(ASSIGNMENTS_FILENAME))
    }

    pub fn templates_file(&self, app_dir: &Path) -> PathBuf {
        self.templates_path
            .clone()
            .unwrap_or_else(|| app_dir.join(TEMPLATES_FILENAME))
    }
}
