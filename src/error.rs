// Devprof Error Types

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::Category;

#[derive(Error, Debug)]
pub enum DevprofError {
    #[error("No templates available for category {0}")]
    EmptyCategory(Category),

    #[error("Failed to read {}: {source}", .path.display())]
    PersistenceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    PersistenceWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed assignment data in {}: {reason}", .path.display())]
    MalformedAssignmentData { path: PathBuf, reason: String },

    #[error("Malformed template catalog in {}: {reason}", .path.display())]
    MalformedCatalog { path: PathBuf, reason: String },

    #[error("Template {index} not found in category {category}")]
    TemplateNotFound { category: Category, index: usize },

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid category weights: {0}")]
    InvalidWeights(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DevprofError {
    /// True for failures that leave the caller with an empty assignment set.
    pub fn is_read_failure(&self) -> bool {
        matches!(
            self,
            DevprofError::PersistenceRead { .. } | DevprofError::MalformedAssignmentData { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DevprofError>;
