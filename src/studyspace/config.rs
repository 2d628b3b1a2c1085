use crate::draft::{DEFAULT_CATEGORY, DEFAULT_DELIMITER};
use crate::error::{Result, StudyError};
use crate::model::Section;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_RECENT_LIMIT: usize = 4;

/// Configuration for studyspace, read from `config.json`.
///
/// Only settings live on disk. Records are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudyConfig {
    /// Category given to records submitted without one
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Separator for list fields such as note tags
    #[serde(default = "default_delimiter")]
    pub tag_delimiter: char,

    /// Start with the sample notes, documents and materials
    #[serde(default = "default_true")]
    pub seed_samples: bool,

    /// How many entries the dashboard's recent activity shows
    #[serde(default = "default_recent_limit")]
    pub recent_activity_limit: usize,

    #[serde(default)]
    pub initial_section: Section,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

fn default_true() -> bool {
    true
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            tag_delimiter: DEFAULT_DELIMITER,
            seed_samples: true,
            recent_activity_limit: DEFAULT_RECENT_LIMIT,
            initial_section: Section::default(),
        }
    }
}

impl StudyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::from_file(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Load config from an explicit file, or return defaults if it does not exist
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(StudyError::Io)?;
        let config: StudyConfig =
            serde_json::from_str(&content).map_err(StudyError::Serialization)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
