use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "RESEARCHER_PROFILE_CONFIG";
/// Config file looked up in the working directory otherwise.
pub const DEFAULT_CONFIG_FILE: &str = "profile.json";
/// Publications listed on one profile page; `limit` is capped to this.
pub const MAX_PUBLICATION_LIMIT: usize = 100;

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub field: String,
    pub employer: String,
    pub employer_url: String,
    /// Image URI handed to egui's loaders (`file://…` or `https://…`).
    pub image: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Cameron Green".into(),
            field: "Spatial Data Infrastructure (SDI) Engineer".into(),
            employer: "Riskscape (PTY) Ltd".into(),
            employer_url: "https://www.riskscape.pro/".into(),
            image: "file://assets/profile.jpg".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScholarConfig {
    pub author_id: String,
    /// How many publications get a detail lookup.
    pub limit: usize,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Attempts per request; 1 means no retry.
    pub max_attempts: u32,
    pub backoff_ms: u64,
}

impl Default for ScholarConfig {
    fn default() -> Self {
        Self {
            author_id: "EmcpSGoAAAAJ".into(),
            limit: 10,
            base_url: "https://scholar.google.com".into(),
            timeout_secs: 20,
            max_attempts: 1,
            backoff_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub linkedin: String,
    pub subject: String,
    pub body: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "cameron.green@riskscape.pro".into(),
            linkedin: "https://www.linkedin.com/in/cameronlgreen/".into(),
            subject: "Inquiry about your professional services".into(),
            body: "Hello,\n\nI would like to set up a meeting to discuss future projects".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub profile: ProfileConfig,
    pub scholar: ScholarConfig,
    pub contact: ContactConfig,
}

impl AppConfig {
    /// Parse a JSON config; absent keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: AppConfig = serde_json::from_str(text).context("parsing config JSON")?;
        Ok(cfg.normalized())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text)
    }

    /// Load from `$RESEARCHER_PROFILE_CONFIG` or `profile.json`, falling back
    /// to defaults when the file is absent or broken.
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config at {}, using built-in profile", path.display());
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(cfg) => {
                log::info!("Loaded config from {}", path.display());
                cfg
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {e:#}", path.display());
                Self::default()
            }
        }
    }

    fn normalized(mut self) -> Self {
        if self.scholar.limit > MAX_PUBLICATION_LIMIT {
            log::warn!(
                "scholar.limit {} exceeds one profile page, using {MAX_PUBLICATION_LIMIT}",
                self.scholar.limit
            );
        }
        self.scholar.limit = self.scholar.limit.clamp(1, MAX_PUBLICATION_LIMIT);
        self.scholar.timeout_secs = self.scholar.timeout_secs.max(1);
        self.scholar.max_attempts = self.scholar.max_attempts.max(1);
        self.scholar.base_url = self.scholar.base_url.trim_end_matches('/').to_string();
        self
    }
}
