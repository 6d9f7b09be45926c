//! Persisted persona documents.
//!
//! An export wraps the full [`Profile`] with a schema version, timestamp and
//! the persona description so the file is readable on its own.

use crate::error::ExportError;
use crate::profile::Profile;
use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const SCHEMA_VERSION: u32 = 1;

static RE_SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileExport {
    pub schema_version: u32,
    pub exported_at: String,
    pub summary: String,
    pub profile: Profile,
}

impl ProfileExport {
    pub fn new(profile: Profile) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            exported_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            summary: profile.describe(),
            profile,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an export document. A bare profile record is accepted too and
    /// wrapped in a fresh export.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.get("profile").is_none() {
            let profile: Profile = serde_json::from_value(value)?;
            return Ok(Self::new(profile));
        }
        let export: ProfileExport = serde_json::from_value(value)?;
        if export.schema_version != SCHEMA_VERSION {
            return Err(ExportError::UnsupportedSchema {
                found: export.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        Ok(export)
    }

    /// Suggested download name, e.g. `neural-profile-temple-archivist.json`.
    pub fn file_name(&self) -> String {
        let source = match self.profile.background() {
            Some(background) => background.to_string(),
            None => format!("{} persona", self.profile.age_group().as_str()),
        };
        let slug = slugify(&source);
        let slug = if slug.is_empty() { "character".to_string() } else { slug };
        format!("neural-profile-{}.json", slug)
    }

    /// Write the document into `dir` under [`Self::file_name`].
    pub fn save_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(self.file_name());
        let json = self.to_json_pretty()?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write profile export: {}", path.display()))?;
        tracing::info!("Profile exported to {}", path.display());
        Ok(path)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read profile file: {}", path.as_ref().display())
        })?;
        let export = Self::from_json(&content)
            .with_context(|| format!("Failed to import profile: {}", path.as_ref().display()))?;
        Ok(export)
    }
}

pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    RE_SLUG.replace_all(&lower, "-").trim_matches('-').to_string()
}
