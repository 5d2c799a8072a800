//! XML configuration support.
//! - Loads persistent defaults from config.xml (quick_xml + serde).
//! - `$RENAWIN_CONFIG` points at an explicit file; otherwise the platform config dir is used.
//!
//! Notes:
//! - Unknown XML fields are rejected to surface typos early.
//! - A missing default file simply means "no settings"; a missing explicit file is an error.

use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::config_path;
use crate::config::types::{Config, LogLevel};
use crate::errors::RenawinError;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "replacement")]
    replacement: Option<String>,
    #[serde(rename = "start_index", default, deserialize_with = "de_u64_trimmed_opt")]
    start_index: Option<u64>,
    #[serde(rename = "depth", default, deserialize_with = "de_u64_trimmed_opt")]
    depth: Option<u64>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
}

// Custom deserializer that trims surrounding whitespace for optional u64
fn de_u64_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| s.trim().parse::<u64>().ok()))
}

/// Settings read from a config file. Every field is optional; unset fields
/// leave the built-in default in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSettings {
    pub replacement: Option<String>,
    pub start_index: Option<u64>,
    pub depth: Option<usize>,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
}

impl FileSettings {
    /// Overlay file settings on `cfg`.
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(r) = &self.replacement {
            cfg.replacement = r.clone();
        }
        if let Some(i) = self.start_index {
            cfg.start_index = i;
        }
        if let Some(d) = self.depth {
            cfg.max_depth = Some(d);
        }
        if let Some(l) = &self.log_level {
            cfg.log_level = l.clone();
        }
        if let Some(f) = &self.log_file {
            cfg.log_file = Some(f.clone());
        }
    }
}

// Map XmlConfig -> FileSettings
fn xml_to_settings(parsed: XmlConfig) -> FileSettings {
    let log_file = parsed.log_file.as_deref().map(str::trim).filter(|s| !s.is_empty());
    FileSettings {
        log_file: log_file.map(PathBuf::from),
        log_level: parsed.log_level.as_deref().and_then(LogLevel::parse),
        depth: parsed.depth.and_then(|d| usize::try_from(d).ok()),
        start_index: parsed.start_index,
        replacement: parsed.replacement,
    }
}

/// Parse settings from XML text.
pub fn parse_settings(contents: &str) -> Result<FileSettings, quick_xml::DeError> {
    let parsed: XmlConfig = from_xml_str(contents)?;
    Ok(xml_to_settings(parsed))
}

/// Load settings from a specific XML file path.
pub fn load_settings_from_path(path: &Path) -> Result<FileSettings, RenawinError> {
    let contents = fs::read_to_string(path).map_err(|e| RenawinError::ConfigFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_settings(&contents).map_err(|e| RenawinError::ConfigFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load settings from `$RENAWIN_CONFIG` or the default config path.
/// Returns Ok(None) when no explicit file is configured and the default one does not exist.
pub fn load_settings() -> Result<Option<(PathBuf, FileSettings)>, RenawinError> {
    let Some((path, explicit)) = config_path() else {
        return Ok(None);
    };
    if !explicit && !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(None);
    }
    let settings = load_settings_from_path(&path)?;
    debug!(path = %path.display(), ?settings, "loaded config file");
    Ok(Some((path, settings)))
}
