//! Runtime settings for the CLI: which digest to use and how to print results.
//!
//! Field constants are not configurable; they live in [`crate::constants`].

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::crypto::registry::{supported_ids, DigestKind};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "frfold.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Decimal,
    Hex,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" | "dec" => Ok(Self::Decimal),
            "hex" => Ok(Self::Hex),
            "json" => Ok(Self::Json),
            other => Err(anyhow!("unknown output format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_hash")]
    pub hash: String, // e.g., "sha256"
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_hash() -> String {
    "sha256".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hash: default_hash(),
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    pub fn new<S: Into<String>>(hash: S, output: OutputFormat) -> Self {
        Self {
            hash: hash.into(),
            output,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.hash.trim().is_empty() {
            return Err(anyhow!("hash id cannot be empty"));
        }
        if DigestKind::from_id(&self.hash).is_err() {
            return Err(anyhow!(
                "hash '{}' not supported (expected one of {})",
                self.hash,
                supported_ids()
            ));
        }
        Ok(())
    }

    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg: Config =
            toml::from_str(&s).with_context(|| format!("parsing config {}", path.display()))?;
        cfg.validate()
            .with_context(|| format!("validating config {}", path.display()))?;
        Ok(cfg)
    }

    /// Explicit path: must load. No path: use `frfold.toml` if present, else
    /// defaults; a broken default file is reported and ignored.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(p) = path {
            return Self::load(p);
        }
        let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
        if !fallback.is_file() {
            return Ok(Self::default());
        }
        Ok(Self::load(&fallback).unwrap_or_else(|e| {
            log::warn!("failed to load {}: {e:#}", fallback.display());
            Self::default()
        }))
    }
}
