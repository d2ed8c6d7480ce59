// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use docket_app::{CaseNumbering, TabKind};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub const APP_NAME: &str = "docket";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub cases: Cases,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            cases: Cases::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub start_tab: Option<String>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            start_tab: Some(TabKind::Cases.label().to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cases {
    pub numbering: Option<String>,
}

impl Default for Cases {
    fn default() -> Self {
        Self {
            numbering: Some(CaseNumbering::StoreLength.as_str().to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub level: Option<String>,
    pub path: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
            path: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("DOCKET_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set DOCKET_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} has no version. Add `version = 1` and keep values under [ui], [cases], and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(tab) = &self.ui.start_tab
            && TabKind::parse(tab).is_none()
        {
            bail!(
                "ui.start_tab in {} must be \"cases\" or \"clients\", got {tab:?}",
                path.display()
            );
        }

        if let Some(numbering) = &self.cases.numbering
            && CaseNumbering::parse(numbering).is_none()
        {
            bail!(
                "cases.numbering in {} must be \"store_length\" or \"monotonic\", got {numbering:?}",
                path.display()
            );
        }

        if let Some(level) = &self.log.level {
            EnvFilter::try_new(level).with_context(|| {
                format!(
                    "log.level in {} is not a valid filter: {level:?}",
                    path.display()
                )
            })?;
        }

        if let Some(log_path) = &self.log.path
            && log_path.trim().is_empty()
        {
            bail!(
                "log.path in {} is empty; remove it to disable logging",
                path.display()
            );
        }

        Ok(())
    }

    pub fn start_tab(&self) -> TabKind {
        self.ui
            .start_tab
            .as_deref()
            .and_then(TabKind::parse)
            .unwrap_or(TabKind::Cases)
    }

    pub fn case_numbering(&self) -> CaseNumbering {
        self.cases
            .numbering
            .as_deref()
            .and_then(CaseNumbering::parse)
            .unwrap_or_default()
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log.path.as_deref().map(PathBuf::from)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# docket config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\n# \"cases\" or \"clients\"\nstart_tab = \"cases\"\n\n[cases]\n# \"store_length\" numbers a new case after the current case count and can\n# repeat a number after a deletion. \"monotonic\" never repeats.\nnumbering = \"store_length\"\n\n[log]\n# Filter directives, overridden by DOCKET_LOG.\nlevel = \"{}\"\n# Optional. Without a path nothing is logged.\n# path = \"/absolute/path/to/docket.log\"\n",
            path.display(),
            DEFAULT_LOG_LEVEL,
        )
    }
}
