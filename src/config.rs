//! Build-time Configuration
//!
//! Values come from environment variables captured when the WASM bundle is
//! built (`TASK_API_URL`, `TASK_SUBMIT_MODE`, `TASK_TARGETS`,
//! `TASK_LOG_LEVEL`). Missing or malformed values fall back to defaults.

use log::LevelFilter;

use crate::api::{HttpTaskApi, LocalTaskApi, TaskApi};
use crate::models::{TargetPreset, CUSTOM_TARGET};

pub const DEFAULT_ENDPOINT: &str =
    "https://20fphbhsbc.execute-api.us-east-1.amazonaws.com/prod/task";

const DEFAULT_TARGETS: &str = "shao=Shao";

/// Where submissions go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitMode {
    /// POST to the task endpoint
    #[default]
    Remote,
    /// Log the payload and confirm locally; the payload is logged at
    /// `info`, so a `warn`/`error`/`off` log level hides it
    LocalOnly,
}

impl SubmitMode {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" | "local-only" => SubmitMode::LocalOnly,
            "remote" => SubmitMode::Remote,
            other => {
                log::warn!("unknown submit mode {:?}, using remote", other);
                SubmitMode::Remote
            }
        }
    }
}

/// Frontend configuration provided via context
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub endpoint: String,
    pub mode: SubmitMode,
    /// Preset targets; never empty
    pub target_presets: Vec<TargetPreset>,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_vars(None, None, None, None)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            option_env!("TASK_API_URL"),
            option_env!("TASK_SUBMIT_MODE"),
            option_env!("TASK_TARGETS"),
            option_env!("TASK_LOG_LEVEL"),
        )
    }

    pub fn from_vars(
        endpoint: Option<&str>,
        mode: Option<&str>,
        targets: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let endpoint = endpoint
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT)
            .to_string();

        let mut target_presets = parse_targets(targets.unwrap_or(DEFAULT_TARGETS));
        if target_presets.is_empty() {
            target_presets = parse_targets(DEFAULT_TARGETS);
        }

        Self {
            endpoint,
            mode: mode.map(SubmitMode::parse).unwrap_or_default(),
            target_presets,
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(LevelFilter::Info),
        }
    }

    /// Preset selected when the form first loads or resets
    pub fn initial_target(&self) -> String {
        self.target_presets
            .first()
            .map(|preset| preset.value.clone())
            .unwrap_or_else(|| CUSTOM_TARGET.to_string())
    }

    /// Task API for the configured mode
    pub fn task_api(&self) -> Box<dyn TaskApi> {
        match self.mode {
            SubmitMode::Remote => Box::new(HttpTaskApi::new(self.endpoint.clone())),
            SubmitMode::LocalOnly => Box::new(LocalTaskApi),
        }
    }
}

/// Parse `value` or `value=Label` entries separated by commas
///
/// The custom-target value is reserved and skipped.
fn parse_targets(spec: &str) -> Vec<TargetPreset> {
    spec.split(',')
        .filter_map(|entry| {
            let (value, label) = match entry.split_once('=') {
                Some((value, label)) => (value.trim(), label.trim()),
                None => (entry.trim(), entry.trim()),
            };
            if value.is_empty() || value == CUSTOM_TARGET {
                return None;
            }
            let label = if label.is_empty() { value } else { label };
            Some(TargetPreset {
                value: value.to_string(),
                label: label.to_string(),
            })
        })
        .collect()
}
