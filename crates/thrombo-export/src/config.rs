use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

pub const DEFAULT_SPREADSHEET: &str = "patients.csv";

/// Everything the report side needs to know. The scoring engine takes no
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,

    /// CSV log that receives one row per assessment.
    #[serde(default = "default_spreadsheet_path")]
    pub spreadsheet_path: PathBuf,

    #[serde(default = "default_report_title")]
    pub report_title: String,

    /// Tera template replacing the built-in HTML report layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_template: Option<PathBuf>,

    #[serde(default)]
    pub document_styles: DocumentStyles,
}

fn default_spreadsheet_path() -> PathBuf {
    PathBuf::from(DEFAULT_SPREADSHEET)
}

fn default_report_title() -> String {
    "Antiplatelet therapy assessment".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            spreadsheet_path: default_spreadsheet_path(),
            report_title: default_report_title(),
            html_template: None,
            document_styles: DocumentStyles::default(),
        }
    }
}

impl ReportConfig {
    /// Load from `path`, migrating older layouts. A missing file yields
    /// the defaults.
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;

        // Parse as raw JSON so we can run migrations before deserializing.
        let json: serde_json::Value = serde_json::from_str(&contents)?;
        let on_disk_version = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        let migrated = migrate(json, on_disk_version)?;
        let config: ReportConfig = serde_json::from_value(migrated)?;
        Ok(config)
    }

    /// Write to `path` via a temporary file and rename.
    pub fn save(&self, path: &Path) -> Result<(), ExportError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }

        // Always write the current version, regardless of what was loaded.
        let mut stamped = self.clone();
        stamped.config_version = CURRENT_VERSION;
        let json = serde_json::to_string_pretty(&stamped)?;

        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes())?;
        std::fs::rename(&tmp_path, path)?;

        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, ExportError> {
    if from_version > CURRENT_VERSION {
        return Err(ExportError::Config(format!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        )));
    }

    // v0 → v1: the log path was called `workbook`
    if from_version < 1 {
        let Some(obj) = json.as_object_mut() else {
            return Err(ExportError::Config("config is not a JSON object".into()));
        };
        if let Some(workbook) = obj.remove("workbook") {
            obj.entry("spreadsheet_path").or_insert(workbook);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!(from_version, "migrated config to v1");
    }

    Ok(json)
}
