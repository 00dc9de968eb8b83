use crate::catalog::TrimSize;
use crate::types::*;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Export request as it arrives from a form or API body.
///
/// Fields are kept as raw strings so that validation can report every
/// problem at once instead of stopping at the first bad value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ExportConfig {
    pub book_id: String,
    pub trim_size: String,
    pub paper_type: String,
    pub include_bleed: bool,
    pub color_mode: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            book_id: String::new(),
            trim_size: TrimSize::In8_5x8_5.id().to_string(),
            paper_type: PaperType::White.id().to_string(),
            include_bleed: true,
            color_mode: ColorMode::Color.id().to_string(),
        }
    }
}

/// A validated export configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ExportSettings {
    pub book_id: String,
    pub trim_size: TrimSize,
    pub paper_type: PaperType,
    pub include_bleed: bool,
    pub color_mode: ColorMode,
}

impl From<ExportSettings> for ExportConfig {
    fn from(settings: ExportSettings) -> Self {
        Self {
            book_id: settings.book_id,
            trim_size: settings.trim_size.id().to_string(),
            paper_type: settings.paper_type.id().to_string(),
            include_bleed: settings.include_bleed,
            color_mode: settings.color_mode.id().to_string(),
        }
    }
}

/// Outcome of [`validate_export_config`]: every violation found, in check order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    pub errors: Vec<LayoutError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(", "))
    }
}

/// Check an export config, collecting all violations rather than failing fast.
///
/// Page-count bounds and other business policy are not checked here.
pub fn validate_export_config(config: &ExportConfig) -> ValidationReport {
    let mut errors = Vec::new();

    if config.book_id.is_empty() {
        errors.push(LayoutError::MissingBookId);
    }
    if let Err(e) = config.trim_size.parse::<TrimSize>() {
        errors.push(e);
    }
    if let Err(e) = config.paper_type.parse::<PaperType>() {
        errors.push(e);
    }
    if let Err(e) = config.color_mode.parse::<ColorMode>() {
        errors.push(e);
    }

    ValidationReport { errors }
}

impl ExportConfig {
    pub fn validate(&self) -> ValidationReport {
        validate_export_config(self)
    }

    /// Validate and convert into typed settings
    pub fn resolve(&self) -> std::result::Result<ExportSettings, ValidationReport> {
        let report = self.validate();
        if !report.is_valid() {
            return Err(report);
        }

        match (
            self.trim_size.parse(),
            self.paper_type.parse(),
            self.color_mode.parse(),
        ) {
            (Ok(trim_size), Ok(paper_type), Ok(color_mode)) => Ok(ExportSettings {
                book_id: self.book_id.clone(),
                trim_size,
                paper_type,
                include_bleed: self.include_bleed,
                color_mode,
            }),
            _ => Err(report),
        }
    }

    /// Load a config from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config = serde_json::from_slice(&bytes)
            .map_err(|e| ExportError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Save the config as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ExportError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
