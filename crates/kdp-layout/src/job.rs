//! Export job tracking
//!
//! A job moves pending -> processing -> completed | failed. A pending job
//! may also fail directly, e.g. when geometry can't be computed.

use crate::types::{LayoutError, LayoutResult};
use chrono::{DateTime, Utc};
use std::fmt;
use std::path::{Path, PathBuf};

/// Handle to an export job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobId(pub u64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "job-{}", self.0)
    }
}

/// What gets produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExportKind {
    #[default]
    Interior,
    Cover,
    /// Interior and cover
    Complete,
}

impl ExportKind {
    pub fn id(self) -> &'static str {
        match self {
            ExportKind::Interior => "interior",
            ExportKind::Cover => "cover",
            ExportKind::Complete => "complete",
        }
    }

    pub fn includes_interior(self) -> bool {
        matches!(self, ExportKind::Interior | ExportKind::Complete)
    }

    pub fn includes_cover(self) -> bool {
        matches!(self, ExportKind::Cover | ExportKind::Complete)
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExportStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
}

impl ExportStatus {
    pub fn id(self) -> &'static str {
        match self {
            ExportStatus::Pending => "pending",
            ExportStatus::Processing => "processing",
            ExportStatus::Completed => "completed",
            ExportStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ExportStatus::Completed | ExportStatus::Failed)
    }
}

impl fmt::Display for ExportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ExportJob {
    pub id: JobId,
    pub book_id: String,
    pub kind: ExportKind,
    pub status: ExportStatus,
    /// 0..=100
    pub progress: u8,
    pub output_paths: Vec<PathBuf>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ExportJob {
    pub fn new(id: JobId, book_id: impl Into<String>, kind: ExportKind) -> Self {
        Self {
            id,
            book_id: book_id.into(),
            kind,
            status: ExportStatus::Pending,
            progress: 0,
            output_paths: Vec::new(),
            error: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// pending -> processing
    pub fn start(&mut self) -> LayoutResult<()> {
        self.transition(ExportStatus::Processing)?;
        log::debug!("{} processing", self.id);
        Ok(())
    }

    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress.min(100);
    }

    /// processing -> completed
    pub fn complete(&mut self, output_paths: Vec<PathBuf>) -> LayoutResult<()> {
        self.transition(ExportStatus::Completed)?;
        self.progress = 100;
        self.output_paths = output_paths;
        self.completed_at = Some(Utc::now());
        log::info!("{} completed: {} file(s)", self.id, self.output_paths.len());
        Ok(())
    }

    /// pending | processing -> failed
    pub fn fail(&mut self, error: impl Into<String>) -> LayoutResult<()> {
        self.transition(ExportStatus::Failed)?;
        let error = error.into();
        log::warn!("{} failed: {}", self.id, error);
        self.error = Some(error);
        self.completed_at = Some(Utc::now());
        Ok(())
    }

    fn transition(&mut self, to: ExportStatus) -> LayoutResult<()> {
        let allowed = matches!(
            (self.status, to),
            (ExportStatus::Pending, ExportStatus::Processing)
                | (ExportStatus::Processing, ExportStatus::Completed)
                | (ExportStatus::Pending, ExportStatus::Failed)
                | (ExportStatus::Processing, ExportStatus::Failed)
        );
        if !allowed {
            return Err(LayoutError::InvalidTransition {
                from: self.status.to_string(),
                to: to.to_string(),
            });
        }
        self.status = to;
        Ok(())
    }
}

/// `<title>_<kind>_<timestamp>.pdf`, with every character of the title that
/// isn't an ASCII letter or digit replaced by `_`.
pub fn output_filename(title: &str, kind: ExportKind, timestamp_ms: i64) -> String {
    let safe_title: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}_{}_{}.pdf", safe_title, kind, timestamp_ms)
}

/// Join [`output_filename`] onto an export directory
pub fn output_path(dir: &Path, title: &str, kind: ExportKind, timestamp_ms: i64) -> PathBuf {
    dir.join(output_filename(title, kind, timestamp_ms))
}
