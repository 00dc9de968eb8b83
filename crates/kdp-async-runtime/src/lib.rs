//! Command/update channel types and the export worker.
//!
//! Callers send [`ExportCommand`]s to [`worker_task`] and receive
//! [`ExportUpdate`]s back. Geometry is always computed before any render
//! work is started.

mod handlers;
mod worker;

use std::path::PathBuf;

// Re-export types from the layout crate
pub use kdp_layout::{
    CoverGeometry, ExportConfig, ExportJob, ExportKind, ExportSettings, InteriorGeometry, JobId,
    ValidationReport,
};
pub use worker::worker_task;

/// Commands sent from the API layer to the worker
#[derive(Debug)]
pub enum ExportCommand {
    Validate {
        config: ExportConfig,
    },
    /// Compute geometry only; queued requests collapse to the most recent
    Geometry {
        settings: ExportSettings,
        page_count: u32,
    },
    Render {
        job_id: JobId,
        kind: ExportKind,
        config: ExportConfig,
        page_count: u32,
        book_title: String,
        output_dir: PathBuf,
    },
}

/// Updates sent from the worker back to the caller
#[derive(Debug, Clone)]
pub enum ExportUpdate {
    Validated {
        report: ValidationReport,
    },
    GeometryComputed {
        settings: ExportSettings,
        interior: InteriorGeometry,
        cover: CoverGeometry,
    },
    JobQueued {
        job: ExportJob,
    },
    JobProgress {
        job_id: JobId,
        progress: u8,
    },
    JobCompleted {
        job: ExportJob,
    },
    JobFailed {
        job: ExportJob,
    },
    Error {
        message: String,
    },
}
