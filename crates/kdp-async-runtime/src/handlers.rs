use chrono::Utc;
use kdp_layout::job::output_path;
use kdp_layout::{
    ExportConfig, ExportError, ExportJob, ExportKind, ExportSettings, ExportStatus, JobId,
    LayoutError, Renderer, cover_geometry, interior_geometry, save_pdf,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::ExportUpdate;

/// Progress reported once geometry is resolved and rendering begins
const PROGRESS_STARTED: u8 = 10;

pub(crate) struct RenderRequest {
    pub job_id: JobId,
    pub kind: ExportKind,
    pub config: ExportConfig,
    pub page_count: u32,
    pub book_title: String,
    pub output_dir: PathBuf,
}

pub(crate) fn handle_validate(
    config: ExportConfig,
    update_tx: &mpsc::UnboundedSender<ExportUpdate>,
) {
    let report = config.validate();
    if !report.is_valid() {
        log::debug!("Export config rejected: {}", report);
    }
    let _ = update_tx.send(ExportUpdate::Validated { report });
}

pub(crate) fn handle_geometry(
    settings: ExportSettings,
    page_count: u32,
    update_tx: &mpsc::UnboundedSender<ExportUpdate>,
) {
    match cover_geometry(
        settings.trim_size,
        page_count,
        settings.paper_type,
        settings.include_bleed,
    ) {
        Ok(cover) => {
            let interior = interior_geometry(settings.trim_size, settings.include_bleed);
            let _ = update_tx.send(ExportUpdate::GeometryComputed {
                settings,
                interior,
                cover,
            });
        }
        Err(e) => {
            let _ = update_tx.send(ExportUpdate::Error {
                message: e.to_string(),
            });
        }
    }
}

pub(crate) async fn handle_render<R>(
    request: RenderRequest,
    renderer: &Arc<R>,
    update_tx: &mpsc::UnboundedSender<ExportUpdate>,
) where
    R: Renderer + Send + Sync + 'static,
{
    let mut job = ExportJob::new(request.job_id, request.config.book_id.clone(), request.kind);
    log::info!("{} queued: {} export for book '{}'", job.id, job.kind, job.book_id);
    let _ = update_tx.send(ExportUpdate::JobQueued { job: job.clone() });

    let mut written = Vec::new();
    let outcome = run_render(&mut job, &request, renderer, &mut written, update_tx).await;
    let finished = match outcome {
        Ok(()) => job.complete(written),
        Err(e) => {
            remove_partial_output(&written).await;
            job.fail(e.to_string())
        }
    };

    if let Err(e) = finished {
        let _ = update_tx.send(ExportUpdate::Error {
            message: e.to_string(),
        });
        return;
    }

    let update = match job.status {
        ExportStatus::Completed => ExportUpdate::JobCompleted { job },
        _ => ExportUpdate::JobFailed { job },
    };
    let _ = update_tx.send(update);
}

/// Render every part of the job, pushing each file onto `paths` once it is on disk
async fn run_render<R>(
    job: &mut ExportJob,
    request: &RenderRequest,
    renderer: &Arc<R>,
    paths: &mut Vec<PathBuf>,
    update_tx: &mpsc::UnboundedSender<ExportUpdate>,
) -> kdp_layout::Result<()>
where
    R: Renderer + Send + Sync + 'static,
{
    let settings = request
        .config
        .resolve()
        .map_err(|report| ExportError::Config(report.to_string()))?;

    if request.page_count == 0 {
        return Err(LayoutError::InvalidPageCount(0).into());
    }

    // Geometry is cheap and resolved before any render work starts
    let interior = interior_geometry(settings.trim_size, settings.include_bleed);
    let cover = if request.kind.includes_cover() {
        Some(cover_geometry(
            settings.trim_size,
            request.page_count,
            settings.paper_type,
            settings.include_bleed,
        )?)
    } else {
        None
    };

    job.start()?;
    send_progress(job, PROGRESS_STARTED, update_tx);

    tokio::fs::create_dir_all(&request.output_dir).await?;
    let timestamp = Utc::now().timestamp_millis();
    let parts = usize::from(request.kind.includes_interior()) + usize::from(cover.is_some());

    if request.kind.includes_interior() {
        let renderer = Arc::clone(renderer);
        let page_count = request.page_count;
        let color_mode = settings.color_mode;
        let doc = tokio::task::spawn_blocking(move || {
            renderer.render_interior(&interior, page_count, color_mode)
        })
        .await??;

        let path = output_path(
            &request.output_dir,
            &request.book_title,
            ExportKind::Interior,
            timestamp,
        );
        save_pdf(doc, &path).await?;
        paths.push(path);
        send_progress(job, part_progress(paths.len(), parts), update_tx);
    }

    if let Some(cover) = cover {
        let renderer = Arc::clone(renderer);
        let color_mode = settings.color_mode;
        let doc = tokio::task::spawn_blocking(move || renderer.render_cover(&cover, color_mode))
            .await??;

        let path = output_path(
            &request.output_dir,
            &request.book_title,
            ExportKind::Cover,
            timestamp,
        );
        save_pdf(doc, &path).await?;
        paths.push(path);
        send_progress(job, part_progress(paths.len(), parts), update_tx);
    }

    Ok(())
}

/// A failed job keeps no output, so drop whatever parts were already written
async fn remove_partial_output(paths: &[PathBuf]) {
    for path in paths {
        match tokio::fs::remove_file(path).await {
            Ok(()) => log::debug!("removed partial export {}", path.display()),
            Err(e) => log::warn!("could not remove partial export {}: {}", path.display(), e),
        }
    }
}

fn part_progress(done: usize, total: usize) -> u8 {
    let span = usize::from(100 - PROGRESS_STARTED);
    let progress = usize::from(PROGRESS_STARTED) + span * done / total.max(1);
    u8::try_from(progress).unwrap_or(100)
}

fn send_progress(
    job: &mut ExportJob,
    progress: u8,
    update_tx: &mpsc::UnboundedSender<ExportUpdate>,
) {
    job.set_progress(progress);
    let _ = update_tx.send(ExportUpdate::JobProgress {
        job_id: job.id,
        progress: job.progress,
    });
}
