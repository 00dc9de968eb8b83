use kdp_async_runtime::*;
use kdp_layout::{
    ColorMode, CoverGeometry, ExportError, ExportStatus, InteriorGeometry, PaperType, Renderer,
    TemplateRenderer, TrimSize, load_pdf,
};
use lopdf::Document;
use std::path::Path;
use tokio::sync::mpsc;

fn config(book_id: &str, trim: &str) -> ExportConfig {
    ExportConfig {
        book_id: book_id.to_string(),
        trim_size: trim.to_string(),
        ..Default::default()
    }
}

fn settings(trim_size: TrimSize) -> ExportSettings {
    ExportSettings {
        book_id: "b1".to_string(),
        trim_size,
        paper_type: PaperType::White,
        include_bleed: true,
        color_mode: ColorMode::Color,
    }
}

fn render(
    job_id: u64,
    kind: ExportKind,
    config: ExportConfig,
    pages: u32,
    dir: &Path,
) -> ExportCommand {
    ExportCommand::Render {
        job_id: JobId(job_id),
        kind,
        config,
        page_count: pages,
        book_title: "Luna's Moon".to_string(),
        output_dir: dir.to_path_buf(),
    }
}

/// Renders interiors normally but cannot produce a cover
struct CoverlessRenderer(TemplateRenderer);

impl Renderer for CoverlessRenderer {
    fn render_interior(
        &self,
        geometry: &InteriorGeometry,
        page_count: u32,
        color_mode: ColorMode,
    ) -> kdp_layout::Result<Document> {
        self.0.render_interior(geometry, page_count, color_mode)
    }

    fn render_cover(&self, _: &CoverGeometry, _: ColorMode) -> kdp_layout::Result<Document> {
        Err(ExportError::Config("cover artwork missing".to_string()))
    }
}

/// Run the worker over a fixed batch of commands and collect every update
async fn run_batch(commands: Vec<ExportCommand>) -> Vec<ExportUpdate> {
    run_batch_with(TemplateRenderer::default(), commands).await
}

async fn run_batch_with<R>(renderer: R, commands: Vec<ExportCommand>) -> Vec<ExportUpdate>
where
    R: Renderer + Send + Sync + 'static,
{
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();

    for cmd in commands {
        command_tx.send(cmd).unwrap();
    }
    drop(command_tx);

    worker_task(renderer, command_rx, update_tx).await;

    let mut updates = Vec::new();
    while let Some(update) = update_rx.recv().await {
        updates.push(update);
    }
    updates
}

fn finished_job(updates: &[ExportUpdate]) -> ExportJob {
    updates
        .iter()
        .find_map(|u| match u {
            ExportUpdate::JobCompleted { job } | ExportUpdate::JobFailed { job } => {
                Some(job.clone())
            }
            _ => None,
        })
        .expect("job should finish")
}

#[tokio::test]
async fn test_validate_reports_all_errors() {
    let updates = run_batch(vec![
        ExportCommand::Validate {
            config: config("b1", "6x9"),
        },
        ExportCommand::Validate {
            config: config("", "bogus"),
        },
    ])
    .await;

    assert_eq!(updates.len(), 2);
    match &updates[0] {
        ExportUpdate::Validated { report } => assert!(report.is_valid()),
        other => panic!("unexpected update {:?}", other),
    }
    match &updates[1] {
        ExportUpdate::Validated { report } => assert_eq!(report.errors.len(), 2),
        other => panic!("unexpected update {:?}", other),
    }
}

#[tokio::test]
async fn test_complete_export_writes_interior_and_cover() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("exports");

    let updates = run_batch(vec![render(
        7,
        ExportKind::Complete,
        config("b1", "8.5x8.5"),
        32,
        &out_dir,
    )])
    .await;

    assert!(matches!(updates[0], ExportUpdate::JobQueued { .. }));

    let progress: Vec<u8> = updates
        .iter()
        .filter_map(|u| match u {
            ExportUpdate::JobProgress { progress, .. } => Some(*progress),
            _ => None,
        })
        .collect();
    assert_eq!(progress, vec![10, 55, 100]);

    let job = finished_job(&updates);
    assert_eq!(job.id, JobId(7));
    assert_eq!(job.status, ExportStatus::Completed);
    assert_eq!(job.progress, 100);
    assert_eq!(job.output_paths.len(), 2);

    let interior_path = &job.output_paths[0];
    let file_name = interior_path.file_name().unwrap().to_string_lossy();
    assert!(file_name.starts_with("Luna_s_Moon_interior_"));
    assert!(file_name.ends_with(".pdf"));

    let interior = load_pdf(interior_path).await.unwrap();
    assert_eq!(interior.get_pages().len(), 32);

    let cover = load_pdf(&job.output_paths[1]).await.unwrap();
    assert_eq!(cover.get_pages().len(), 1);
}

#[tokio::test]
async fn test_invalid_config_fails_job_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("exports");

    let updates = run_batch(vec![render(
        8,
        ExportKind::Interior,
        config("", "bogus"),
        24,
        &out_dir,
    )])
    .await;

    let job = finished_job(&updates);
    assert_eq!(job.status, ExportStatus::Failed);
    let error = job.error.unwrap();
    assert!(error.contains("Book ID is required"));
    assert!(error.contains("Invalid trim size: bogus"));
    assert!(job.output_paths.is_empty());
    assert!(!out_dir.exists());
}

#[tokio::test]
async fn test_zero_pages_fails_job() {
    let dir = tempfile::tempdir().unwrap();

    let updates = run_batch(vec![render(
        9,
        ExportKind::Cover,
        config("b1", "6x9"),
        0,
        dir.path(),
    )])
    .await;

    let job = finished_job(&updates);
    assert_eq!(job.status, ExportStatus::Failed);
    assert!(job.error.unwrap().contains("Invalid page count"));
}

#[tokio::test]
async fn test_queued_geometry_requests_collapse() {
    let updates = run_batch(vec![
        ExportCommand::Geometry {
            settings: settings(TrimSize::In5x8),
            page_count: 24,
        },
        ExportCommand::Geometry {
            settings: settings(TrimSize::In6x9),
            page_count: 24,
        },
        ExportCommand::Validate {
            config: config("b1", "6x9"),
        },
        ExportCommand::Geometry {
            settings: settings(TrimSize::In8_5x8_5),
            page_count: 32,
        },
    ])
    .await;

    assert_eq!(updates.len(), 3);
    match &updates[0] {
        ExportUpdate::GeometryComputed { settings, .. } => {
            assert_eq!(settings.trim_size, TrimSize::In6x9);
        }
        other => panic!("unexpected update {:?}", other),
    }
    assert!(matches!(updates[1], ExportUpdate::Validated { .. }));
    match &updates[2] {
        ExportUpdate::GeometryComputed {
            settings,
            interior,
            cover,
        } => {
            assert_eq!(settings.trim_size, TrimSize::In8_5x8_5);
            assert_eq!(interior.page_width, 630.0);
            assert!(cover.spine_below_minimum_gutter());
        }
        other => panic!("unexpected update {:?}", other),
    }
}

#[tokio::test]
async fn test_geometry_answered_before_later_render() {
    let dir = tempfile::tempdir().unwrap();

    let updates = run_batch(vec![
        ExportCommand::Geometry {
            settings: settings(TrimSize::In6x9),
            page_count: 24,
        },
        render(3, ExportKind::Interior, config("b1", "6x9"), 24, dir.path()),
    ])
    .await;

    assert!(matches!(updates[0], ExportUpdate::GeometryComputed { .. }));
    assert!(matches!(updates[1], ExportUpdate::JobQueued { .. }));
    assert!(matches!(
        updates.last(),
        Some(ExportUpdate::JobCompleted { .. })
    ));
}

#[tokio::test]
async fn test_failed_cover_removes_written_interior() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("exports");

    let updates = run_batch_with(
        CoverlessRenderer(TemplateRenderer::default()),
        vec![render(
            4,
            ExportKind::Complete,
            config("b1", "8.5x8.5"),
            32,
            &out_dir,
        )],
    )
    .await;

    let job = finished_job(&updates);
    assert_eq!(job.status, ExportStatus::Failed);
    assert!(job.error.unwrap().contains("cover artwork missing"));
    assert!(job.output_paths.is_empty());
    assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 0);
}

#[tokio::test]
async fn test_geometry_with_zero_pages_reports_error() {
    let updates = run_batch(vec![ExportCommand::Geometry {
        settings: settings(TrimSize::In6x9),
        page_count: 0,
    }])
    .await;

    match &updates[..] {
        [ExportUpdate::Error { message }] => assert!(message.contains("Invalid page count")),
        other => panic!("unexpected updates {:?}", other),
    }
}
