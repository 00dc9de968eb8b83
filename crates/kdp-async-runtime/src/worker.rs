use kdp_layout::Renderer;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::handlers::{self, RenderRequest};
use crate::{ExportCommand, ExportUpdate};

/// Async worker task that processes export commands and sends updates.
///
/// Runs until every command sender has been dropped.
pub async fn worker_task<R>(
    renderer: R,
    mut command_rx: mpsc::UnboundedReceiver<ExportCommand>,
    update_tx: mpsc::UnboundedSender<ExportUpdate>,
) where
    R: Renderer + Send + Sync + 'static,
{
    let renderer = Arc::new(renderer);

    while let Some(cmd) = command_rx.recv().await {
        let mut next = Some(cmd);
        while let Some(cmd) = next {
            next = process_command(cmd, &renderer, &mut command_rx, &update_tx).await;
        }
    }

    log::debug!("Export worker stopped: command channel closed");
}

/// Handle one command. Returns a command pulled off the channel while
/// draining geometry requests, which must run next to keep arrival order.
async fn process_command<R>(
    cmd: ExportCommand,
    renderer: &Arc<R>,
    command_rx: &mut mpsc::UnboundedReceiver<ExportCommand>,
    update_tx: &mpsc::UnboundedSender<ExportUpdate>,
) -> Option<ExportCommand>
where
    R: Renderer + Send + Sync + 'static,
{
    match cmd {
        ExportCommand::Validate { config } => {
            handlers::handle_validate(config, update_tx);
            None
        }
        ExportCommand::Geometry {
            mut settings,
            mut page_count,
        } => {
            // Collapse consecutive geometry requests, keeping only the most recent
            let mut held = None;
            while let Ok(next_cmd) = command_rx.try_recv() {
                match next_cmd {
                    ExportCommand::Geometry {
                        settings: new_settings,
                        page_count: new_page_count,
                    } => {
                        log::debug!("Discarding queued geometry request, using newer request");
                        settings = new_settings;
                        page_count = new_page_count;
                    }
                    other => {
                        held = Some(other);
                        break;
                    }
                }
            }

            handlers::handle_geometry(settings, page_count, update_tx);
            held
        }
        ExportCommand::Render {
            job_id,
            kind,
            config,
            page_count,
            book_title,
            output_dir,
        } => {
            let request = RenderRequest {
                job_id,
                kind,
                config,
                page_count,
                book_title,
                output_dir,
            };
            handlers::handle_render(request, renderer, update_tx).await;
            None
        }
    }
}
