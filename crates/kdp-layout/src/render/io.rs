//! Document I/O for rendered output

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Load a PDF document, e.g. to inspect a rendered template
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Serialize and write a rendered document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, ExportError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    log::info!("wrote {}", path.display());
    Ok(())
}
