use kdp_layout::*;
use lopdf::Document;

fn page_box(doc: &Document, page_index: u32, key: &[u8]) -> Vec<f32> {
    let pages = doc.get_pages();
    let page_id = pages[&page_index];
    let dict = doc.get_dictionary(page_id).unwrap();
    dict.get(key)
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_float().unwrap())
        .collect()
}

fn page_content(doc: &Document, page_index: u32) -> String {
    let pages = doc.get_pages();
    let content = doc.get_page_content(pages[&page_index]).unwrap();
    String::from_utf8(content).unwrap()
}

#[test]
fn test_interior_template_boxes() {
    let geometry = interior_geometry(TrimSize::In8_5x8_5, true);
    let doc = TemplateRenderer::default()
        .render_interior(&geometry, 4, ColorMode::Color)
        .unwrap();

    assert_eq!(doc.get_pages().len(), 4);
    assert_eq!(page_box(&doc, 1, b"MediaBox"), vec![0.0, 0.0, 630.0, 630.0]);
    assert_eq!(page_box(&doc, 1, b"BleedBox"), vec![0.0, 0.0, 630.0, 630.0]);
    assert_eq!(page_box(&doc, 4, b"TrimBox"), vec![9.0, 9.0, 621.0, 621.0]);
}

#[test]
fn test_interior_template_rejects_zero_pages() {
    let geometry = interior_geometry(TrimSize::In6x9, false);
    let result = TemplateRenderer::default().render_interior(&geometry, 0, ColorMode::Color);
    assert!(matches!(
        result,
        Err(ExportError::Layout(LayoutError::InvalidPageCount(0)))
    ));
}

#[test]
fn test_interior_template_rejects_oversized_book() {
    let geometry = interior_geometry(TrimSize::In6x9, true);
    let renderer = TemplateRenderer::default();

    let result = renderer.render_interior(&geometry, 4_000_000_000, ColorMode::Color);
    assert!(matches!(
        result,
        Err(ExportError::Layout(LayoutError::TooManyPages {
            count: 4_000_000_000,
            max: 828
        }))
    ));

    let doc = renderer
        .render_interior(&geometry, 828, ColorMode::Color)
        .unwrap();
    assert_eq!(doc.get_pages().len(), 828);
}

#[test]
fn test_template_rejects_trim_outside_sheet() {
    let mut geometry = interior_geometry(TrimSize::In6x9, true);
    geometry.trim = Rect::new(9.0, 9.0, geometry.page_width, geometry.page_height);

    let result = TemplateRenderer::default().render_interior(&geometry, 1, ColorMode::Color);
    assert!(matches!(
        result,
        Err(ExportError::Layout(LayoutError::InvalidGeometry(_)))
    ));
}

#[test]
fn test_cover_template_single_sheet() {
    let geometry = cover_geometry(TrimSize::In6x9, 200, PaperType::Cream, true).unwrap();
    let doc = TemplateRenderer::default()
        .render_cover(&geometry, ColorMode::Color)
        .unwrap();

    assert_eq!(doc.get_pages().len(), 1);
    let media = page_box(&doc, 1, b"MediaBox");
    assert!((media[2] - 918.0).abs() < 0.01);
    assert_eq!(media[3], 666.0);

    let trim = page_box(&doc, 1, b"TrimBox");
    assert_eq!(trim[0], 9.0);
    assert!((trim[2] - 909.0).abs() < 0.01);

    let content = page_content(&doc, 1);
    assert!(content.contains("0.850 0.000 0.850 RG"));
}

#[test]
fn test_bw_template_uses_gray_guides() {
    let geometry = interior_geometry(TrimSize::In8x10, true);
    let doc = TemplateRenderer::default()
        .render_interior(&geometry, 1, ColorMode::Bw)
        .unwrap();

    let content = page_content(&doc, 1);
    assert!(!content.contains("1.000 0.000 0.000 RG"));
    assert!(content.contains("0.299 0.299 0.299 RG"));
}

#[test]
fn test_template_without_guides_is_blank() {
    let renderer = TemplateRenderer::new(TemplateOptions {
        guides: false,
        ..Default::default()
    });
    let geometry = interior_geometry(TrimSize::In5x8, false);
    let doc = renderer
        .render_interior(&geometry, 2, ColorMode::Color)
        .unwrap();
    assert!(page_content(&doc, 2).is_empty());
}

#[tokio::test]
async fn test_save_and_load_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cover.pdf");

    let geometry = cover_geometry(TrimSize::In8_5x8_5, 32, PaperType::White, true).unwrap();
    let doc = TemplateRenderer::default()
        .render_cover(&geometry, ColorMode::Color)
        .unwrap();
    save_pdf(doc, &path).await.unwrap();

    let loaded = load_pdf(&path).await.unwrap();
    assert_eq!(loaded.get_pages().len(), 1);
    let media = page_box(&loaded, 1, b"MediaBox");
    // 17.322064in = 1247.188608pt
    assert!((media[2] - 1247.1886).abs() < 0.01);
    assert_eq!(media[3], 630.0);
}
