//! Proof-template renderer
//!
//! Produces blank print templates with the page boxes set and guides drawn.
//! Artwork and text are painted by other `Renderer` implementations.

use crate::catalog::PrintSpec;
use crate::layout::{CoverGeometry, InteriorGeometry, Rect};
use crate::types::{ColorMode, LayoutError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::guides::{GuideColors, cover_guides, interior_guides};
use super::Renderer;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateOptions {
    /// Draw trim, safe and spine guides
    pub guides: bool,
    pub colors: GuideColors,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            guides: true,
            colors: GuideColors::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TemplateRenderer {
    pub options: TemplateOptions,
}

impl TemplateRenderer {
    pub fn new(options: TemplateOptions) -> Self {
        Self { options }
    }

    fn colors_for(&self, color_mode: ColorMode) -> GuideColors {
        match color_mode {
            ColorMode::Color => self.options.colors,
            ColorMode::Bw => self.options.colors.to_gray(),
        }
    }
}

impl Renderer for TemplateRenderer {
    fn render_interior(
        &self,
        geometry: &InteriorGeometry,
        page_count: u32,
        color_mode: ColorMode,
    ) -> Result<Document> {
        if page_count == 0 {
            return Err(LayoutError::InvalidPageCount(0).into());
        }
        let max = PrintSpec::KDP.max_page_count;
        if page_count > max {
            return Err(LayoutError::TooManyPages {
                count: page_count,
                max,
            }
            .into());
        }

        let content = if self.options.guides {
            interior_guides(geometry, &self.colors_for(color_mode))
        } else {
            String::new()
        };

        let boxes = PageBoxes {
            media: geometry.media(),
            trim: geometry.trim,
        };
        let doc = build_document(&boxes, &content, page_count as usize)?;
        log::debug!(
            "rendered {} interior template page(s) at {:.2}x{:.2}pt",
            page_count,
            geometry.page_width,
            geometry.page_height
        );
        Ok(doc)
    }

    fn render_cover(&self, geometry: &CoverGeometry, color_mode: ColorMode) -> Result<Document> {
        let content = if self.options.guides {
            cover_guides(geometry, &self.colors_for(color_mode))
        } else {
            String::new()
        };

        let boxes = PageBoxes {
            media: geometry.media(),
            trim: geometry.trim,
        };
        let doc = build_document(&boxes, &content, 1)?;
        log::debug!(
            "rendered cover template at {:.2}x{:.2}pt (spine {:.2}pt)",
            geometry.sheet_width,
            geometry.sheet_height,
            geometry.spine_width
        );
        Ok(doc)
    }
}

/// Sheet and trim boxes for every page of a template. BleedBox equals the
/// MediaBox since the sheet is exactly trim + bleed.
struct PageBoxes {
    media: Rect,
    trim: Rect,
}

fn build_document(boxes: &PageBoxes, content: &str, page_count: usize) -> Result<Document> {
    if !boxes.media.contains(&boxes.trim) {
        return Err(LayoutError::InvalidGeometry(format!(
            "trim box {:?} extends past the sheet {:?}",
            boxes.trim.to_box(),
            boxes.media.to_box()
        ))
        .into());
    }

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::with_capacity(page_count);
    for _ in 0..page_count {
        let page_id = add_page(&mut doc, pages_id, boxes, content);
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(page_count as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}

fn add_page(doc: &mut Document, parent: ObjectId, boxes: &PageBoxes, content: &str) -> ObjectId {
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.as_bytes().to_vec()));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent));
    page_dict.set("MediaBox", box_array(&boxes.media));
    page_dict.set("BleedBox", box_array(&boxes.media));
    page_dict.set("TrimBox", box_array(&boxes.trim));
    page_dict.set("Resources", Object::Dictionary(Dictionary::new()));
    page_dict.set("Contents", Object::Reference(content_id));

    doc.add_object(page_dict)
}

// PDF reals are single precision in lopdf
fn box_array(rect: &Rect) -> Object {
    Object::Array(
        rect.to_box()
            .iter()
            .map(|&v| Object::Real(v as f32))
            .collect(),
    )
}
