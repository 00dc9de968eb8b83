//! Rendering seam
//!
//! Geometry crosses into rendering as structured point-space values. The
//! bundled [`TemplateRenderer`] emits proof templates; renderers that paint
//! artwork and text implement [`Renderer`] the same way.

mod guides;
mod io;
mod template;

pub use guides::{GuideColors, Rgb, cover_guides, interior_guides};
pub use io::{load_pdf, save_pdf};
pub use template::{TemplateOptions, TemplateRenderer};

use crate::layout::{CoverGeometry, InteriorGeometry};
use crate::types::{ColorMode, Result};
use lopdf::Document;

pub trait Renderer {
    /// Render `page_count` interior pages sized and boxed per `geometry`
    fn render_interior(
        &self,
        geometry: &InteriorGeometry,
        page_count: u32,
        color_mode: ColorMode,
    ) -> Result<Document>;

    /// Render a single-sheet wrap-around cover
    fn render_cover(&self, geometry: &CoverGeometry, color_mode: ColorMode) -> Result<Document>;
}
