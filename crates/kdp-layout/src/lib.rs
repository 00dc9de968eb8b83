//! KDP print layout: trim catalog, cover/interior geometry and proof templates.

pub mod book_type;
pub mod catalog;
pub mod constants;
pub mod job;
pub mod layout;
mod options;
pub mod render;
mod types;

pub use book_type::{BookType, RecommendedSettings, recommended_settings};
pub use catalog::{PrintSpec, TrimDimensions, TrimSize, resolve_trim};
pub use constants::inches_to_points;
pub use job::{ExportJob, ExportKind, ExportStatus, JobId, output_filename};
pub use layout::{
    CoverDimensions, CoverGeometry, InteriorGeometry, PageDimensions, Rect,
    calculate_cover_dimensions, calculate_page_dimensions, calculate_spine_width, cover_geometry,
    interior_geometry, spine_below_minimum_gutter,
};
pub use options::*;
pub use render::{Renderer, TemplateOptions, TemplateRenderer, load_pdf, save_pdf};
pub use types::*;
