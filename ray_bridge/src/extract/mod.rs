//! Geometry extraction module.
//!
//! Walks the evaluated host scene, keeps visible mesh objects, triangulates
//! their faces and emits world-space triangles for the render engine.

mod extractor;
mod triangulate;

pub use extractor::{
    extract_object, extract_triangles, is_renderable, ExtractOptions, Extraction, TransformMode,
    Triangle,
};
pub use triangulate::{fan, triangulate_polygon};
