/// Geometry extraction - host scene to a flat world-space triangle list.

use glam::{DMat4, DVec3};
use crate::error::{Error, Result};
use crate::host::{EvaluatedMesh, HostScene, ObjectKind, SceneObject, Visibility};
use super::triangulate::triangulate_polygon;

/// One world-space triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle(pub [DVec3; 3]);

impl Triangle {
    /// Create a triangle from three points
    pub fn new(a: DVec3, b: DVec3, c: DVec3) -> Self {
        Self([a, b, c])
    }

    /// The three vertices in order
    pub fn vertices(&self) -> &[DVec3; 3] {
        &self.0
    }

    /// Unnormalized face normal following the vertex winding
    pub fn normal(&self) -> DVec3 {
        let [a, b, c] = self.0;
        (b - a).cross(c - a)
    }
}

/// How object-local vertices are moved into world space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformMode {
    /// Full affine object-to-world matrix (translation, rotation, scale)
    #[default]
    Full,
    /// Translation only, ignoring rotation and scale
    TranslationOnly,
}

impl TransformMode {
    fn apply(self, world: &DMat4, point: DVec3) -> DVec3 {
        match self {
            TransformMode::Full => world.transform_point3(point),
            TransformMode::TranslationOnly => point + world.w_axis.truncate(),
        }
    }
}

/// Options for a single extraction pass
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Local-to-world transform mode
    pub transform_mode: TransformMode,
}

/// Extraction output: triangles plus per-object warnings
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// World-space triangles in scene, face, then triangle order
    pub triangles: Vec<Triangle>,
    /// `Error::GeometryExtraction` values for skipped objects
    pub warnings: Vec<Error>,
}

impl Extraction {
    /// Number of extracted triangles
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Whether no triangle was extracted
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Whether an object contributes geometry to renders
pub fn is_renderable(object: &dyn SceneObject) -> bool {
    object.kind() == ObjectKind::Mesh && !object.visibility().contains(Visibility::HIDE_RENDER)
}

/// Extract all renderable triangles of the scene.
///
/// Hidden and non-mesh objects are skipped silently. Mesh objects that fail
/// to evaluate or reference missing vertices are skipped with a warning.
pub fn extract_triangles(scene: &dyn HostScene, options: &ExtractOptions) -> Extraction {
    let mut extraction = Extraction::default();

    for object in scene.objects().filter(|o| is_renderable(*o)) {
        match extract_object(object, options) {
            Ok(mut triangles) => extraction.triangles.append(&mut triangles),
            Err(err) => {
                crate::bridge_warn!("raybridge::extract", "Skipping object: {}", err);
                extraction.warnings.push(err);
            }
        }
    }

    crate::bridge_info!(
        "raybridge::extract",
        "Extracted {} triangles ({} objects skipped)",
        extraction.triangles.len(),
        extraction.warnings.len()
    );
    extraction
}

/// Extract the triangles of a single mesh object
pub fn extract_object(object: &dyn SceneObject, options: &ExtractOptions) -> Result<Vec<Triangle>> {
    let mesh = object.evaluated_mesh().map_err(|err| match err {
        Error::GeometryExtraction { .. } => err,
        other => Error::GeometryExtraction {
            object: object.name().to_string(),
            reason: other.to_string(),
        },
    })?;
    let world = object.world_matrix();
    let to_world = |p: DVec3| options.transform_mode.apply(&world, p);

    let local = local_triangles(&mesh).map_err(|reason| Error::GeometryExtraction {
        object: object.name().to_string(),
        reason,
    })?;

    Ok(local
        .into_iter()
        .map(|[a, b, c]| Triangle::new(to_world(a), to_world(b), to_world(c)))
        .collect())
}

/// Object-local triangles, from host loop triangles or by triangulating polygons
fn local_triangles(mesh: &EvaluatedMesh) -> std::result::Result<Vec<[DVec3; 3]>, String> {
    let vertex = |index: u32| {
        mesh.vertices.get(index as usize).copied().ok_or_else(|| {
            format!("vertex index {} out of range ({} vertices)", index, mesh.vertices.len())
        })
    };

    if let Some(loop_triangles) = &mesh.loop_triangles {
        return loop_triangles
            .iter()
            .map(|[a, b, c]| Ok([vertex(*a)?, vertex(*b)?, vertex(*c)?]))
            .collect();
    }

    let mut triangles = Vec::new();
    for polygon in &mesh.polygons {
        let points = polygon
            .iter()
            .map(|index| vertex(*index))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        triangles.extend(
            triangulate_polygon(&points)
                .into_iter()
                .map(|[a, b, c]| [points[a], points[b], points[c]]),
        );
    }
    Ok(triangles)
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
