/// Polygon triangulation
///
/// Convex loops are fanned from their first vertex. Concave loops are
/// ear-clipped in the plane of their Newell normal. Output triangles keep
/// the loop's winding and reference positions by loop-local index.
///
/// Tolerances apply after the loop is rescaled to its bounding box, so a
/// face triangulates the same way at any scene scale.

use glam::{DVec2, DVec3};

const EPSILON: f64 = 1e-12;

/// Triangulate one polygon loop.
///
/// Returns loop-local index triples. Loops with fewer than three points
/// produce nothing, and zero-area triangles are never emitted.
pub fn triangulate_polygon(points: &[DVec3]) -> Vec<[usize; 3]> {
    if points.len() < 3 {
        return Vec::new();
    }
    let Some(local) = normalize_extent(points) else {
        return Vec::new();
    };
    let normal = newell_normal(&local);
    if normal.length_squared() < EPSILON {
        // Collinear loop: encloses no area
        return Vec::new();
    }
    let projected = project_to_plane(&local, normal);
    let triangles = if is_convex(&projected) {
        fan(points.len())
    } else {
        ear_clip(&projected)
    };
    triangles
        .into_iter()
        .filter(|&[a, b, c]| cross(projected[a], projected[b], projected[c]).abs() > EPSILON)
        .collect()
}

/// Fan triangulation `[0, i, i + 1]`
pub fn fan(count: usize) -> Vec<[usize; 3]> {
    (1..count.saturating_sub(1)).map(|i| [0, i, i + 1]).collect()
}

/// Translate and scale points into the unit box
///
/// Returns `None` when all points coincide or a coordinate is not finite.
fn normalize_extent(points: &[DVec3]) -> Option<Vec<DVec3>> {
    let min = points.iter().copied().fold(DVec3::INFINITY, DVec3::min);
    let max = points.iter().copied().fold(DVec3::NEG_INFINITY, DVec3::max);
    let extent = (max - min).max_element();
    if !extent.is_finite() || extent <= 0.0 {
        return None;
    }
    Some(points.iter().map(|p| (*p - min) / extent).collect())
}

/// Newell's method: area-weighted normal of an arbitrary planar-ish loop
fn newell_normal(points: &[DVec3]) -> DVec3 {
    let mut normal = DVec3::ZERO;
    for (i, current) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }
    normal
}

/// Project points onto a 2D basis of the plane, counter-clockwise around `normal`
fn project_to_plane(points: &[DVec3], normal: DVec3) -> Vec<DVec2> {
    let n = normal.normalize();
    let (u, _) = n.any_orthonormal_pair();
    let v = n.cross(u);
    points.iter().map(|p| DVec2::new(p.dot(u), p.dot(v))).collect()
}

fn cross(o: DVec2, a: DVec2, b: DVec2) -> f64 {
    (a - o).perp_dot(b - o)
}

fn is_convex(points: &[DVec2]) -> bool {
    let n = points.len();
    (0..n).all(|i| cross(points[(i + n - 1) % n], points[i], points[(i + 1) % n]) >= -EPSILON)
}

/// Inside or on the boundary of the counter-clockwise triangle `abc`
fn point_in_triangle(p: DVec2, a: DVec2, b: DVec2, c: DVec2) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);
    d1 >= -EPSILON && d2 >= -EPSILON && d3 >= -EPSILON
}

/// Ear clipping for a counter-clockwise simple polygon
fn ear_clip(points: &[DVec2]) -> Vec<[usize; 3]> {
    let mut remaining: Vec<usize> = (0..points.len()).collect();
    let mut triangles = Vec::with_capacity(points.len() - 2);

    while remaining.len() > 3 {
        let count = remaining.len();
        let ear = (0..count).find(|&i| {
            let prev = remaining[(i + count - 1) % count];
            let curr = remaining[i];
            let next = remaining[(i + 1) % count];
            let (a, b, c) = (points[prev], points[curr], points[next]);
            if cross(a, b, c) <= EPSILON {
                return false;
            }
            !remaining
                .iter()
                .filter(|&&k| k != prev && k != curr && k != next)
                .any(|&k| point_in_triangle(points[k], a, b, c))
        });

        match ear {
            Some(i) => {
                let prev = remaining[(i + count - 1) % count];
                let next = remaining[(i + 1) % count];
                triangles.push([prev, remaining[i], next]);
                remaining.remove(i);
            }
            None => {
                // Self-intersecting input: fan what is left
                triangles.extend(
                    fan(remaining.len())
                        .into_iter()
                        .map(|[a, b, c]| [remaining[a], remaining[b], remaining[c]]),
                );
                return triangles;
            }
        }
    }

    triangles.push([remaining[0], remaining[1], remaining[2]]);
    triangles
}

#[cfg(test)]
#[path = "triangulate_tests.rs"]
mod tests;
