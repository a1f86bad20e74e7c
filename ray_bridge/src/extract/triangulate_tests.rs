use glam::DVec3;
use super::*;

fn area(points: &[DVec3], tri: [usize; 3]) -> f64 {
    let [a, b, c] = tri;
    (points[b] - points[a]).cross(points[c] - points[a]).length() * 0.5
}

fn total_area(points: &[DVec3], tris: &[[usize; 3]]) -> f64 {
    tris.iter().map(|t| area(points, *t)).sum()
}

fn normal(points: &[DVec3], tri: [usize; 3]) -> DVec3 {
    let [a, b, c] = tri;
    (points[b] - points[a]).cross(points[c] - points[a])
}

// ============================================================================
// Small loops
// ============================================================================

#[test]
fn test_fewer_than_three_points() {
    assert!(triangulate_polygon(&[]).is_empty());
    assert!(triangulate_polygon(&[DVec3::ZERO, DVec3::X]).is_empty());
}

#[test]
fn test_triangle_passthrough() {
    let tris = triangulate_polygon(&[DVec3::ZERO, DVec3::X, DVec3::Y]);
    assert_eq!(tris, vec![[0, 1, 2]]);
}

#[test]
fn test_fan_indices() {
    assert_eq!(fan(5), vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
    assert!(fan(2).is_empty());
}

// ============================================================================
// Convex
// ============================================================================

#[test]
fn test_quad_is_fanned() {
    let quad = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
    ];
    let tris = triangulate_polygon(&quad);
    assert_eq!(tris, vec![[0, 1, 2], [0, 2, 3]]);
    assert!((total_area(&quad, &tris) - 1.0).abs() < 1e-12);
}

#[test]
fn test_clockwise_quad_in_tilted_plane() {
    // Clockwise when seen from +Z, lying in the plane x = z
    let quad = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(1.0, 0.0, 1.0),
    ];
    let tris = triangulate_polygon(&quad);
    assert_eq!(tris.len(), 2);
    assert!((total_area(&quad, &tris) - 2f64.sqrt()).abs() < 1e-9);
}

// ============================================================================
// Concave
// ============================================================================

#[test]
fn test_concave_l_shape() {
    // L-shape, counter-clockwise, area 3
    let l_shape = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(2.0, 0.0, 0.0),
        DVec3::new(2.0, 1.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(1.0, 2.0, 0.0),
        DVec3::new(0.0, 2.0, 0.0),
    ];
    let tris = triangulate_polygon(&l_shape);
    assert_eq!(tris.len(), 4);
    assert!((total_area(&l_shape, &tris) - 3.0).abs() < 1e-9);
    // Every triangle keeps the loop's (+Z) winding
    for tri in &tris {
        assert!(normal(&l_shape, *tri).z > 0.0);
    }
}

#[test]
fn test_concave_arrow_clockwise() {
    // Arrow head with a notch, clockwise seen from +Z, area 1.5
    let arrow = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.5, 0.0),
        DVec3::new(2.0, 0.0, 0.0),
        DVec3::new(1.0, 2.0, 0.0),
    ];
    let reversed: Vec<DVec3> = arrow.iter().rev().copied().collect();
    let tris = triangulate_polygon(&reversed);
    assert_eq!(tris.len(), 2);
    assert!((total_area(&reversed, &tris) - 1.5).abs() < 1e-9);
    for tri in &tris {
        assert!(normal(&reversed, *tri).z < 0.0);
    }
}

fn scaled_l_shape(scale: f64) -> Vec<DVec3> {
    [(2.0, 1.0), (1.0, 1.0), (1.0, 2.0), (0.0, 2.0), (0.0, 0.0), (2.0, 0.0)]
        .iter()
        .map(|&(x, y)| DVec3::new(x, y, 0.0) * scale)
        .collect()
}

#[test]
fn test_concave_l_shape_at_any_scale() {
    for scale in [1e3, 1.0, 1e-3, 1e-4, 1e-6] {
        let l_shape = scaled_l_shape(scale);
        let tris = triangulate_polygon(&l_shape);
        assert_eq!(tris, vec![[5, 0, 1], [1, 2, 3], [1, 3, 4], [1, 4, 5]], "scale {}", scale);
        let ratio = total_area(&l_shape, &tris) / (3.0 * scale * scale);
        assert!((ratio - 1.0).abs() < 1e-9, "scale {}: area ratio {}", scale, ratio);
    }
}

#[test]
fn test_concave_loop_skips_zero_area_triangles() {
    // Dart with its reflex vertex on the diagonal from the first vertex, area 3
    let dart = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(2.0, 0.0, 0.0),
        DVec3::new(2.0, 2.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(0.0, 2.0, 0.0),
    ];
    let tris = triangulate_polygon(&dart);
    assert!(tris.iter().all(|tri| area(&dart, *tri) > 1e-9), "{:?}", tris);
    assert!((total_area(&dart, &tris) - 3.0).abs() < 1e-9);
}

#[test]
fn test_convex_loop_with_collinear_vertex() {
    // Square with an extra vertex in the middle of its first edge
    let square = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(2.0, 0.0, 0.0),
        DVec3::new(2.0, 2.0, 0.0),
        DVec3::new(0.0, 2.0, 0.0),
    ];
    let tris = triangulate_polygon(&square);
    assert_eq!(tris, vec![[0, 2, 3], [0, 3, 4]]);
    assert!((total_area(&square, &tris) - 4.0).abs() < 1e-12);
}

#[test]
fn test_collinear_loop_yields_nothing() {
    let line = [DVec3::ZERO, DVec3::X, DVec3::X * 2.0, DVec3::X * 3.0];
    assert!(triangulate_polygon(&line).is_empty());
    assert!(triangulate_polygon(&[DVec3::ZERO, DVec3::X, DVec3::X * 2.0]).is_empty());
}

#[test]
fn test_coincident_points_yield_nothing() {
    assert!(triangulate_polygon(&[DVec3::ONE; 4]).is_empty());
}
