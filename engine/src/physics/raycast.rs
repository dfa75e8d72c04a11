//! Ray Intersection Primitives
//!
//! Ray/AABB intersection (slab method) for coarse per-mesh culling and
//! ray/triangle intersection (Moller-Trumbore) for the exact tests behind
//! wall probes and floor/ceiling detection.
//!
//! Triangle tests are double-sided: imported scenes have no reliable
//! winding order, and the wall classifier only looks at |normal.y|, so
//! facing does not matter.

use glam::Vec3;

/// Tolerance below which a ray is considered parallel to a triangle.
const TRIANGLE_EPSILON: f32 = 1e-7;

/// Result of a directional ray query.
///
/// Produced transiently per query; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from ray origin to the hit point
    pub distance: f32,
    /// World-space hit point
    pub point: Vec3,
    /// Surface normal at the hit, if the geometry could provide one
    /// (degenerate triangles cannot)
    pub normal: Option<Vec3>,
}

/// Ray-AABB intersection using the slab method.
///
/// Returns the distance to the nearest intersection at or in front of the
/// origin, or the exit distance when the origin is inside the box.
/// `None` when the ray misses or the box lies entirely behind the origin.
pub fn ray_aabb_intersect(origin: Vec3, dir: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Option<f32> {
    // Near-zero direction components get a huge signed inverse so the
    // corresponding slab degenerates to an inside/outside interval test
    let inv_dir = Vec3::new(
        if dir.x.abs() > 1e-10 { 1.0 / dir.x } else { f32::MAX * dir.x.signum() },
        if dir.y.abs() > 1e-10 { 1.0 / dir.y } else { f32::MAX * dir.y.signum() },
        if dir.z.abs() > 1e-10 { 1.0 / dir.z } else { f32::MAX * dir.z.signum() },
    );

    let t1 = (aabb_min.x - origin.x) * inv_dir.x;
    let t2 = (aabb_max.x - origin.x) * inv_dir.x;
    let mut t_min = t1.min(t2);
    let mut t_max = t1.max(t2);

    let t3 = (aabb_min.y - origin.y) * inv_dir.y;
    let t4 = (aabb_max.y - origin.y) * inv_dir.y;
    t_min = t_min.max(t3.min(t4));
    t_max = t_max.min(t3.max(t4));

    let t5 = (aabb_min.z - origin.z) * inv_dir.z;
    let t6 = (aabb_max.z - origin.z) * inv_dir.z;
    t_min = t_min.max(t5.min(t6));
    t_max = t_max.min(t5.max(t6));

    if t_max >= t_min && t_max >= 0.0 {
        if t_min >= 0.0 { Some(t_min) } else { Some(t_max) }
    } else {
        None
    }
}

/// Ray-triangle intersection (Moller-Trumbore, double-sided).
///
/// Returns the distance `t` along the ray to the intersection point, or
/// `None` if the ray misses, is parallel to the triangle plane, or the
/// intersection lies behind the origin.
pub fn ray_triangle_intersect(origin: Vec3, dir: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    let edge1 = b - a;
    let edge2 = c - a;

    let pvec = dir.cross(edge2);
    let det = edge1.dot(pvec);
    // abs(): hits from either side count
    if det.abs() < TRIANGLE_EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    let tvec = origin - a;
    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(edge1);
    let v = dir.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(qvec) * inv_det;
    if t > TRIANGLE_EPSILON { Some(t) } else { None }
}

/// Unit normal of a triangle, or `None` when the triangle is degenerate.
///
/// Orientation follows the vertex winding; callers that only care about
/// surface tilt take `normal.y.abs()`.
pub fn triangle_normal(a: Vec3, b: Vec3, c: Vec3) -> Option<Vec3> {
    let cross = (b - a).cross(c - a);
    if cross.length_squared() < TRIANGLE_EPSILON {
        None
    } else {
        Some(cross.normalize())
    }
}
