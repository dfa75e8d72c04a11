//! Geometry Registry
//!
//! Owns the finalized collidable surface set. Empty until the asynchronous
//! environment load hands it the meshes; every collision query issued
//! before that is answered fail-open (no collision) so the player is never
//! stuck waiting on assets. Once populated, the contents are immutable for
//! the rest of the session.

use glam::Vec3;
use log::{info, warn};

use crate::physics::{Aabb, RayHit, ray_aabb_intersect, ray_triangle_intersect, triangle_normal};
use crate::world::TriangleMesh;

/// Query capabilities the collision oracle needs from an environment.
///
/// Implemented by [`GeometryRegistry`]; tests or alternative hosts can
/// substitute their own surface storage without touching the resolvers.
pub trait SurfaceSet {
    /// Whether the environment has finished loading. `false` means every
    /// query must be answered fail-open.
    fn is_ready(&self) -> bool;

    /// Precomputed bounding box per collidable surface.
    fn surface_boxes(&self) -> &[Aabb];

    /// Nearest exact (triangle-level) intersection within `max_distance`
    /// along a ray, or `None`.
    fn cast_ray(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<RayHit>;
}

/// Storage for the static collidable environment.
///
/// Brute force by design: queries walk every surface. The walkthrough
/// scenes this targets are small enough that an acceleration structure
/// would not pay for itself.
#[derive(Debug, Default)]
pub struct GeometryRegistry {
    surfaces: Vec<TriangleMesh>,
    boxes: Vec<Aabb>,
    ready: bool,
}

impl GeometryRegistry {
    /// Create an empty, not-yet-ready registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest the environment once load completes.
    ///
    /// Meshes named in `excluded_names` are dropped (visual-only geometry
    /// such as transparent panes); each remaining mesh gets its bounding
    /// box cached here. Degenerate meshes without any vertices are skipped
    /// with a warning. A second call replaces the contents wholesale - not
    /// expected in normal use, where geometry is static for the session.
    pub fn populate(&mut self, meshes: Vec<TriangleMesh>, excluded_names: &[&str]) {
        self.surfaces.clear();
        self.boxes.clear();

        let offered = meshes.len();
        for mesh in meshes {
            if excluded_names.contains(&mesh.name.as_str()) {
                continue;
            }
            let Some(bounds) = mesh.bounds() else {
                warn!("skipping degenerate mesh {:?} (no vertices)", mesh.name);
                continue;
            };
            self.surfaces.push(mesh);
            self.boxes.push(bounds);
        }
        self.ready = true;

        info!(
            "collision geometry ready: {} of {} surfaces collidable",
            self.surfaces.len(),
            offered
        );
    }

    /// Number of collidable surfaces currently held.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Read-only access to the collidable meshes.
    pub fn surfaces(&self) -> &[TriangleMesh] {
        &self.surfaces
    }
}

impl SurfaceSet for GeometryRegistry {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn surface_boxes(&self) -> &[Aabb] {
        &self.boxes
    }

    fn cast_ray(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<RayHit> {
        let mut best: Option<RayHit> = None;

        for (mesh, bounds) in self.surfaces.iter().zip(&self.boxes) {
            // Coarse cull on the cached box; a box entry beyond range can
            // only be skipped when the origin is outside the box
            let near = match ray_aabb_intersect(origin, dir, bounds.min, bounds.max) {
                Some(t) => t,
                None => continue,
            };
            if near > max_distance && !bounds.contains(origin) {
                continue;
            }

            for (a, b, c) in mesh.triangles() {
                if let Some(t) = ray_triangle_intersect(origin, dir, a, b, c) {
                    if t <= max_distance && best.map_or(true, |hit| t < hit.distance) {
                        best = Some(RayHit {
                            distance: t,
                            point: origin + dir * t,
                            normal: triangle_normal(a, b, c),
                        });
                    }
                }
            }
        }

        best
    }
}
