//! Vertical Snap Resolver
//!
//! Gravity-free height correction, run every frame regardless of input:
//! clamp the collider onto the floor below, under the ceiling above, then
//! apply a last-resort upward nudge if the collider still overlaps
//! geometry. Corrections are only committed when they provably do not
//! create a new collision; otherwise the position is left for the next
//! frame to re-evaluate. Best effort, no iterative solver.

use glam::Vec3;

use crate::config::NavConfig;
use crate::nav::oracle::{cast_ceiling, cast_floor, collides_vertical};
use crate::world::SurfaceSet;

/// Run the per-frame vertical correction on the eye position.
pub fn resolve_vertical<S: SurfaceSet + ?Sized>(set: &S, config: &NavConfig, eye: &mut Vec3) {
    // Floor: if the collider bottom is at or below the floor hit, seat the
    // collider bottom exactly on the floor
    if let Some(floor) = cast_floor(set, config, *eye) {
        let floor_y = floor.point.y;
        let collider_bottom = eye.y + config.collider_bottom_offset;
        if collider_bottom <= floor_y {
            let required_eye_y = floor_y - config.collider_bottom_offset;
            let candidate = Vec3::new(eye.x, required_eye_y, eye.z);
            if !collides_vertical(set, config, candidate) {
                eye.y = required_eye_y;
            }
        }
    }

    // Ceiling: if the collider top is at or above the ceiling hit, drop the
    // eye so the collider top sits at the ceiling
    if let Some(ceiling) = cast_ceiling(set, config, *eye) {
        let ceiling_y = ceiling.point.y;
        let collider_top = eye.y + config.collider_top_offset();
        if collider_top >= ceiling_y {
            let required_eye_y = ceiling_y - config.collider_top_offset();
            let candidate = Vec3::new(eye.x, required_eye_y, eye.z);
            if !collides_vertical(set, config, candidate) {
                eye.y = required_eye_y;
            }
        }
    }

    // Safety fallback: still overlapping after the snaps - try one upward
    // nudge and keep it only if it actually resolves the overlap. Upward
    // only; overlaps entered from above can stay stuck (known gap)
    if collides_vertical(set, config, *eye) {
        let nudged = Vec3::new(eye.x, eye.y + config.unstick_step, eye.z);
        if !collides_vertical(set, config, nudged) {
            eye.y = nudged.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{GeometryRegistry, TriangleMesh};

    fn registry_with(meshes: Vec<TriangleMesh>) -> GeometryRegistry {
        let mut registry = GeometryRegistry::new();
        registry.populate(meshes, &[]);
        registry
    }

    fn floor_slab() -> TriangleMesh {
        TriangleMesh::cuboid("Floor", Vec3::new(-5.0, -0.2, -5.0), Vec3::new(5.0, 0.0, 5.0))
    }

    #[test]
    fn test_noop_on_empty_registry() {
        let registry = GeometryRegistry::new();
        let config = NavConfig::default();
        let mut eye = Vec3::new(0.0, 0.3, 0.0);
        resolve_vertical(&registry, &config, &mut eye);
        assert_eq!(eye, Vec3::new(0.0, 0.3, 0.0));
    }

    #[test]
    fn test_seated_position_unchanged() {
        // Collider bottom exactly on the floor: floor ray hits at y=0,
        // required eye height equals the current one
        let registry = registry_with(vec![floor_slab()]);
        let config = NavConfig::default();
        let mut eye = Vec3::new(0.0, 0.3, 0.0);
        resolve_vertical(&registry, &config, &mut eye);
        assert!((eye.y - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_snap_idempotent() {
        let registry = registry_with(vec![floor_slab()]);
        let config = NavConfig::default();
        let mut eye = Vec3::new(1.0, 0.25, -2.0);

        resolve_vertical(&registry, &config, &mut eye);
        let after_first = eye;
        resolve_vertical(&registry, &config, &mut eye);
        assert_eq!(eye, after_first);
    }

    #[test]
    fn test_sunk_eye_lifted_to_floor() {
        let registry = registry_with(vec![floor_slab()]);
        let config = NavConfig::default();
        let mut eye = Vec3::new(0.0, 0.1, 0.0); // collider bottom at -0.2
        resolve_vertical(&registry, &config, &mut eye);
        assert!((eye.y - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_ceiling_pushes_eye_down() {
        // Ceiling slab at y in [0.5, 0.7]; eye at 0.3 has collider top 0.6
        let registry = registry_with(vec![TriangleMesh::cuboid(
            "Ceiling",
            Vec3::new(-5.0, 0.5, -5.0),
            Vec3::new(5.0, 0.7, 5.0),
        )]);
        let config = NavConfig::default();
        let mut eye = Vec3::new(0.0, 0.3, 0.0);
        resolve_vertical(&registry, &config, &mut eye);
        // Collider top must end at the ceiling underside: eye = 0.5 - 0.3
        assert!((eye.y - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_floor_beyond_ray_range_ignored() {
        // Floor 20 below the eye, ray range is 10: no snap down or up
        let registry = registry_with(vec![TriangleMesh::cuboid(
            "DeepFloor",
            Vec3::new(-5.0, -20.2, -5.0),
            Vec3::new(5.0, -20.0, 5.0),
        )]);
        let config = NavConfig::default();
        let mut eye = Vec3::new(0.0, 0.3, 0.0);
        resolve_vertical(&registry, &config, &mut eye);
        assert_eq!(eye, Vec3::new(0.0, 0.3, 0.0));
    }

    #[test]
    fn test_unstick_nudges_up_when_it_resolves() {
        // Thin obstacle overlapping only the very bottom of the collider,
        // with open space above; no floor below the eye so the floor snap
        // does not fire, leaving the fallback to resolve the overlap
        let registry = registry_with(vec![TriangleMesh::cuboid(
            "Ledge",
            Vec3::new(-0.2, 0.0, -0.2),
            Vec3::new(0.2, 0.05, 0.2),
        )]);
        let config = NavConfig::default();
        // Collider spans y in [0, 0.6] at eye 0.3: overlaps the ledge top half
        let mut eye = Vec3::new(0.0, 0.31, 0.0);

        // Floor snap would seat the bottom on top of the ledge (y=0.05);
        // that also resolves - accept either correction as long as the
        // final position is overlap-free and not lower than before
        resolve_vertical(&registry, &config, &mut eye);
        assert!(!crate::nav::oracle::collides_vertical(&registry, &config, eye));
        assert!(eye.y > 0.31);
    }

    #[test]
    fn test_unstick_rejected_when_insufficient() {
        // Eye buried inside a tall block: one nudge cannot resolve, so the
        // position must stay unchanged rather than creep
        let registry = registry_with(vec![TriangleMesh::cuboid(
            "Block",
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, 3.0, 1.0),
        )]);
        let config = NavConfig::default();
        let start = Vec3::new(0.0, 1.0, 0.0);
        let mut eye = start;
        resolve_vertical(&registry, &config, &mut eye);
        assert_eq!(eye, start);
    }
}
