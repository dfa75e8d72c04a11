//! Movement Resolver
//!
//! Converts held-key input and camera orientation into a horizontal
//! displacement, then resolves it against the collision oracle with axis
//! sliding: a blocked diagonal move degrades to an X-only or Z-only move
//! instead of stopping dead, which is what makes walking along a wall feel
//! like sliding rather than sticking.

use glam::Vec3;

use crate::camera::LookController;
use crate::config::NavConfig;
use crate::input::MovementKeys;
use crate::nav::oracle::collides_horizontal;
use crate::world::SurfaceSet;

/// How a frame's horizontal movement was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveResolution {
    /// No movement requested (no keys held, or pointer not locked)
    #[default]
    Idle,
    /// Full candidate accepted (both axes)
    Full,
    /// Diagonal blocked; X-only move accepted
    SlideX,
    /// Diagonal and X-only blocked; Z-only move accepted
    SlideZ,
    /// All three candidates blocked; position unchanged
    Blocked,
}

impl MoveResolution {
    /// Whether the eye position changed this frame.
    pub fn moved(self) -> bool {
        matches!(
            self,
            MoveResolution::Full | MoveResolution::SlideX | MoveResolution::SlideZ
        )
    }
}

/// Attempt a horizontal move to `candidate`, sliding on block.
///
/// Tie-break order is deliberate: full candidate first (diagonal wins),
/// then X-only, then Z-only. The first candidate the oracle clears is
/// committed immediately; if all three are blocked the eye stays put.
pub fn try_slide<S: SurfaceSet + ?Sized>(
    set: &S,
    config: &NavConfig,
    eye: &mut Vec3,
    candidate: Vec3,
) -> MoveResolution {
    if !collides_horizontal(set, config, candidate) {
        *eye = candidate;
        return MoveResolution::Full;
    }

    let x_only = Vec3::new(candidate.x, eye.y, eye.z);
    if !collides_horizontal(set, config, x_only) {
        *eye = x_only;
        return MoveResolution::SlideX;
    }

    let z_only = Vec3::new(eye.x, eye.y, candidate.z);
    if !collides_horizontal(set, config, z_only) {
        *eye = z_only;
        return MoveResolution::SlideZ;
    }

    MoveResolution::Blocked
}

/// Resolve one frame of WASD movement.
///
/// Precondition, not an error: the pointer must be locked for movement to
/// happen. Forward/backward follow the camera's horizontal forward,
/// left/right strafe along its horizontal right; held flags combine, the
/// result is normalized so diagonal walking is not faster, and the
/// sprint flag selects the speed constant.
pub fn resolve_movement<S: SurfaceSet + ?Sized>(
    set: &S,
    config: &NavConfig,
    look: &LookController,
    keys: &MovementKeys,
    eye: &mut Vec3,
    delta_seconds: f32,
) -> MoveResolution {
    if !look.is_locked() {
        return MoveResolution::Idle;
    }

    let forward = look.horizontal_forward();
    let right = look.horizontal_right();

    let mut direction = Vec3::ZERO;
    if keys.forward {
        direction += forward;
    }
    if keys.backward {
        direction -= forward;
    }
    if keys.left {
        direction -= right;
    }
    if keys.right {
        direction += right;
    }

    if direction.length_squared() <= 0.0 {
        return MoveResolution::Idle;
    }

    let speed = if keys.sprint {
        config.sprint_speed
    } else {
        config.walk_speed
    };
    let candidate = *eye + direction.normalize() * (speed * delta_seconds);

    try_slide(set, config, eye, candidate)
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

    /// Wall spanning all x at z in [1.0, 1.1], y in [0, 1].
    fn north_wall() -> TriangleMesh {
        TriangleMesh::cuboid("NorthWall", Vec3::new(-5.0, 0.0, 1.0), Vec3::new(5.0, 1.0, 1.1))
    }

    #[test]
    fn test_slide_full_when_clear() {
        let registry = registry_with(vec![north_wall()]);
        let config = NavConfig::default();
        let mut eye = Vec3::new(0.0, 0.5, 0.0);

        let resolution = try_slide(&registry, &config, &mut eye, Vec3::new(0.2, 0.5, 0.2));
        assert_eq!(resolution, MoveResolution::Full);
        assert_eq!(eye, Vec3::new(0.2, 0.5, 0.2));
    }

    #[test]
    fn test_slide_x_when_z_approach_blocked() {
        // Eye clear at z=0.6 (0.4 from the wall face at z=1.0); moving
        // diagonally toward the wall blocks full and Z-only, X-only clears
        let registry = registry_with(vec![north_wall()]);
        let config = NavConfig::default();
        let mut eye = Vec3::new(0.0, 0.5, 0.6);

        let resolution = try_slide(&registry, &config, &mut eye, Vec3::new(-0.1, 0.5, 0.7));
        assert_eq!(resolution, MoveResolution::SlideX);
        assert_eq!(eye, Vec3::new(-0.1, 0.5, 0.6));
    }

    #[test]
    fn test_slide_z_when_x_approach_blocked() {
        // East wall instead: full and X-only blocked, Z-only clears
        let registry = registry_with(vec![TriangleMesh::cuboid(
            "EastWall",
            Vec3::new(1.0, 0.0, -5.0),
            Vec3::new(1.1, 1.0, 5.0),
        )]);
        let config = NavConfig::default();
        let mut eye = Vec3::new(0.6, 0.5, 0.0);

        let resolution = try_slide(&registry, &config, &mut eye, Vec3::new(0.7, 0.5, -0.1));
        assert_eq!(resolution, MoveResolution::SlideZ);
        assert_eq!(eye, Vec3::new(0.6, 0.5, -0.1));
    }

    #[test]
    fn test_blocked_leaves_eye_unchanged() {
        // Tight box around the origin: walls 0.3 away in every direction
        let registry = registry_with(vec![
            TriangleMesh::cuboid("E", Vec3::new(0.3, 0.0, -0.5), Vec3::new(0.4, 1.0, 0.5)),
            TriangleMesh::cuboid("W", Vec3::new(-0.4, 0.0, -0.5), Vec3::new(-0.3, 1.0, 0.5)),
            TriangleMesh::cuboid("N", Vec3::new(-0.5, 0.0, 0.3), Vec3::new(0.5, 1.0, 0.4)),
            TriangleMesh::cuboid("S", Vec3::new(-0.5, 0.0, -0.4), Vec3::new(0.5, 1.0, -0.3)),
        ]);
        let config = NavConfig::default();
        let start = Vec3::new(0.0, 0.5, 0.0);
        let mut eye = start;

        let resolution = try_slide(&registry, &config, &mut eye, Vec3::new(0.1, 0.5, 0.1));
        assert_eq!(resolution, MoveResolution::Blocked);
        assert_eq!(eye, start);
    }

    #[test]
    fn test_no_movement_when_unlocked() {
        let registry = GeometryRegistry::new();
        let config = NavConfig::default();
        let look = LookController::new(); // unlocked
        let mut keys = MovementKeys::new();
        keys.forward = true;
        let mut eye = Vec3::new(0.0, 0.3, 0.0);

        let resolution = resolve_movement(&registry, &config, &look, &keys, &mut eye, 0.05);
        assert_eq!(resolution, MoveResolution::Idle);
        assert_eq!(eye, Vec3::new(0.0, 0.3, 0.0));
    }

    #[test]
    fn test_idle_when_no_keys_held() {
        let registry = GeometryRegistry::new();
        let config = NavConfig::default();
        let mut look = LookController::new();
        look.lock();
        let keys = MovementKeys::new();
        let mut eye = Vec3::ZERO;

        let resolution = resolve_movement(&registry, &config, &look, &keys, &mut eye, 0.05);
        assert_eq!(resolution, MoveResolution::Idle);
    }

    #[test]
    fn test_forward_follows_yaw() {
        // Yaw +90 degrees faces +X; empty registry, movement unconditional
        let registry = GeometryRegistry::new();
        let config = NavConfig::default();
        let mut look = LookController::with_orientation(std::f32::consts::FRAC_PI_2, 0.0);
        look.lock();
        let mut keys = MovementKeys::new();
        keys.forward = true;
        let mut eye = Vec3::new(0.0, 0.3, 0.0);

        let resolution = resolve_movement(&registry, &config, &look, &keys, &mut eye, 0.05);
        assert_eq!(resolution, MoveResolution::Full);
        // 4.0 m/s * 0.05 s = 0.2 m along +X
        assert!((eye.x - 0.2).abs() < 1e-5);
        assert!(eye.y == 0.3);
        assert!(eye.z.abs() < 1e-5);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let registry = GeometryRegistry::new();
        let config = NavConfig::default();
        let mut look = LookController::new();
        look.lock();
        let mut keys = MovementKeys::new();
        keys.forward = true;
        keys.backward = true;
        let mut eye = Vec3::ZERO;

        let resolution = resolve_movement(&registry, &config, &look, &keys, &mut eye, 0.05);
        assert_eq!(resolution, MoveResolution::Idle);
        assert_eq!(eye, Vec3::ZERO);
    }

    #[test]
    fn test_diagonal_not_faster_than_straight() {
        let registry = GeometryRegistry::new();
        let config = NavConfig::default();
        let mut look = LookController::new();
        look.lock();
        let mut keys = MovementKeys::new();
        keys.forward = true;
        keys.right = true;
        let mut eye = Vec3::ZERO;

        resolve_movement(&registry, &config, &look, &keys, &mut eye, 0.05);
        // Displacement magnitude equals walk_speed * dt regardless of diagonal
        assert!((eye.length() - 0.2).abs() < 1e-5);
        assert!(eye.x.abs() > 1e-3 && eye.z.abs() > 1e-3);
    }

    #[test]
    fn test_sprint_speed() {
        let registry = GeometryRegistry::new();
        let config = NavConfig::default();
        let mut look = LookController::new();
        look.lock();
        let mut keys = MovementKeys::new();
        keys.forward = true;
        keys.sprint = true;
        let mut eye = Vec3::ZERO;

        resolve_movement(&registry, &config, &look, &keys, &mut eye, 0.05);
        // 7.0 m/s * 0.05 s = 0.35 m
        assert!((eye.length() - 0.35).abs() < 1e-5);
    }
}
