//! Walk Session
//!
//! The explicit session context for a walkthrough: owns the eye position,
//! held-key state, look controller, geometry registry and tuning config,
//! and runs the per-frame update (movement resolution, then vertical
//! snap). Owning everything in one struct keeps the core unit-testable
//! without a rendering environment - the render loop only calls
//! [`WalkSession::update`] once per tick and reads [`WalkSession::eye`].

use glam::Vec3;
use log::info;

use crate::camera::LookController;
use crate::config::NavConfig;
use crate::input::{Command, KeyCode, MovementKeys};
use crate::nav::movement::{MoveResolution, resolve_movement};
use crate::nav::oracle::{WallProbe, probe_walls};
use crate::nav::vertical::resolve_vertical;
use crate::world::GeometryRegistry;

/// Spawn position of the original walkthrough scene (ground floor, near
/// the entrance).
const SPAWN_X: f32 = -5.0;
const SPAWN_Z: f32 = 7.0;

/// Session state for one first-person walkthrough.
///
/// Single-threaded and frame-driven: the eye position is mutated only by
/// the two resolvers and the teleport commands, never mid-query. The
/// registry starts empty; until the host populates it, all collision
/// queries are fail-open and the player can move freely.
#[derive(Debug)]
pub struct WalkSession {
    /// Authoritative camera/player position (the eye)
    eye: Vec3,
    /// Held movement keys, fed by the host's key events
    pub keys: MovementKeys,
    /// Camera orientation and pointer-lock state
    pub look: LookController,
    /// Static collidable environment (empty until assets load)
    pub registry: GeometryRegistry,
    /// Navigation tuning
    pub config: NavConfig,
    /// How the last frame's movement was resolved
    last_resolution: MoveResolution,
}

impl Default for WalkSession {
    fn default() -> Self {
        Self::new(NavConfig::default())
    }
}

impl WalkSession {
    /// Create a session at the spawn position with an empty registry.
    pub fn new(config: NavConfig) -> Self {
        Self {
            eye: Vec3::new(SPAWN_X, config.ground_eye_height, SPAWN_Z),
            keys: MovementKeys::new(),
            look: LookController::new(),
            registry: GeometryRegistry::new(),
            config,
            last_resolution: MoveResolution::Idle,
        }
    }

    /// The committed eye position, read by the renderer after `update`.
    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Overwrite the eye position directly (spawn points, tests).
    pub fn set_eye(&mut self, eye: Vec3) {
        self.eye = eye;
    }

    /// How the most recent `update` resolved horizontal movement.
    #[inline]
    pub fn last_resolution(&self) -> MoveResolution {
        self.last_resolution
    }

    /// Evaluate the eight-direction wall probe at the current eye, for
    /// debug display.
    pub fn wall_probe(&self) -> WallProbe {
        probe_walls(&self.registry, &self.config, self.eye)
    }

    /// Route a key event: held movement state first, then one-shot
    /// commands on the press edge.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if self.keys.handle_key(key, pressed) {
            return;
        }
        if pressed {
            if let Some(command) = Command::from_key(key) {
                self.apply_command(command);
            }
        }
    }

    /// Apply a one-shot command.
    ///
    /// Teleports overwrite the eye height with no collision check - they
    /// are debug escape hatches, and the next frame's vertical snap will
    /// seat the collider on whatever floor is there.
    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::TeleportGroundFloor => {
                self.eye.y = self.config.ground_eye_height;
                info!("teleported to ground floor eye height {}", self.eye.y);
            }
            Command::TeleportUpperFloor => {
                self.eye.y = self.config.upper_eye_height;
                info!("teleported to upper floor eye height {}", self.eye.y);
            }
            Command::PrintPosition => {
                info!(
                    "eye position: x={:.3} y={:.3} z={:.3}",
                    self.eye.x, self.eye.y, self.eye.z
                );
            }
        }
    }

    /// Advance one frame.
    ///
    /// `delta_seconds` is capped at the configured maximum so a long pause
    /// (tab in background, debugger) cannot produce a displacement that
    /// tunnels through walls. Movement runs first, then the vertical snap
    /// re-checks the committed position.
    pub fn update(&mut self, delta_seconds: f32) {
        let dt = delta_seconds.clamp(0.0, self.config.max_frame_delta);

        self.last_resolution = resolve_movement(
            &self.registry,
            &self.config,
            &self.look,
            &self.keys,
            &mut self.eye,
            dt,
        );
        resolve_vertical(&self.registry, &self.config, &mut self.eye);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::TriangleMesh;

    #[test]
    fn test_spawn_position() {
        let session = WalkSession::default();
        assert_eq!(session.eye(), Vec3::new(-5.0, 0.3, 7.0));
        assert!(!session.look.is_locked());
        assert_eq!(session.last_resolution(), MoveResolution::Idle);
    }

    #[test]
    fn test_handle_key_routes_movement_and_commands() {
        let mut session = WalkSession::default();
        session.handle_key(KeyCode::W, true);
        assert!(session.keys.forward);

        session.handle_key(KeyCode::U, true);
        assert_eq!(session.eye().y, session.config.upper_eye_height);

        session.handle_key(KeyCode::W, false);
        assert!(!session.keys.forward);
    }

    #[test]
    fn test_command_key_release_does_not_refire() {
        let mut session = WalkSession::default();
        session.handle_key(KeyCode::U, true);
        session.set_eye(Vec3::new(0.0, 1.0, 0.0));
        session.handle_key(KeyCode::U, false);
        assert_eq!(session.eye().y, 1.0);
    }

    #[test]
    fn test_teleport_bypasses_collision() {
        // Solid block surrounding the upper-floor height: the teleport
        // still lands there (vertical snap only runs on update)
        let mut session = WalkSession::default();
        session.registry.populate(
            vec![TriangleMesh::cuboid(
                "Block",
                Vec3::new(-10.0, 2.0, -10.0),
                Vec3::new(10.0, 3.0, 10.0),
            )],
            &[],
        );
        session.apply_command(Command::TeleportUpperFloor);
        assert_eq!(session.eye().y, 2.5);
    }

    #[test]
    fn test_update_caps_delta() {
        let mut session = WalkSession::default();
        session.look.lock();
        session.keys.forward = true;
        session.set_eye(Vec3::ZERO);

        // Huge frame gap: displacement must not exceed walk_speed * cap
        session.update(10.0);
        let max_step = session.config.walk_speed * session.config.max_frame_delta;
        assert!(session.eye().length() <= max_step + 1e-5);
        assert!(session.eye().length() > 0.0);
    }

    #[test]
    fn test_update_without_lock_is_stationary() {
        let mut session = WalkSession::default();
        session.keys.forward = true;
        let start = session.eye();
        session.update(0.016);
        assert_eq!(session.eye(), start);
        assert_eq!(session.last_resolution(), MoveResolution::Idle);
    }
}
