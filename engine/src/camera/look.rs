//! Pointer-Locked Look Controller
//!
//! First-person look control: mouse deltas rotate the camera directly, with
//! no smoothing. Rotation only happens while the pointer is locked; the
//! movement resolver uses the same lock flag as its precondition, so an
//! unlocked session neither looks nor walks.
//!
//! Key features:
//! - Direct mouse input -> camera rotation while locked
//! - Configurable sensitivity (default: 0.002 rad/pixel)
//! - Pitch clamped to +/-89 degrees to prevent gimbal lock

use glam::Vec3;

/// Pitch limit constant: -89 degrees in radians
const PITCH_LIMIT_MIN: f32 = -89.0 * std::f32::consts::PI / 180.0;
/// Pitch limit constant: +89 degrees in radians
const PITCH_LIMIT_MAX: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Camera orientation state for a pointer-locked walkthrough.
///
/// Owns yaw/pitch and the pointer-lock flag. The eye position lives in the
/// walk session, not here: orientation is read every frame while the
/// position is resolved against collision.
///
/// ## Usage
/// ```rust,ignore
/// let mut look = LookController::new();
/// look.lock();
/// look.apply_mouse_delta(mouse_dx, mouse_dy);
/// let forward = look.horizontal_forward();
/// ```
#[derive(Clone, Debug)]
pub struct LookController {
    /// Horizontal angle (radians) - unrestricted, wraps around
    pub yaw: f32,
    /// Vertical angle (radians) - clamped to +/-89 degrees
    pub pitch: f32,
    /// Mouse sensitivity in radians per pixel
    pub sensitivity: f32,
    /// Whether the pointer is currently locked (look + movement enabled)
    locked: bool,
}

impl Default for LookController {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: 0.002,
            locked: false,
        }
    }
}

impl LookController {
    /// Create a look controller with default orientation, pointer unlocked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a look controller with a given yaw and pitch (radians).
    pub fn with_orientation(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw,
            pitch: pitch.clamp(PITCH_LIMIT_MIN, PITCH_LIMIT_MAX),
            ..Default::default()
        }
    }

    /// Lock the pointer: look and movement become active.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Release the pointer: look and movement stop until re-locked.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Whether the pointer is currently locked.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Set the pitch angle directly (radians, clamped to the limits).
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(PITCH_LIMIT_MIN, PITCH_LIMIT_MAX);
    }

    /// Apply a raw mouse delta (pixels) to the orientation.
    ///
    /// Standard FPS convention: mouse right increases yaw (look right),
    /// mouse down decreases pitch (look down). Ignored while the pointer
    /// is not locked, matching pointer-lock browser behavior.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        if !self.locked {
            return;
        }
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(PITCH_LIMIT_MIN, PITCH_LIMIT_MAX);
    }

    /// World-space look direction derived from yaw and pitch (normalized).
    ///
    /// Coordinate system: +X right, +Y up, -Z forward at yaw=0.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Look direction projected onto the horizontal plane and renormalized.
    ///
    /// This is what movement follows: looking up or down never slows
    /// horizontal travel. Well defined for any pitch inside the +/-89
    /// degree limits.
    #[inline]
    pub fn horizontal_forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos()).normalize()
    }

    /// Horizontal right vector (forward x world up, normalized).
    #[inline]
    pub fn horizontal_right(&self) -> Vec3 {
        self.horizontal_forward().cross(Vec3::Y).normalize()
    }
}
