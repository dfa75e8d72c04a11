//! Navigation Configuration
//!
//! Centralized tuning values for the walkthrough navigation core.
//! `Default` returns the values the walkthrough was tuned with; hosts that
//! want different collider proportions or speeds can deserialize a
//! `NavConfig` from JSON instead of patching constants.

use serde::{Deserialize, Serialize};

/// Horizontal collider radius in meters
pub const COLLIDER_RADIUS: f32 = 0.3;

/// Total collider height in meters
pub const COLLIDER_HEIGHT: f32 = 0.6;

/// Offset from the eye down to the collider bottom (negative = below eye)
pub const COLLIDER_BOTTOM_OFFSET: f32 = -0.3;

/// Walk speed in meters per second
pub const WALK_SPEED: f32 = 4.0;

/// Sprint speed in meters per second
pub const SPRINT_SPEED: f32 = 7.0;

/// Maximum downward ray distance for floor detection (meters)
pub const FLOOR_RAY_DISTANCE: f32 = 10.0;

/// Maximum upward ray distance for ceiling detection (meters)
pub const CEILING_RAY_DISTANCE: f32 = 2.0;

/// Extra reach added to wall-probe rays beyond the collider radius (meters)
pub const WALL_RAY_MARGIN: f32 = 0.05;

/// Surfaces whose normal has |y| below this count as walls.
/// Empirically tuned; flagged for revisiting, not known to be optimal.
pub const WALL_NORMAL_THRESHOLD: f32 = 0.5;

/// Upward nudge applied when the collider ends a frame overlapping geometry.
/// Empirically tuned; upward-only by design (known gap for overlaps
/// approached from above).
pub const UNSTICK_STEP: f32 = 0.1;

/// Per-tick delta time cap in seconds, keeps long pauses from teleporting
/// the player through walls
pub const MAX_FRAME_DELTA: f32 = 0.05;

/// Eye height preset for the ground floor (teleport target, meters)
pub const GROUND_EYE_HEIGHT: f32 = 0.3;

/// Eye height preset for the upper floor (teleport target, meters)
pub const UPPER_EYE_HEIGHT: f32 = 2.5;

/// Tuning values for collider shape, movement speeds and collision probes.
///
/// All resolvers and oracle queries take a `&NavConfig` so the same
/// geometry can be walked with different player proportions (e.g. tests
/// use the defaults, a host could shrink the collider for tight scenes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Horizontal collider radius (meters)
    pub collider_radius: f32,
    /// Total collider height (meters)
    pub collider_height: f32,
    /// Offset from eye to collider bottom (negative = below eye)
    pub collider_bottom_offset: f32,
    /// Walk speed (m/s)
    pub walk_speed: f32,
    /// Sprint speed (m/s)
    pub sprint_speed: f32,
    /// Max floor-detection ray distance (meters)
    pub floor_ray_distance: f32,
    /// Max ceiling-detection ray distance (meters)
    pub ceiling_ray_distance: f32,
    /// Extra reach of wall-probe rays beyond the collider radius (meters)
    pub wall_ray_margin: f32,
    /// Wall classification threshold on |normal.y|
    pub wall_normal_threshold: f32,
    /// Upward unstick nudge (meters)
    pub unstick_step: f32,
    /// Per-tick delta time cap (seconds)
    pub max_frame_delta: f32,
    /// Ground-floor eye height preset (meters)
    pub ground_eye_height: f32,
    /// Upper-floor eye height preset (meters)
    pub upper_eye_height: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            collider_radius: COLLIDER_RADIUS,
            collider_height: COLLIDER_HEIGHT,
            collider_bottom_offset: COLLIDER_BOTTOM_OFFSET,
            walk_speed: WALK_SPEED,
            sprint_speed: SPRINT_SPEED,
            floor_ray_distance: FLOOR_RAY_DISTANCE,
            ceiling_ray_distance: CEILING_RAY_DISTANCE,
            wall_ray_margin: WALL_RAY_MARGIN,
            wall_normal_threshold: WALL_NORMAL_THRESHOLD,
            unstick_step: UNSTICK_STEP,
            max_frame_delta: MAX_FRAME_DELTA,
            ground_eye_height: GROUND_EYE_HEIGHT,
            upper_eye_height: UPPER_EYE_HEIGHT,
        }
    }
}

impl NavConfig {
    /// Maximum reach of a single wall-probe ray.
    #[inline]
    pub fn wall_ray_range(&self) -> f32 {
        self.collider_radius + self.wall_ray_margin
    }

    /// Eye-relative height of the collider bottom plus the full height,
    /// i.e. the offset from the eye to the collider top.
    #[inline]
    pub fn collider_top_offset(&self) -> f32 {
        self.collider_bottom_offset + self.collider_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = NavConfig::default();
        assert_eq!(config.collider_radius, COLLIDER_RADIUS);
        assert_eq!(config.collider_height, COLLIDER_HEIGHT);
        assert_eq!(config.walk_speed, WALK_SPEED);
        assert_eq!(config.sprint_speed, SPRINT_SPEED);
        assert_eq!(config.max_frame_delta, MAX_FRAME_DELTA);
    }

    #[test]
    fn test_wall_ray_range() {
        let config = NavConfig::default();
        assert!((config.wall_ray_range() - 0.35).abs() < 1e-6);
    }

    #[test]
    fn test_collider_top_offset() {
        let config = NavConfig::default();
        // Bottom at -0.3, height 0.6 -> top sits exactly at eye level + 0.3
        assert!((config.collider_top_offset() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: NavConfig = serde_json::from_str(r#"{"walk_speed": 2.0}"#).unwrap();
        assert_eq!(config.walk_speed, 2.0);
        assert_eq!(config.sprint_speed, SPRINT_SPEED);
        assert_eq!(config.collider_radius, COLLIDER_RADIUS);
    }
}
