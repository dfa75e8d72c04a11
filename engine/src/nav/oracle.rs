//! Collision Oracle
//!
//! Answers "does this candidate eye position collide?" in two modes, plus
//! the single vertical rays for floor and ceiling detection. All queries
//! are read-only and total: an environment that has not finished loading
//! answers fail-open (no collision) rather than blocking the player.
//!
//! # Why two modes
//!
//! A box overlap alone cannot tell "walking into a wall" from "standing on
//! a floor" - both are overlaps. Horizontal queries therefore use a ray
//! fan with surface-normal classification: only hits on mostly-vertical
//! surfaces count as walls, so floor contact never blocks walking.

use glam::Vec3;

use crate::config::NavConfig;
use crate::physics::{RayHit, full_collider, horizontal_probe_origin};
use crate::world::SurfaceSet;

/// Diagonal ray component, matching the eight-direction compass fan.
const DIAG: f32 = 0.707;

/// The eight compass directions of the wall-probe ray fan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction8 {
    East,
    West,
    North,
    South,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction8 {
    /// All eight directions, in probe order.
    pub const ALL: [Direction8; 8] = [
        Direction8::East,
        Direction8::West,
        Direction8::North,
        Direction8::South,
        Direction8::NorthEast,
        Direction8::NorthWest,
        Direction8::SouthEast,
        Direction8::SouthWest,
    ];

    /// Horizontal unit vector for this direction (+X = east, +Z = north).
    pub fn unit(self) -> Vec3 {
        match self {
            Direction8::East => Vec3::new(1.0, 0.0, 0.0),
            Direction8::West => Vec3::new(-1.0, 0.0, 0.0),
            Direction8::North => Vec3::new(0.0, 0.0, 1.0),
            Direction8::South => Vec3::new(0.0, 0.0, -1.0),
            Direction8::NorthEast => Vec3::new(DIAG, 0.0, DIAG),
            Direction8::NorthWest => Vec3::new(-DIAG, 0.0, DIAG),
            Direction8::SouthEast => Vec3::new(DIAG, 0.0, -DIAG),
            Direction8::SouthWest => Vec3::new(-DIAG, 0.0, -DIAG),
        }
    }

    /// Index of this direction in [`Direction8::ALL`].
    pub fn index(self) -> usize {
        Direction8::ALL.iter().position(|&d| d == self).unwrap_or(0)
    }
}

/// Per-direction wall-probe result, consumable by a debug overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallProbe {
    /// One flag per [`Direction8::ALL`] entry
    pub blocked: [bool; 8],
}

impl WallProbe {
    /// Whether any direction found a wall.
    pub fn any(&self) -> bool {
        self.blocked.iter().any(|&b| b)
    }

    /// Whether the given direction found a wall.
    pub fn is_blocked(&self, dir: Direction8) -> bool {
        self.blocked[dir.index()]
    }
}

/// Classify a probe ray hit as a wall or not.
///
/// A surface whose normal is mostly horizontal (|y| below the threshold)
/// is a wall. Without a normal, anything strictly closer than the bare
/// collider radius is treated as a wall.
fn is_wall_hit(hit: &RayHit, config: &NavConfig) -> bool {
    match hit.normal {
        Some(normal) => normal.y.abs() < config.wall_normal_threshold,
        None => hit.distance < config.collider_radius,
    }
}

/// Full-volume overlap check for floor/ceiling penetration and the
/// end-of-frame safety fallback.
///
/// Fail-open while the environment is loading. Tests the full collider
/// box against every cached surface box; any overlap is a collision
/// (order-independent, no penetration depth).
pub fn collides_vertical<S: SurfaceSet + ?Sized>(set: &S, config: &NavConfig, eye: Vec3) -> bool {
    if !set.is_ready() {
        return false;
    }
    let collider = full_collider(eye, config);
    set.surface_boxes().iter().any(|b| collider.intersects(b))
}

/// Ray-fan wall check for horizontal movement.
///
/// Fail-open while the environment is loading. Casts eight rays from the
/// collider mid-height in the compass directions, each reaching the
/// collider radius plus a small safety margin, and classifies only the
/// nearest hit per direction. Returns true on the first direction whose
/// nearest hit is a wall.
pub fn collides_horizontal<S: SurfaceSet + ?Sized>(set: &S, config: &NavConfig, eye: Vec3) -> bool {
    if !set.is_ready() {
        return false;
    }
    let origin = horizontal_probe_origin(eye, config);
    let range = config.wall_ray_range();

    for dir in Direction8::ALL {
        if let Some(hit) = set.cast_ray(origin, dir.unit(), range) {
            if is_wall_hit(&hit, config) {
                return true;
            }
        }
    }
    false
}

/// Evaluate the full eight-direction wall probe (no early exit).
///
/// Same classification as [`collides_horizontal`], but every direction is
/// reported - this is the per-direction result the debug layer displays.
pub fn probe_walls<S: SurfaceSet + ?Sized>(set: &S, config: &NavConfig, eye: Vec3) -> WallProbe {
    let mut probe = WallProbe::default();
    if !set.is_ready() {
        return probe;
    }
    let origin = horizontal_probe_origin(eye, config);
    let range = config.wall_ray_range();

    for (slot, dir) in probe.blocked.iter_mut().zip(Direction8::ALL) {
        if let Some(hit) = set.cast_ray(origin, dir.unit(), range) {
            *slot = is_wall_hit(&hit, config);
        }
    }
    probe
}

/// Nearest floor hit straight below the eye, within the configured range.
pub fn cast_floor<S: SurfaceSet + ?Sized>(set: &S, config: &NavConfig, eye: Vec3) -> Option<RayHit> {
    set.cast_ray(eye, Vec3::NEG_Y, config.floor_ray_distance)
}

/// Nearest ceiling hit straight above the eye, within the configured range.
pub fn cast_ceiling<S: SurfaceSet + ?Sized>(set: &S, config: &NavConfig, eye: Vec3) -> Option<RayHit> {
    set.cast_ray(eye, Vec3::Y, config.ceiling_ray_distance)
}
