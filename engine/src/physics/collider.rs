//! Player Collider Volumes
//!
//! Pure functions deriving the player's collision volumes from an eye
//! position and the configured collider proportions. The collider is a
//! capsule-like shape approximated by a box: radius sideways, height
//! vertically, bottom offset below the eye.

use glam::Vec3;

use crate::config::NavConfig;
use crate::physics::Aabb;

/// Full collider box for a candidate eye position.
///
/// Centered at `(eye.x, eye.y + bottom_offset + height/2, eye.z)` with
/// half extents `(radius, height/2, radius)`. Used for floor/ceiling
/// penetration and the end-of-frame safety check.
pub fn full_collider(eye: Vec3, config: &NavConfig) -> Aabb {
    let center = Vec3::new(
        eye.x,
        eye.y + config.collider_bottom_offset + config.collider_height * 0.5,
        eye.z,
    );
    let half_extents = Vec3::new(
        config.collider_radius,
        config.collider_height * 0.5,
        config.collider_radius,
    );
    Aabb::from_center_half_extents(center, half_extents)
}

/// Origin for the horizontal wall-probe ray fan.
///
/// The vertical midpoint of the collider: casting from here keeps the
/// probes clear of floor contact at the collider bottom, which would
/// otherwise read as wall hits while simply standing on the floor.
pub fn horizontal_probe_origin(eye: Vec3, config: &NavConfig) -> Vec3 {
    Vec3::new(
        eye.x,
        eye.y + config.collider_bottom_offset + config.collider_height * 0.5,
        eye.z,
    )
}
