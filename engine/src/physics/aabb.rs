//! Axis-Aligned Bounding Boxes
//!
//! The collision volume primitive: the player collider and every cached
//! per-surface bound are AABBs. Overlap is strict - boxes that only touch
//! on a face or edge do not count as colliding, so a collider seated
//! exactly on a floor surface is not penetrating it.

use glam::Vec3;

/// Axis-aligned bounding box defined by min and max corners.
///
/// Invariant: `min <= max` componentwise. Constructors from point sets
/// uphold it; `new` trusts the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create an AABB from min and max corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a point with given half extents.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Smallest AABB containing all given points, or `None` for an empty set.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        Some(Self { min, max })
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Whether a point lies inside or on the boundary of the box.
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Strict overlap test on all three axes.
    ///
    /// Exact face/edge contact (interval endpoints equal) is NOT an
    /// overlap: standing on a floor must not read as a collision.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }
}
