//! Physics Module
//!
//! Collision primitives for the walkthrough navigation core, built from
//! scratch without an external physics library.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (distances in meters, speeds in m/s).
//!
//! # Submodules
//!
//! - [`aabb`] - Axis-aligned boxes with strict overlap semantics
//! - [`collider`] - Player collider volumes derived from the eye position
//! - [`raycast`] - Ray/AABB (slab) and ray/triangle (Moller-Trumbore) tests

pub mod aabb;
pub mod collider;
pub mod raycast;

pub use aabb::Aabb;
pub use collider::{full_collider, horizontal_probe_origin};
pub use raycast::{RayHit, ray_aabb_intersect, ray_triangle_intersect, triangle_normal};
