//! Roomwalk Engine Library
//!
//! Navigation core for first-person walkthroughs of static interiors:
//! pointer-locked look control, WASD movement with sprint, axis-sliding wall
//! collision and gravity-free floor/ceiling snapping against triangle-mesh
//! environments.
//!
//! The engine is renderer-agnostic: it consumes a surface set, a per-frame
//! elapsed time, held-key state and a camera orientation, and produces a
//! committed eye position. Scene loading, rendering and window wiring live
//! outside this crate.
//!
//! # Modules
//!
//! - [`camera`] - Pointer-locked look controller (yaw/pitch, direction vectors)
//! - [`config`] - Navigation tuning values
//! - [`input`] - Held-key state and one-shot debug commands
//! - [`nav`] - Collision oracle, movement and vertical-snap resolvers, session
//! - [`physics`] - Collision volumes, ray/box and ray/triangle intersection
//! - [`world`] - Collidable meshes, scene descriptions, geometry registry
//!
//! # Example
//!
//! ```ignore
//! use roomwalk_engine::nav::WalkSession;
//! use roomwalk_engine::world::TriangleMesh;
//! use glam::Vec3;
//!
//! let mut session = WalkSession::default();
//!
//! // Geometry arrives whenever the async load finishes; queries before
//! // that are fail-open (no collision).
//! let floor = TriangleMesh::cuboid(
//!     "Floor",
//!     Vec3::new(-5.0, -0.2, -5.0),
//!     Vec3::new(5.0, 0.0, 5.0),
//! );
//! session.registry.populate(vec![floor], &[]);
//!
//! // Once per animation tick:
//! session.look.lock();
//! session.update(delta_seconds);
//! let eye = session.eye();
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod nav;
pub mod physics;
pub mod world;

// Re-export the session and registry types at crate level for convenience
pub use config::NavConfig;
pub use nav::WalkSession;
pub use world::{GeometryRegistry, SurfaceSet, TriangleMesh};
