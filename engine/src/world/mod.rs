//! World Module
//!
//! The static environment: collidable triangle meshes, the JSON scene
//! format the demo driver loads, and the geometry registry the collision
//! oracle queries.

pub mod mesh;
pub mod registry;
pub mod scene;

pub use mesh::TriangleMesh;
pub use registry::{GeometryRegistry, SurfaceSet};
pub use scene::{MeshDescription, SceneDescription, SceneError};
