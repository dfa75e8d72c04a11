//! Scene Descriptions
//!
//! A minimal JSON scene format standing in for the full asset pipeline:
//! named triangle meshes as vertex/index lists in world coordinates.
//! The demo driver and tests use it as the geometry provider; a real host
//! would feed the registry from its model importer instead.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TriangleMesh;

/// Errors from parsing or validating a scene description.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("mesh {name:?}: triangle index {index} out of bounds ({count} positions)")]
    IndexOutOfBounds {
        name: String,
        index: u32,
        count: usize,
    },
    #[error("mesh {name:?} has no positions")]
    EmptyMesh { name: String },
}

/// One named mesh in a scene file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshDescription {
    pub name: String,
    pub positions: Vec<Vec3>,
    pub indices: Vec<[u32; 3]>,
}

/// A full scene: the finite set of meshes the geometry provider delivers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    pub meshes: Vec<MeshDescription>,
}

impl SceneDescription {
    /// Parse a scene from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize the scene to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate and convert into collidable meshes.
    ///
    /// Every triangle index must address an existing position and every
    /// mesh must have at least one position; malformed input is the
    /// provider's error, reported here rather than tolerated downstream.
    pub fn into_meshes(self) -> Result<Vec<TriangleMesh>, SceneError> {
        let mut meshes = Vec::with_capacity(self.meshes.len());
        for desc in self.meshes {
            if desc.positions.is_empty() {
                return Err(SceneError::EmptyMesh { name: desc.name });
            }
            let count = desc.positions.len();
            for triple in &desc.indices {
                for &index in triple {
                    if index as usize >= count {
                        return Err(SceneError::IndexOutOfBounds {
                            name: desc.name,
                            index,
                            count,
                        });
                    }
                }
            }
            meshes.push(TriangleMesh::new(desc.name, desc.positions, desc.indices));
        }
        Ok(meshes)
    }
}

impl From<&TriangleMesh> for MeshDescription {
    fn from(mesh: &TriangleMesh) -> Self {
        Self {
            name: mesh.name.clone(),
            positions: mesh.positions.clone(),
            indices: mesh.indices.clone(),
        }
    }
}
