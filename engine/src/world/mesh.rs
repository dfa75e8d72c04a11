//! Collidable Triangle Meshes
//!
//! One `TriangleMesh` is one piece of environment geometry: a named,
//! immutable vertex/index list in world space. Meshes are handed to the
//! geometry registry once, when the asynchronous environment load
//! finishes, and never change afterwards.

use glam::Vec3;

use crate::physics::Aabb;

/// A named, static triangle mesh in world coordinates.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    /// Provider-assigned name, used by the exclusion list
    pub name: String,
    /// World-space vertex positions
    pub positions: Vec<Vec3>,
    /// Triangles as index triples into `positions`
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Create a mesh from raw vertex and index data.
    ///
    /// Indices are trusted here; the scene loader validates them at the
    /// boundary, and [`TriangleMesh::triangles`] skips any stragglers.
    pub fn new(name: impl Into<String>, positions: Vec<Vec3>, indices: Vec<[u32; 3]>) -> Self {
        Self {
            name: name.into(),
            positions,
            indices,
        }
    }

    /// Build a box-shaped mesh (12 triangles) spanning `min..max`.
    ///
    /// The workhorse for test rooms and demo scenes - walls, floor slabs
    /// and ceilings are all cuboids.
    pub fn cuboid(name: impl Into<String>, min: Vec3, max: Vec3) -> Self {
        let positions = vec![
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(min.x, max.y, max.z),
        ];
        let indices = vec![
            // bottom (y = min)
            [0, 1, 2],
            [0, 2, 3],
            // top (y = max)
            [4, 6, 5],
            [4, 7, 6],
            // back (z = min)
            [0, 5, 1],
            [0, 4, 5],
            // front (z = max)
            [3, 2, 6],
            [3, 6, 7],
            // left (x = min)
            [0, 3, 7],
            [0, 7, 4],
            // right (x = max)
            [1, 5, 6],
            [1, 6, 2],
        ];
        Self::new(name, positions, indices)
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Iterate the triangles as world-space vertex triples.
    ///
    /// Triangles with out-of-range indices are skipped.
    pub fn triangles(&self) -> impl Iterator<Item = (Vec3, Vec3, Vec3)> + '_ {
        self.indices.iter().filter_map(|&[i, j, k]| {
            Some((
                *self.positions.get(i as usize)?,
                *self.positions.get(j as usize)?,
                *self.positions.get(k as usize)?,
            ))
        })
    }

    /// Bounding box over all vertex positions, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.positions)
    }
}
