use std::ops::Range;

use super::Wall;
use crate::renderer::vertex::Vertex;

/// All walls packed into a single vertex/index buffer pair
#[derive(Debug, Clone, Default)]
pub struct RoomMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
    /// Index range of each wall, in input order
    pub wall_ranges: Vec<Range<u32>>,
}

impl RoomMesh {
    pub fn build(walls: &[Wall]) -> Self {
        let mut mesh = Self::default();
        for wall in walls {
            let (vertices, indices) = wall.mesh();
            let base = mesh.vertices.len() as u16;
            let start = mesh.indices.len() as u32;

            mesh.vertices.extend_from_slice(&vertices);
            mesh.indices.extend(indices.iter().map(|i| base + i));
            mesh.wall_ranges.push(start..mesh.indices.len() as u32);
        }
        mesh
    }

    pub fn wall_count(&self) -> usize {
        self.wall_ranges.len()
    }
}
