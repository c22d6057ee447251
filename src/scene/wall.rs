use std::f32::consts::{FRAC_PI_2, PI};

use nalgebra_glm as glm;

use crate::renderer::vertex::Vertex;

/// A flat wall panel. Centered on `position`, facing +Z before the Y rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub name: &'static str,
    pub position: [f32; 3],
    pub rotation_y: f32,
    pub size: [f32; 2],
}

/// Four walls of a 10x10 room, no floor or ceiling
pub const ROOM_WALLS: [Wall; 4] = [
    Wall {
        name: "front",
        position: [0.0, 0.0, -5.0],
        rotation_y: 0.0,
        size: [10.0, 5.0],
    },
    Wall {
        name: "back",
        position: [0.0, 0.0, 5.0],
        rotation_y: PI,
        size: [10.0, 5.0],
    },
    Wall {
        name: "left",
        position: [-5.0, 0.0, 0.0],
        rotation_y: FRAC_PI_2,
        size: [10.0, 5.0],
    },
    Wall {
        name: "right",
        position: [5.0, 0.0, 0.0],
        rotation_y: -FRAC_PI_2,
        size: [10.0, 5.0],
    },
];

impl Wall {
    pub fn model_matrix(&self) -> glm::Mat4 {
        let translation = glm::translation(&glm::make_vec3(&self.position));
        let rotation = glm::rotation(self.rotation_y, &glm::vec3(0.0, 1.0, 0.0));
        translation * rotation
    }

    /// World-space quad, two triangles
    pub fn mesh(&self) -> ([Vertex; 4], [u16; 6]) {
        let model = self.model_matrix();
        let half_w = self.size[0] * 0.5;
        let half_h = self.size[1] * 0.5;

        let normal = model * glm::vec4(0.0, 0.0, 1.0, 0.0);
        let normal = [normal.x, normal.y, normal.z];

        let corner = |x: f32, y: f32, uv: [f32; 2]| {
            let p = model * glm::vec4(x, y, 0.0, 1.0);
            Vertex::new([p.x, p.y, p.z], normal, uv)
        };

        let vertices = [
            corner(-half_w, -half_h, [0.0, 1.0]),
            corner(half_w, -half_h, [1.0, 1.0]),
            corner(half_w, half_h, [1.0, 0.0]),
            corner(-half_w, half_h, [0.0, 0.0]),
        ];
        (vertices, [0, 1, 2, 0, 2, 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn normals_point_into_the_room() {
        for wall in &ROOM_WALLS {
            let (vertices, _) = wall.mesh();
            let to_center = -glm::make_vec3(&wall.position);
            for v in &vertices {
                let n = glm::make_vec3(&v.normal);
                assert!((n.norm() - 1.0).abs() < EPS);
                assert!(n.dot(&to_center) > 0.0, "{} normal {:?}", wall.name, n);
            }
        }
    }

    #[test]
    fn corners_lie_on_the_room_boundary() {
        for wall in &ROOM_WALLS {
            let (vertices, _) = wall.mesh();
            for v in &vertices {
                let [x, y, z] = v.position;
                assert!(x.abs() <= 5.0 + EPS && z.abs() <= 5.0 + EPS);
                assert!((y.abs() - 2.5).abs() < EPS);
                // Every corner sits on one of the four box faces.
                assert!((x.abs() - 5.0).abs() < EPS || (z.abs() - 5.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn walls_span_full_room_width() {
        let (front, _) = ROOM_WALLS[0].mesh();
        let xs: Vec<f32> = front.iter().map(|v| v.position[0]).collect();
        let min = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert!((min + 5.0).abs() < EPS && (max - 5.0).abs() < EPS);
        assert!(front.iter().all(|v| (v.position[2] + 5.0).abs() < EPS));
    }

    #[test]
    fn quad_indices_cover_all_corners() {
        let (_, indices) = ROOM_WALLS[2].mesh();
        for corner in 0..4u16 {
            assert!(indices.contains(&corner));
        }
    }
}
