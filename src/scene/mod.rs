mod mesh;
mod wall;

pub use mesh::RoomMesh;
pub use wall::{ROOM_WALLS, Wall};
