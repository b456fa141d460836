use glam::Vec3;

use crate::types::{ChunkCoord, GridPos};

/// World-space position of a packed grid position:
/// `grid + chunk_origin * chunk_side`, componentwise.
pub fn world_position(grid: GridPos, chunk_origin: ChunkCoord, chunk_side: u32) -> Vec3 {
    grid.as_vec3() + chunk_origin.as_vec3() * chunk_side as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{IVec3, UVec3};

    #[test]
    fn test_world_position_origin_chunk() {
        let p = world_position(UVec3::new(1, 2, 3), IVec3::ZERO, 16);
        assert_eq!(p, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_world_position_offset_chunk() {
        let p = world_position(UVec3::new(15, 0, 4), IVec3::new(2, -1, -3), 16);
        assert_eq!(p, Vec3::new(47.0, -16.0, -44.0));
    }

    #[test]
    fn test_world_position_other_side_length() {
        let p = world_position(UVec3::new(1, 1, 1), IVec3::new(1, 1, 1), 8);
        assert_eq!(p, Vec3::splat(9.0));
    }
}
