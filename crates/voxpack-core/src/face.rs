use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::FACE_COUNT;
use crate::error::CodecError;

/// One of the 6 cube faces, in normal-table order.
///
/// The discriminant is the value stored in the 3-bit normal index field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Face {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
    Up = 4,
    Down = 5,
}

/// All faces in normal-table order.
pub const ALL_FACES: [Face; FACE_COUNT] = [
    Face::North,
    Face::South,
    Face::East,
    Face::West,
    Face::Up,
    Face::Down,
];

/// Unit normals indexed by the packed normal index. Y-up, north is -Z.
pub const NORMAL_TABLE: [Vec3; FACE_COUNT] = [
    Vec3::new(0.0, 0.0, -1.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, -1.0, 0.0),
];

impl Face {
    /// Bounds-checked lookup. Indices 6 and 7 fit the field but name no face.
    pub fn from_index(index: u8) -> Option<Face> {
        ALL_FACES.get(index as usize).copied()
    }

    /// Value written to the normal index field.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn normal(self) -> Vec3 {
        NORMAL_TABLE[self as usize]
    }

    /// Neighbour offset for this face.
    pub fn offset(self) -> IVec3 {
        match self {
            Face::North => IVec3::new(0, 0, -1),
            Face::South => IVec3::new(0, 0, 1),
            Face::East => IVec3::new(1, 0, 0),
            Face::West => IVec3::new(-1, 0, 0),
            Face::Up => IVec3::new(0, 1, 0),
            Face::Down => IVec3::new(0, -1, 0),
        }
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::North => Face::South,
            Face::South => Face::North,
            Face::East => Face::West,
            Face::West => Face::East,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
        }
    }
}

impl TryFrom<u8> for Face {
    type Error = CodecError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Face::from_index(index).ok_or(CodecError::InvalidNormalIndex(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_faces_unique() {
        for (i, a) in ALL_FACES.iter().enumerate() {
            for (j, b) in ALL_FACES.iter().enumerate() {
                if i != j {
                    assert_ne!(a.normal(), b.normal(), "faces {i} and {j} share a normal");
                }
            }
        }
    }

    #[test]
    fn test_table_order_matches_discriminants() {
        for (i, face) in ALL_FACES.iter().enumerate() {
            assert_eq!(face.index() as usize, i);
            assert_eq!(Face::from_index(i as u8), Some(*face));
        }
    }

    #[test]
    fn test_up_and_down_normals() {
        assert_eq!(Face::from_index(4).map(Face::normal), Some(Vec3::Y));
        assert_eq!(Face::from_index(5).map(Face::normal), Some(Vec3::NEG_Y));
        assert_eq!(Face::North.normal(), Vec3::NEG_Z);
        assert_eq!(Face::East.normal(), Vec3::X);
    }

    #[test]
    fn test_normals_are_unit_and_match_offsets() {
        for face in ALL_FACES {
            assert!((face.normal().length() - 1.0).abs() < f32::EPSILON);
            assert_eq!(face.normal(), face.offset().as_vec3(), "{face:?}");
        }
    }

    #[test]
    fn test_out_of_table_indices() {
        assert_eq!(Face::from_index(6), None);
        assert_eq!(Face::from_index(7), None);
        assert_eq!(Face::try_from(6), Err(CodecError::InvalidNormalIndex(6)));
        assert_eq!(Face::try_from(2), Ok(Face::East));
    }

    #[test]
    fn test_opposite_is_involution() {
        for face in ALL_FACES {
            assert_eq!(face.opposite().opposite(), face);
            assert_eq!(face.opposite().offset(), -face.offset());
        }
    }
}
