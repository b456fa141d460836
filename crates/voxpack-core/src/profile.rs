use serde::{Deserialize, Serialize};

use crate::atlas::AtlasGeometry;
use crate::constants::{CHUNK_SIZE, DEFAULT_FLIP_BLOCK_TYPES};
use crate::face::Face;
use crate::hash::FlipSet;
use crate::legacy::LayoutVersion;

/// What a full decode does with normal indices 6 and 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InvalidNormalPolicy {
    /// Fail with `CodecError::InvalidNormalIndex`.
    #[default]
    Reject,
    /// Substitute the given face.
    Fallback(Face),
}

/// Codec settings shared by the mesher and the renderer, loaded from RON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecProfile {
    /// Layout revision vertices are stored in.
    #[serde(default)]
    pub layout: LayoutVersion,
    /// Atlas the block type indexes into.
    #[serde(default)]
    pub atlas: AtlasGeometry,
    /// Chunk side length in voxels, used for world positions.
    #[serde(default = "default_chunk_side")]
    pub chunk_side: u32,
    /// Block types whose UVs get a hashed flip.
    #[serde(default = "default_flip_block_types")]
    pub flip_block_types: Vec<u16>,
    #[serde(default)]
    pub invalid_normal: InvalidNormalPolicy,
}

fn default_chunk_side() -> u32 {
    CHUNK_SIZE
}

fn default_flip_block_types() -> Vec<u16> {
    DEFAULT_FLIP_BLOCK_TYPES.to_vec()
}

impl Default for CodecProfile {
    fn default() -> Self {
        Self {
            layout: LayoutVersion::default(),
            atlas: AtlasGeometry::default(),
            chunk_side: default_chunk_side(),
            flip_block_types: default_flip_block_types(),
            invalid_normal: InvalidNormalPolicy::default(),
        }
    }
}

impl CodecProfile {
    pub fn flip_set(&self) -> FlipSet {
        FlipSet::from_ids(&self.flip_block_types)
    }
}
