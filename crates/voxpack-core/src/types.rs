use glam::{IVec3, UVec2, UVec3, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{FOLIAGE_BLUE_MAX, FOLIAGE_GREEN_MAX, FOLIAGE_RED_MAX};
use crate::face::Face;

/// Newtype for block type identifiers. Doubles as the atlas tile index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockTypeId(pub u16);

/// Cell of a vertex inside its chunk, 0–15 per axis.
pub type GridPos = UVec3;

/// Tile-local texel coordinate. 0–16 for a 16-texel tile, the field holds 0–31.
pub type TexelUv = UVec2;

/// Chunk coordinate in chunk-space (each unit = one chunk side).
pub type ChunkCoord = IVec3;

/// Packed vertex: 8 bytes stored as two u32 values.
///
/// See [`crate::layout`] for the bit layout. The field order matches the
/// vertex buffer attribute order (`hi` at offset 0, `lo` at offset 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct PackedVertex {
    pub hi: u32,
    pub lo: u32,
}

impl PackedVertex {
    pub const fn new(hi: u32, lo: u32) -> Self {
        Self { hi, lo }
    }
}

/// Quantized foliage tint: 6 bits red, 7 bits green, 7 bits blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FoliageTint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl FoliageTint {
    /// Full-intensity tint, i.e. no colour change.
    pub const WHITE: FoliageTint = FoliageTint {
        r: FOLIAGE_RED_MAX as u8,
        g: FOLIAGE_GREEN_MAX as u8,
        b: FOLIAGE_BLUE_MAX as u8,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Quantize a 0.0–1.0 colour. Channels are clamped, then rounded.
    pub fn from_rgb(color: Vec3) -> Self {
        let c = color.clamp(Vec3::ZERO, Vec3::ONE);
        Self {
            r: (c.x * FOLIAGE_RED_MAX as f32).round() as u8,
            g: (c.y * FOLIAGE_GREEN_MAX as f32).round() as u8,
            b: (c.z * FOLIAGE_BLUE_MAX as f32).round() as u8,
        }
    }

    /// Normalized tint, each channel divided by its maximum.
    pub fn to_rgb(self) -> Vec3 {
        Vec3::new(
            self.r as f32 / FOLIAGE_RED_MAX as f32,
            self.g as f32 / FOLIAGE_GREEN_MAX as f32,
            self.b as f32 / FOLIAGE_BLUE_MAX as f32,
        )
    }
}

/// Everything the mesher knows about one vertex, before packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexFields {
    pub grid: GridPos,
    pub normal_index: u8,
    pub block_type: BlockTypeId,
    pub texel: TexelUv,
    pub foliage: FoliageTint,
}

impl VertexFields {
    pub fn new(
        grid: GridPos,
        face: Face,
        block_type: BlockTypeId,
        texel: TexelUv,
        foliage: FoliageTint,
    ) -> Self {
        Self {
            grid,
            normal_index: face.index(),
            block_type,
            texel,
            foliage,
        }
    }
}

/// Decoder output for one vertex, ready for shading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecodedVertex {
    pub block_type: BlockTypeId,
    pub grid: GridPos,
    pub face: Face,
    pub normal: Vec3,
    pub world_position: Vec3,
    /// Raw tile-local texel before any flip.
    pub texel: TexelUv,
    pub flip: u8,
    /// Normalized atlas UV after the flip.
    pub uv: Vec2,
    pub foliage: Vec3,
}
