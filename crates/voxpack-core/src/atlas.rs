use glam::{UVec2, UVec3, Vec2};
use serde::{Deserialize, Serialize};

use crate::codec::{decode_block_type, decode_texel};
use crate::constants::{ATLAS_COLUMNS, TILE_TEXELS};
use crate::hash::{uv_flip_variant, FlipSet};
use crate::types::PackedVertex;

/// Geometry of a square block atlas: `columns` × `columns` tiles of
/// `tile_texels` × `tile_texels` texels. The block type is the tile index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasGeometry {
    pub columns: u32,
    pub tile_texels: u32,
}

impl Default for AtlasGeometry {
    fn default() -> Self {
        Self {
            columns: ATLAS_COLUMNS,
            tile_texels: TILE_TEXELS,
        }
    }
}

impl AtlasGeometry {
    /// Zero columns would divide by zero; treated as one.
    fn columns_nonzero(self) -> u32 {
        self.columns.max(1)
    }

    /// Texels along one side of the atlas. Saturates at `u32::MAX`.
    pub fn texels_across(self) -> u32 {
        self.columns_nonzero().saturating_mul(self.tile_texels)
    }

    /// Number of tiles in the (square) atlas. Saturates at `u32::MAX`.
    pub fn tile_count(self) -> u32 {
        self.columns_nonzero().saturating_mul(self.columns_nonzero())
    }

    /// Tile coordinates of a block type: `(id % columns, id / columns)`.
    pub fn tile_of(self, block_type: u16) -> UVec2 {
        let id = block_type as u32;
        let columns = self.columns_nonzero();
        UVec2::new(id % columns, id / columns)
    }

    /// Absolute atlas texel of a tile-local texel. Saturates per axis.
    pub fn absolute_texel(self, tile: UVec2, local: UVec2) -> UVec2 {
        let axis = |t: u32, l: u32| t.saturating_mul(self.tile_texels).saturating_add(l);
        UVec2::new(axis(tile.x, local.x), axis(tile.y, local.y))
    }

    /// Normalized atlas UV of a tile-local (possibly mirrored) texel position.
    ///
    /// Computed in floating point, so any geometry decodes without overflow.
    /// A zero `tile_texels` yields a non-finite UV.
    pub fn uv(self, tile: UVec2, local: Vec2) -> Vec2 {
        let columns = self.columns_nonzero() as f32;
        tile.as_vec2() / columns + local / (columns * self.tile_texels as f32)
    }
}

/// Mirror a tile-local texel inside its tile. Bit 0 flips U, bit 1 flips V.
///
/// Texels past the tile edge (malformed input) mirror to negative offsets
/// rather than wrapping.
pub fn apply_flip(texel: UVec2, flip: u8, tile_texels: u32) -> Vec2 {
    let edge = tile_texels as f32;
    let mut local = texel.as_vec2();
    if flip & 0b01 != 0 {
        local.x = edge - local.x;
    }
    if flip & 0b10 != 0 {
        local.y = edge - local.y;
    }
    local
}

/// Normalized atlas UV of a vertex using the built-in 12-column atlas and
/// default flip set.
pub fn decode_uv(hi: u32, lo: u32, grid: UVec3) -> Vec2 {
    let atlas = AtlasGeometry::default();
    let block_type = decode_block_type(hi, lo);
    let flip = uv_flip_variant(block_type, grid);
    let tile = atlas.tile_of(block_type);
    atlas.uv(tile, apply_flip(decode_texel(lo), flip, atlas.tile_texels))
}

/// Normalized atlas UV with explicit atlas geometry and flip set.
/// Returns the UV and the flip variant that was applied.
pub fn decode_uv_with(
    vertex: PackedVertex,
    grid: UVec3,
    atlas: AtlasGeometry,
    flips: &FlipSet,
) -> (Vec2, u8) {
    let block_type = decode_block_type(vertex.hi, vertex.lo);
    let flip = flips.variant(block_type, grid);
    let tile = atlas.tile_of(block_type);
    let local = apply_flip(decode_texel(vertex.lo), flip, atlas.tile_texels);
    (atlas.uv(tile, local), flip)
}
