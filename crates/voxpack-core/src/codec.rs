use glam::{UVec2, UVec3, Vec3};

use crate::constants::{
    FACE_COUNT, FOLIAGE_BLUE_MAX, FOLIAGE_GREEN_MAX, FOLIAGE_RED_MAX, GRID_AXIS_MAX, TEXEL_MAX,
};
use crate::error::{CodecError, FieldOverflow, RangeError};
use crate::face::Face;
use crate::layout::*;
use crate::types::{BlockTypeId, FoliageTint, PackedVertex, VertexFields};

/// Pack vertex fields into the two-u32 representation.
///
/// Never fails: every field is masked to its width, so out-of-range input
/// wraps exactly the way the shader-side decoder would read it back.
/// The block type straddles the words: low nibble in `lo[28:31]`, the
/// remaining 12 bits in `hi[0:11]`.
pub fn encode(fields: &VertexFields) -> PackedVertex {
    let g = fields.grid;
    let t = fields.texel;
    let f = fields.foliage;
    let block = fields.block_type.0 as u32;

    // lo: grid[3:14] | normal[15:17] | uv[18:27] | block_low[28:31]
    let lo = GRID_X.insert(g.x)
        | GRID_Y.insert(g.y)
        | GRID_Z.insert(g.z)
        | NORMAL_INDEX.insert(fields.normal_index as u32)
        | TEXEL_U.insert(t.x)
        | TEXEL_V.insert(t.y)
        | BLOCK_TYPE_LOW.insert(block);

    // hi: block_high[0:11] | foliage[12:31]
    let hi = BLOCK_TYPE_HIGH.insert(block >> BLOCK_TYPE_LOW_BITS)
        | FOLIAGE_R.insert(f.r as u32)
        | FOLIAGE_G.insert(f.g as u32)
        | FOLIAGE_B.insert(f.b as u32);

    PackedVertex { hi, lo }
}

/// Check every field against its valid range, collecting all violations.
///
/// The normal index is held to the face table (0–5), not the 3-bit field.
pub fn check_ranges(fields: &VertexFields) -> Result<(), RangeError> {
    let mut overflows = Vec::new();
    let mut check = |field: &'static str, value: u32, max: u32| {
        if value > max {
            overflows.push(FieldOverflow { field, value, max });
        }
    };

    check(GRID_X.name, fields.grid.x, GRID_AXIS_MAX);
    check(GRID_Y.name, fields.grid.y, GRID_AXIS_MAX);
    check(GRID_Z.name, fields.grid.z, GRID_AXIS_MAX);
    check(
        NORMAL_INDEX.name,
        fields.normal_index as u32,
        FACE_COUNT as u32 - 1,
    );
    check(TEXEL_U.name, fields.texel.x, TEXEL_MAX);
    check(TEXEL_V.name, fields.texel.y, TEXEL_MAX);
    check(FOLIAGE_R.name, fields.foliage.r as u32, FOLIAGE_RED_MAX);
    check(FOLIAGE_G.name, fields.foliage.g as u32, FOLIAGE_GREEN_MAX);
    check(FOLIAGE_B.name, fields.foliage.b as u32, FOLIAGE_BLUE_MAX);

    if overflows.is_empty() {
        Ok(())
    } else {
        Err(RangeError { fields: overflows })
    }
}

/// Validate, then pack. Rejects instead of wrapping.
pub fn encode_strict(fields: &VertexFields) -> Result<PackedVertex, RangeError> {
    check_ranges(fields)?;
    Ok(encode(fields))
}

/// Recombine the split block type: `(hi[0:11] << 4) | lo[28:31]`.
#[inline]
pub fn decode_block_type(hi: u32, lo: u32) -> u16 {
    let high = BLOCK_TYPE_HIGH.extract(hi);
    let low = BLOCK_TYPE_LOW.extract(lo);
    ((high << BLOCK_TYPE_LOW_BITS) | low) as u16
}

/// Raw 3-bit normal index. Values 6 and 7 do not name a face.
#[inline]
pub fn decode_normal_index(lo: u32) -> u8 {
    NORMAL_INDEX.extract(lo) as u8
}

/// Normal index resolved through the face table.
pub fn decode_face(lo: u32) -> Result<Face, CodecError> {
    Face::try_from(decode_normal_index(lo))
}

#[inline]
pub fn decode_grid_position(lo: u32) -> UVec3 {
    UVec3::new(GRID_X.extract(lo), GRID_Y.extract(lo), GRID_Z.extract(lo))
}

/// Raw tile-local texel coordinate, before any flip.
#[inline]
pub fn decode_texel(lo: u32) -> UVec2 {
    UVec2::new(TEXEL_U.extract(lo), TEXEL_V.extract(lo))
}

#[inline]
pub fn decode_foliage_raw(hi: u32) -> FoliageTint {
    FoliageTint {
        r: FOLIAGE_R.extract(hi) as u8,
        g: FOLIAGE_G.extract(hi) as u8,
        b: FOLIAGE_B.extract(hi) as u8,
    }
}

/// Normalized foliage tint, each channel in [0, 1].
pub fn decode_foliage(hi: u32) -> Vec3 {
    decode_foliage_raw(hi).to_rgb()
}

/// Unpack every raw field. Inverse of [`encode`] for in-range input.
pub fn decode_fields(vertex: PackedVertex) -> VertexFields {
    VertexFields {
        grid: decode_grid_position(vertex.lo),
        normal_index: decode_normal_index(vertex.lo),
        block_type: BlockTypeId(decode_block_type(vertex.hi, vertex.lo)),
        texel: decode_texel(vertex.lo),
        foliage: decode_foliage_raw(vertex.hi),
    }
}

impl PackedVertex {
    pub fn block_type(self) -> BlockTypeId {
        BlockTypeId(decode_block_type(self.hi, self.lo))
    }

    pub fn normal_index(self) -> u8 {
        decode_normal_index(self.lo)
    }

    pub fn grid(self) -> UVec3 {
        decode_grid_position(self.lo)
    }

    pub fn texel(self) -> UVec2 {
        decode_texel(self.lo)
    }

    pub fn foliage(self) -> Vec3 {
        decode_foliage(self.hi)
    }
}
