use glam::IVec3;

use crate::atlas::{decode_uv_with, AtlasGeometry};
use crate::codec::{decode_block_type, decode_foliage, decode_grid_position, decode_normal_index};
use crate::error::CodecError;
use crate::face::Face;
use crate::hash::FlipSet;
use crate::math::world_position;
use crate::profile::{CodecProfile, InvalidNormalPolicy};
use crate::types::{BlockTypeId, ChunkCoord, DecodedVertex, PackedVertex};

/// Everything a full decode needs besides the vertex itself.
/// Immutable, so one context can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeContext {
    pub atlas: AtlasGeometry,
    pub flips: FlipSet,
    pub chunk_origin: ChunkCoord,
    pub chunk_side: u32,
    pub invalid_normal: InvalidNormalPolicy,
}

impl Default for DecodeContext {
    fn default() -> Self {
        Self::from_profile(&CodecProfile::default(), IVec3::ZERO)
    }
}

impl DecodeContext {
    pub fn from_profile(profile: &CodecProfile, chunk_origin: ChunkCoord) -> Self {
        Self {
            atlas: profile.atlas,
            flips: profile.flip_set(),
            chunk_origin,
            chunk_side: profile.chunk_side,
            invalid_normal: profile.invalid_normal,
        }
    }

    /// Same settings, different chunk.
    pub fn with_origin(&self, chunk_origin: ChunkCoord) -> Self {
        Self {
            chunk_origin,
            ..self.clone()
        }
    }

    fn resolve_face(&self, index: u8) -> Result<Face, CodecError> {
        match (Face::from_index(index), self.invalid_normal) {
            (Some(face), _) => Ok(face),
            (None, InvalidNormalPolicy::Fallback(face)) => Ok(face),
            (None, InvalidNormalPolicy::Reject) => Err(CodecError::InvalidNormalIndex(index)),
        }
    }
}

/// Decode every derived value of a vertex: what the block vertex shader
/// computes per invocation.
///
/// Only fails on a normal index of 6 or 7 under [`InvalidNormalPolicy::Reject`].
pub fn decode_vertex(vertex: PackedVertex, ctx: &DecodeContext) -> Result<DecodedVertex, CodecError> {
    let face = ctx.resolve_face(decode_normal_index(vertex.lo))?;
    let grid = decode_grid_position(vertex.lo);
    let (uv, flip) = decode_uv_with(vertex, grid, ctx.atlas, &ctx.flips);

    Ok(DecodedVertex {
        block_type: BlockTypeId(decode_block_type(vertex.hi, vertex.lo)),
        grid,
        face,
        normal: face.normal(),
        world_position: world_position(grid, ctx.chunk_origin, ctx.chunk_side),
        texel: vertex.texel(),
        flip,
        uv,
        foliage: decode_foliage(vertex.hi),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;
    use crate::layout::NORMAL_INDEX;
    use crate::types::{FoliageTint, VertexFields};
    use glam::{UVec2, UVec3, Vec2, Vec3};

    fn vertex(block: u16, face: Face) -> PackedVertex {
        encode(&VertexFields::new(
            UVec3::new(1, 2, 3),
            face,
            BlockTypeId(block),
            UVec2::new(2, 5),
            FoliageTint::new(63, 0, 127),
        ))
    }

    #[test]
    fn test_full_decode() {
        let ctx = DecodeContext::default().with_origin(IVec3::new(1, 0, -1));
        let d = decode_vertex(vertex(13, Face::Up), &ctx).expect("valid normal");
        assert_eq!(d.block_type, BlockTypeId(13));
        assert_eq!(d.grid, UVec3::new(1, 2, 3));
        assert_eq!(d.face, Face::Up);
        assert_eq!(d.normal, Vec3::Y);
        assert_eq!(d.world_position, Vec3::new(17.0, 2.0, -13.0));
        assert_eq!(d.texel, UVec2::new(2, 5));
        assert_eq!(d.flip, 0);
        assert_eq!(d.foliage, Vec3::new(1.0, 0.0, 1.0));
        let expected = Vec2::splat(1.0 / 12.0) + Vec2::new(2.0, 5.0) / 192.0;
        assert!((d.uv - expected).abs().max_element() < 1e-6);
    }

    #[test]
    fn test_flip_reported() {
        let d = decode_vertex(vertex(4, Face::North), &DecodeContext::default())
            .expect("valid normal");
        assert_eq!(d.flip, 3);
        // The raw texel is kept even though the UV is mirrored
        assert_eq!(d.texel, UVec2::new(2, 5));
    }

    #[test]
    fn test_invalid_normal_rejected_by_default() {
        let mut v = vertex(1, Face::Up);
        v.lo = (v.lo & !NORMAL_INDEX.mask()) | NORMAL_INDEX.insert(6);
        let result = decode_vertex(v, &DecodeContext::default());
        assert_eq!(result, Err(CodecError::InvalidNormalIndex(6)));
    }

    #[test]
    fn test_invalid_normal_fallback() {
        let mut v = vertex(1, Face::Up);
        v.lo = (v.lo & !NORMAL_INDEX.mask()) | NORMAL_INDEX.insert(7);
        let ctx = DecodeContext {
            invalid_normal: InvalidNormalPolicy::Fallback(Face::Down),
            ..DecodeContext::default()
        };
        let d = decode_vertex(v, &ctx).expect("fallback applies");
        assert_eq!(d.face, Face::Down);
        assert_eq!(d.normal, Vec3::NEG_Y);
    }

    #[test]
    fn test_decode_is_repeatable() {
        let ctx = DecodeContext::default();
        let v = vertex(6, Face::East);
        let a = decode_vertex(v, &ctx);
        for _ in 0..8 {
            assert_eq!(decode_vertex(v, &ctx), a);
        }
    }

    #[test]
    fn test_context_from_profile() {
        let profile = CodecProfile {
            chunk_side: 8,
            flip_block_types: vec![1],
            ..CodecProfile::default()
        };
        let ctx = DecodeContext::from_profile(&profile, IVec3::new(1, 1, 1));
        assert_eq!(ctx.chunk_side, 8);
        assert!(ctx.flips.contains(1));
        assert!(!ctx.flips.contains(4));
        let d = decode_vertex(vertex(2, Face::West), &ctx).expect("valid normal");
        assert_eq!(d.world_position, Vec3::new(9.0, 10.0, 11.0));
    }

    #[test]
    fn test_huge_atlas_decodes_without_panic() {
        let ctx = DecodeContext {
            atlas: AtlasGeometry {
                columns: 1 << 28,
                tile_texels: 16,
            },
            ..DecodeContext::default()
        };
        let d = decode_vertex(PackedVertex::new(0, 4 << 15), &ctx).expect("valid normal");
        assert_eq!(d.face, Face::Up);
        assert!(d.uv.is_finite());
    }
}
