//! Packed voxel vertex codec.
//!
//! A block vertex is two u32 words (`hi`, `lo`) carrying its grid cell, face,
//! atlas texel, block type and foliage tint. Encoding happens once per vertex
//! in the mesher; decoding is pure and runs per vertex per draw.

pub mod atlas;
pub mod batch;
pub mod codec;
pub mod constants;
pub mod decode;
pub mod error;
pub mod face;
pub mod hash;
pub mod layout;
pub mod legacy;
pub mod math;
pub mod mesh;
pub mod profile;
pub mod types;

pub use atlas::{decode_uv, AtlasGeometry};
pub use codec::{
    decode_block_type, decode_foliage, decode_grid_position, decode_normal_index, encode,
    encode_strict,
};
pub use decode::{decode_vertex, DecodeContext};
pub use error::{CodecError, FieldOverflow, RangeError};
pub use face::{Face, NORMAL_TABLE};
pub use hash::{hash_uvec3, uv_flip_variant, FlipSet};
pub use legacy::LayoutVersion;
pub use math::world_position;
pub use profile::{CodecProfile, InvalidNormalPolicy};
pub use types::{BlockTypeId, DecodedVertex, FoliageTint, PackedVertex, VertexFields};
