//! Data-parallel encode/decode over whole vertex buffers.
//!
//! The codec holds no state, so batches split freely across rayon's pool and
//! produce exactly what a sequential loop would.

use rayon::prelude::*;

use crate::codec::encode;
use crate::decode::{decode_vertex, DecodeContext};
use crate::error::CodecError;
use crate::types::{DecodedVertex, PackedVertex, VertexFields};

pub fn encode_all(fields: &[VertexFields]) -> Vec<PackedVertex> {
    fields.par_iter().map(encode).collect()
}

/// Decode every vertex. Stops at an invalid normal index under the
/// `Reject` policy.
pub fn decode_all(
    vertices: &[PackedVertex],
    ctx: &DecodeContext,
) -> Result<Vec<DecodedVertex>, CodecError> {
    vertices
        .par_iter()
        .map(|&v| decode_vertex(v, ctx))
        .collect()
}
