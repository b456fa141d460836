use glam::IVec3;
use voxpack_core::legacy::narrow_to_v1;
use voxpack_core::{LayoutVersion, PackedVertex};

use crate::compress;
use crate::error::PersistError;
use crate::format::*;

/// One chunk's packed mesh: vertices in canonical form plus triangle indices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChunkMesh {
    /// Chunk coordinate; world position is `grid + origin * chunk_side`.
    pub origin: IVec3,
    /// Layout the vertices are written in.
    pub layout: LayoutVersion,
    pub vertices: Vec<PackedVertex>,
    pub indices: Vec<u32>,
}

impl ChunkMesh {
    pub fn new(origin: IVec3, vertices: Vec<PackedVertex>, indices: Vec<u32>) -> Self {
        Self {
            origin,
            layout: LayoutVersion::V2Split,
            vertices,
            indices,
        }
    }
}

/// Serialize a chunk mesh into the packed mesh format.
///
/// Layout: header (32B) + body (vertex words then indices), optionally LZ4.
/// Writing a single-word layout drops the tint and the block type bits above
/// the low nibble.
pub fn save(mesh: &ChunkMesh, compress: bool) -> Result<Vec<u8>, PersistError> {
    let vertex_count =
        u32::try_from(mesh.vertices.len()).map_err(|_| PersistError::TooLarge(mesh.vertices.len()))?;
    let index_count =
        u32::try_from(mesh.indices.len()).map_err(|_| PersistError::TooLarge(mesh.indices.len()))?;

    let mut words =
        Vec::with_capacity(mesh.vertices.len() * mesh.layout.words_per_vertex() + mesh.indices.len());
    match mesh.layout {
        LayoutVersion::V2Split => {
            for v in &mesh.vertices {
                words.push(v.hi);
                words.push(v.lo);
            }
        }
        LayoutVersion::V1SingleWord => {
            words.extend(mesh.vertices.iter().map(|&v| narrow_to_v1(v)));
        }
    }
    words.extend_from_slice(&mesh.indices);

    let raw_body = compress::words_to_le_bytes(&words);

    let mut header = MeshHeader::new(mesh.layout, vertex_count, index_count, mesh.origin);
    let body = if compress {
        header.flags |= FLAG_LZ4;
        compress::compress_body(&raw_body)
    } else {
        raw_body
    };

    log::debug!(
        "saved mesh at {}: {} vertices, {} indices, {} body bytes{}",
        mesh.origin,
        vertex_count,
        index_count,
        body.len(),
        if compress { " (lz4)" } else { "" }
    );

    let mut output = Vec::with_capacity(HEADER_SIZE + body.len());
    output.extend_from_slice(&header.to_le_bytes());
    output.extend_from_slice(&body);
    Ok(output)
}
