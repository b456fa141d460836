use voxpack_core::legacy::read_stream;
use voxpack_core::LayoutVersion;

use crate::compat;
use crate::compress;
use crate::error::PersistError;
use crate::format::*;
use crate::save::ChunkMesh;

/// Parsed mesh file, vertices widened to canonical form.
#[derive(Debug, Clone)]
pub struct LoadedMesh {
    pub header: MeshHeader,
    pub mesh: ChunkMesh,
    /// Compatibility warnings (e.g., legacy layout).
    pub warnings: Vec<String>,
}

/// Load and parse a mesh file from raw bytes.
pub fn load(bytes: &[u8]) -> Result<LoadedMesh, PersistError> {
    let header_bytes: &[u8; HEADER_SIZE] = bytes
        .get(..HEADER_SIZE)
        .and_then(|b| b.try_into().ok())
        .ok_or(PersistError::FileTooSmall(bytes.len(), HEADER_SIZE))?;

    let header = MeshHeader::from_le_bytes(header_bytes);
    let warnings = compat::validate_header(&header)?;
    for warning in &warnings {
        log::warn!("{warning}");
    }

    let layout =
        LayoutVersion::from_tag(header.layout).ok_or(PersistError::UnknownLayout(header.layout))?;
    let expected = header
        .body_len()
        .ok_or(PersistError::TooLarge(header.vertex_count as usize))?;

    let stored = &bytes[HEADER_SIZE..];
    let body = if header.is_compressed() {
        compress::decompress_body(stored, expected)?
    } else {
        if stored.len() < expected {
            return Err(PersistError::TruncatedFile {
                expected: HEADER_SIZE + expected,
                actual: bytes.len(),
            });
        }
        if stored.len() > expected {
            return Err(PersistError::BodySizeMismatch {
                expected,
                actual: stored.len(),
            });
        }
        stored.to_vec()
    };

    let words = compress::le_bytes_to_words(&body);
    let vertex_words = header.vertex_count as usize * layout.words_per_vertex();
    let (vertex_part, index_part) = words.split_at(vertex_words);

    let vertices = read_stream(layout, vertex_part);
    let indices = index_part.to_vec();

    if let Some(&index) = indices.iter().find(|&&i| i >= header.vertex_count) {
        return Err(PersistError::IndexOutOfRange {
            index,
            vertex_count: header.vertex_count,
        });
    }

    log::debug!(
        "loaded mesh at {}: {} vertices, {} indices, layout {:?}",
        header.origin(),
        vertices.len(),
        indices.len(),
        layout
    );

    Ok(LoadedMesh {
        header,
        mesh: ChunkMesh {
            origin: header.origin(),
            layout,
            vertices,
            indices,
        },
        warnings,
    })
}
