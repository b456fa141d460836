//! Emission of block faces as packed quads.
//!
//! The packed words only carry the block's cell, so every vertex of a face
//! shares the same grid position (and therefore the same UV flip). Corner
//! positions travel alongside in `positions`.

use glam::{UVec2, UVec3, Vec3};

use crate::codec::{encode, encode_strict};
use crate::constants::TILE_TEXELS;
use crate::error::{CodecError, RangeError};
use crate::face::Face;
use crate::types::{BlockTypeId, FoliageTint, GridPos, PackedVertex, VertexFields};

/// Two triangles per quad, counter-clockwise when seen from outside.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Unit-cube corners of each face, in emission order.
pub fn face_corners(face: Face) -> [UVec3; 4] {
    match face {
        Face::North => [
            UVec3::new(1, 0, 0),
            UVec3::new(0, 0, 0),
            UVec3::new(0, 1, 0),
            UVec3::new(1, 1, 0),
        ],
        Face::South => [
            UVec3::new(0, 0, 1),
            UVec3::new(1, 0, 1),
            UVec3::new(1, 1, 1),
            UVec3::new(0, 1, 1),
        ],
        Face::East => [
            UVec3::new(1, 0, 1),
            UVec3::new(1, 0, 0),
            UVec3::new(1, 1, 0),
            UVec3::new(1, 1, 1),
        ],
        Face::West => [
            UVec3::new(0, 0, 0),
            UVec3::new(0, 0, 1),
            UVec3::new(0, 1, 1),
            UVec3::new(0, 1, 0),
        ],
        Face::Up => [
            UVec3::new(0, 1, 1),
            UVec3::new(1, 1, 1),
            UVec3::new(1, 1, 0),
            UVec3::new(0, 1, 0),
        ],
        Face::Down => [
            UVec3::new(0, 0, 0),
            UVec3::new(1, 0, 0),
            UVec3::new(1, 0, 1),
            UVec3::new(0, 0, 1),
        ],
    }
}

/// Tile-local texel rectangle a face samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UvRect {
    pub min: UVec2,
    pub max: UVec2,
}

impl Default for UvRect {
    /// The whole 16×16 tile.
    fn default() -> Self {
        Self {
            min: UVec2::ZERO,
            max: UVec2::splat(TILE_TEXELS),
        }
    }
}

impl UvRect {
    /// Per-corner texels, matching [`face_corners`] order.
    pub fn corners(self) -> [UVec2; 4] {
        [
            UVec2::new(self.max.x, self.max.y),
            UVec2::new(self.min.x, self.max.y),
            UVec2::new(self.min.x, self.min.y),
            UVec2::new(self.max.x, self.min.y),
        ]
    }
}

/// One block face to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceQuad {
    pub cell: GridPos,
    pub face: Face,
    pub block_type: BlockTypeId,
    pub uv: UvRect,
    pub foliage: FoliageTint,
}

impl FaceQuad {
    fn fields(&self, texel: UVec2) -> VertexFields {
        VertexFields::new(self.cell, self.face, self.block_type, texel, self.foliage)
    }

    /// Pack the 4 vertices of the quad. Out-of-range fields wrap.
    pub fn vertices(&self) -> [PackedVertex; 4] {
        self.uv.corners().map(|texel| encode(&self.fields(texel)))
    }

    /// Pack the 4 vertices, rejecting out-of-range fields.
    pub fn vertices_strict(&self) -> Result<[PackedVertex; 4], RangeError> {
        let corners = self.uv.corners();
        let mut out = [PackedVertex::default(); 4];
        for (slot, texel) in out.iter_mut().zip(corners) {
            *slot = encode_strict(&self.fields(texel))?;
        }
        Ok(out)
    }

    /// Chunk-local corner positions.
    pub fn positions(&self) -> [Vec3; 4] {
        face_corners(self.face).map(|c| (self.cell + c).as_vec3())
    }
}

/// Growing vertex/index buffers for one chunk mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    pub vertices: Vec<PackedVertex>,
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// Append one quad: 4 vertices and 6 indices. Out-of-range fields wrap.
    ///
    /// Fails with [`CodecError::MeshFull`] once the quad's indices would not
    /// fit in u32; the buffers are left untouched.
    pub fn push_face(&mut self, quad: &FaceQuad) -> Result<(), CodecError> {
        let base = quad_base(self.vertices.len())?;
        self.append(base, &quad.vertices(), quad);
        Ok(())
    }

    /// Like [`push_face`](Self::push_face) but rejects out-of-range fields.
    /// Leaves the buffers untouched on error.
    pub fn push_face_strict(&mut self, quad: &FaceQuad) -> Result<(), CodecError> {
        let base = quad_base(self.vertices.len())?;
        let vertices = quad.vertices_strict()?;
        self.append(base, &vertices, quad);
        Ok(())
    }

    fn append(&mut self, base: u32, vertices: &[PackedVertex; 4], quad: &FaceQuad) {
        self.vertices.extend_from_slice(vertices);
        self.positions.extend_from_slice(&quad.positions());
        self.indices.extend(QUAD_INDICES.iter().map(|i| base + i));
    }
}

/// Index of the first vertex of a new quad, if all four indices fit in u32.
fn quad_base(vertex_count: usize) -> Result<u32, CodecError> {
    let last = vertex_count
        .checked_add(3)
        .ok_or(CodecError::MeshFull(vertex_count))?;
    u32::try_from(last).map_err(|_| CodecError::MeshFull(vertex_count))?;
    Ok(vertex_count as u32)
}
