//! Mesh container layout.
//!
//! ```text
//!   header   32 bytes (MeshHeader)
//!   body     vertices, then indices; LZ4 with prepended size if FLAG_LZ4
//! ```
//!
//! Every multi-byte value, header and body, is little-endian. Canonical
//! vertices are written `hi` then `lo`; single-word vertices write `lo` only.

use glam::IVec3;
use voxpack_core::LayoutVersion;

/// Magic bytes identifying a packed mesh file.
pub const MAGIC: [u8; 4] = *b"VXPK";

/// Current container format version.
pub const FORMAT_VERSION: u16 = 1;

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 32;

/// Header flag: body is LZ4-compressed.
pub const FLAG_LZ4: u32 = 0x1;

/// Flags this version understands.
pub const KNOWN_FLAGS: u32 = FLAG_LZ4;

/// Mesh file header. Fixed 32 bytes, repr(C) with no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshHeader {
    pub magic: [u8; 4],
    pub version: u16,
    /// `LayoutVersion` tag of the vertex words.
    pub layout: u16,
    pub vertex_count: u32,
    pub index_count: u32,
    pub chunk_origin: [i32; 3],
    pub flags: u32,
}

impl MeshHeader {
    pub fn new(layout: LayoutVersion, vertex_count: u32, index_count: u32, origin: IVec3) -> Self {
        Self {
            magic: MAGIC,
            version: FORMAT_VERSION,
            layout: layout.tag(),
            vertex_count,
            index_count,
            chunk_origin: origin.to_array(),
            flags: 0,
        }
    }

    pub fn is_compressed(&self) -> bool {
        self.flags & FLAG_LZ4 != 0
    }

    pub fn origin(&self) -> IVec3 {
        IVec3::from_array(self.chunk_origin)
    }

    /// Byte length of the uncompressed body this header describes.
    /// `None` for unknown layouts or sizes that overflow.
    pub fn body_len(&self) -> Option<usize> {
        let layout = LayoutVersion::from_tag(self.layout)?;
        let vertex_words = (self.vertex_count as usize).checked_mul(layout.words_per_vertex())?;
        vertex_words
            .checked_add(self.index_count as usize)?
            .checked_mul(4)
    }

    fn swap_to_le(self) -> Self {
        Self {
            magic: self.magic,
            version: self.version.to_le(),
            layout: self.layout.to_le(),
            vertex_count: self.vertex_count.to_le(),
            index_count: self.index_count.to_le(),
            chunk_origin: self.chunk_origin.map(i32::to_le),
            flags: self.flags.to_le(),
        }
    }

    /// Serialize with explicit little-endian fields.
    pub fn to_le_bytes(&self) -> [u8; HEADER_SIZE] {
        bytemuck::cast(self.swap_to_le())
    }

    /// Parse a little-endian header. `bytes` need not be aligned.
    pub fn from_le_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        let raw: MeshHeader = bytemuck::pod_read_unaligned(bytes);
        // The swap is its own inverse
        raw.swap_to_le()
    }
}
