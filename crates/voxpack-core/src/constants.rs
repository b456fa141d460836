//! Single source of truth for format constants.
//! The same values are baked into the block vertex shader, so changing any of
//! them is a format break.

/// Side length of a chunk in voxels. Grid positions are 4 bits per axis.
pub const CHUNK_SIZE: u32 = 16;

/// Largest grid coordinate a packed vertex can carry on one axis.
pub const GRID_AXIS_MAX: u32 = 15;

/// Number of tile columns in the block atlas (the atlas is square).
pub const ATLAS_COLUMNS: u32 = 12;

/// Largest useful atlas width: block types are 16-bit, so wider atlases
/// leave every block in the first row.
pub const ATLAS_COLUMNS_MAX: u32 = 1 << 16;

/// Texels along one side of an atlas tile.
pub const TILE_TEXELS: u32 = 16;

/// Texels along one side of the whole atlas (16 × 12 = 192).
pub const ATLAS_TEXELS: u32 = TILE_TEXELS * ATLAS_COLUMNS;

/// Largest texel coordinate the 5-bit texel fields can carry.
pub const TEXEL_MAX: u32 = 31;

/// Number of entries in the face normal table.
pub const FACE_COUNT: usize = 6;

/// Largest value of the 3-bit normal index field (only 0–5 resolve).
pub const NORMAL_INDEX_FIELD_MAX: u8 = 7;

/// Quantization maxima for the 6/7/7-bit foliage tint channels.
pub const FOLIAGE_RED_MAX: u32 = 63;
pub const FOLIAGE_GREEN_MAX: u32 = 127;
pub const FOLIAGE_BLUE_MAX: u32 = 127;

/// Block types whose texture orientation is varied by the grid hash.
pub const DEFAULT_FLIP_BLOCK_TYPES: [u16; 3] = [0x0004, 0x0006, 0x000C];

/// Number of UV flip variants (identity, flip-U, flip-V, flip-both).
pub const FLIP_VARIANTS: u32 = 4;

/// LCG constants used to pre-scramble each grid axis before mixing.
pub const HASH_MULTIPLIER: u32 = 1_664_525;
pub const HASH_INCREMENT: u32 = 1_013_904_223;

/// Words per vertex in the canonical layout.
pub const VERTEX_WORDS: usize = 2;

/// Bytes per vertex in the canonical layout (two u32 values).
pub const VERTEX_BYTES: usize = VERTEX_WORDS * 4;

/// Largest block type the single-word legacy layout can express.
pub const LEGACY_BLOCK_TYPE_MAX: u16 = 15;
