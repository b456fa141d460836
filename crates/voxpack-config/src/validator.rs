use std::collections::HashSet;

use thiserror::Error;
use voxpack_core::constants::{
    ATLAS_COLUMNS_MAX, GRID_AXIS_MAX, LEGACY_BLOCK_TYPE_MAX, TEXEL_MAX,
};
use voxpack_core::{CodecProfile, LayoutVersion};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Atlas must have at least one tile column")]
    ZeroAtlasColumns,
    #[error("Atlas columns {value} exceed {max} (block types are 16-bit)")]
    TooManyAtlasColumns { value: u32, max: u32 },
    #[error("Atlas tile_texels {value} outside 1..={max} (the texel field must reach the tile edge)")]
    TileTexelsOutOfRange { value: u32, max: u32 },
    #[error("chunk_side {value} outside 1..={max} (grid positions are 4 bits per axis)")]
    ChunkSideOutOfRange { value: u32, max: u32 },
}

/// Validate a codec profile.
///
/// Returns Ok(warnings) when the profile is usable. Settings the format
/// cannot represent are errors; settings that are merely suspicious
/// (duplicates, unreachable ids) are warnings.
pub fn validate_profile(profile: &CodecProfile) -> Result<Vec<String>, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if profile.atlas.columns == 0 {
        errors.push(ValidationError::ZeroAtlasColumns);
    }
    if profile.atlas.columns > ATLAS_COLUMNS_MAX {
        errors.push(ValidationError::TooManyAtlasColumns {
            value: profile.atlas.columns,
            max: ATLAS_COLUMNS_MAX,
        });
    }
    if profile.atlas.tile_texels == 0 || profile.atlas.tile_texels > TEXEL_MAX {
        errors.push(ValidationError::TileTexelsOutOfRange {
            value: profile.atlas.tile_texels,
            max: TEXEL_MAX,
        });
    }
    let max_side = GRID_AXIS_MAX + 1;
    if profile.chunk_side == 0 || profile.chunk_side > max_side {
        errors.push(ValidationError::ChunkSideOutOfRange {
            value: profile.chunk_side,
            max: max_side,
        });
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for &id in &profile.flip_block_types {
        if !seen.insert(id) && reported.insert(id) {
            warnings.push(format!("Flip block type {id} is listed more than once"));
        }
    }

    let tile_count = profile.atlas.tile_count();
    for &id in &seen {
        if id as u32 >= tile_count {
            warnings.push(format!(
                "Flip block type {id} has no tile in a {0}x{0} atlas",
                profile.atlas.columns
            ));
        }
        if profile.layout == LayoutVersion::V1SingleWord && id > LEGACY_BLOCK_TYPE_MAX {
            warnings.push(format!(
                "Flip block type {id} cannot be stored in the single-word layout (max {LEGACY_BLOCK_TYPE_MAX})"
            ));
        }
    }

    // HashSet iteration order is arbitrary
    warnings.sort();
    Ok(warnings)
}
