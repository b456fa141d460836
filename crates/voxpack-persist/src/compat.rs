use voxpack_core::LayoutVersion;

use crate::error::PersistError;
use crate::format::{MeshHeader, FORMAT_VERSION, KNOWN_FLAGS, MAGIC};

/// Validate a mesh header and return any compatibility warnings.
///
/// Returns Ok(warnings) on success, Err on fatal errors.
/// A legacy layout or unknown flag bits produce warnings, not errors.
pub fn validate_header(header: &MeshHeader) -> Result<Vec<String>, PersistError> {
    if header.magic != MAGIC {
        return Err(PersistError::InvalidMagic);
    }

    if header.version != FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion(header.version));
    }

    let layout =
        LayoutVersion::from_tag(header.layout).ok_or(PersistError::UnknownLayout(header.layout))?;

    let mut warnings = Vec::new();

    if layout == LayoutVersion::V1SingleWord {
        warnings.push(
            "Mesh uses the legacy single-word layout: block types are limited to 0-15 \
             and foliage tint decodes as white."
                .to_string(),
        );
    }

    let unknown_flags = header.flags & !KNOWN_FLAGS;
    if unknown_flags != 0 {
        warnings.push(format!(
            "Mesh header has unknown flag bits {unknown_flags:#010x}; they are ignored."
        ));
    }

    Ok(warnings)
}
