use std::path::{Path, PathBuf};

use thiserror::Error;
use voxpack_core::CodecProfile;

use crate::defaults::DEFAULT_PROFILE_RON;
use crate::validator::{validate_profile, ValidationError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse codec profile RON: {0}")]
    ProfileParseError(String),
    #[error("Failed to serialize codec profile: {0}")]
    ProfileSerializeError(String),
    #[error("Failed to read profile {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Codec profile failed validation: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse a codec profile from a RON string. Omitted fields take defaults.
pub fn load_profile_from_str(ron_str: &str) -> Result<CodecProfile, LoadError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| LoadError::ProfileParseError(e.to_string()))
}

/// Read and parse a codec profile file.
pub fn load_profile_file(path: &Path) -> Result<CodecProfile, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded codec profile from {}", path.display());
    load_profile_from_str(&contents)
}

/// Parse the built-in profile.
pub fn load_default_profile() -> Result<CodecProfile, LoadError> {
    load_profile_from_str(DEFAULT_PROFILE_RON)
}

/// Parse and validate a profile. Warnings are logged and returned; any
/// validation error fails the load.
pub fn load_validated_profile(ron_str: &str) -> Result<(CodecProfile, Vec<String>), LoadError> {
    let profile = load_profile_from_str(ron_str)?;
    let warnings = validate_profile(&profile).map_err(LoadError::Invalid)?;
    for warning in &warnings {
        log::warn!("{warning}");
    }
    Ok((profile, warnings))
}

/// Serialize a profile back to pretty RON.
pub fn profile_to_ron(profile: &CodecProfile) -> Result<String, LoadError> {
    ron::ser::to_string_pretty(profile, ron::ser::PrettyConfig::default())
        .map_err(|e| LoadError::ProfileSerializeError(e.to_string()))
}
