/// Errors that can occur while reading or writing a mesh file.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("invalid magic bytes (expected VXPK)")]
    InvalidMagic,

    #[error("unsupported mesh format version {0}")]
    UnsupportedVersion(u16),

    #[error("unknown vertex layout tag {0}")]
    UnknownLayout(u16),

    #[error("file too small ({0} bytes, minimum {1})")]
    FileTooSmall(usize, usize),

    #[error("truncated file: expected {expected} bytes, got {actual}")]
    TruncatedFile { expected: usize, actual: usize },

    #[error("LZ4 decompression failed: {0}")]
    DecompressError(String),

    #[error("body size mismatch: header describes {expected} bytes, found {actual}")]
    BodySizeMismatch { expected: usize, actual: usize },

    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: u32 },

    #[error("mesh too large for the format ({0} elements)")]
    TooLarge(usize),
}
