use crate::error::PersistError;

/// Compress a mesh body using LZ4.
pub fn compress_body(data: &[u8]) -> Vec<u8> {
    lz4_flex::compress_prepend_size(data)
}

/// Decompress an LZ4-compressed body, validating the output size.
///
/// The 4-byte size prefix is checked against `expected_len` before anything
/// is allocated, so a corrupt prefix cannot request an oversized buffer.
pub fn decompress_body(compressed: &[u8], expected_len: usize) -> Result<Vec<u8>, PersistError> {
    if compressed.len() < 4 {
        return Err(PersistError::DecompressError("missing size prefix".to_string()));
    }
    let (prefix, block) = compressed.split_at(4);
    let declared = u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as usize;

    if declared != expected_len {
        return Err(PersistError::BodySizeMismatch {
            expected: expected_len,
            actual: declared,
        });
    }

    let mut decompressed = vec![0u8; expected_len];
    let written = lz4_flex::decompress_into(block, &mut decompressed)
        .map_err(|e| PersistError::DecompressError(e.to_string()))?;

    if written != expected_len {
        return Err(PersistError::BodySizeMismatch {
            expected: expected_len,
            actual: written,
        });
    }

    Ok(decompressed)
}

/// Little-endian bytes of a word stream.
pub fn words_to_le_bytes(words: &[u32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * 4);
    for word in words {
        out.extend_from_slice(&word.to_le_bytes());
    }
    out
}

/// Read little-endian words. Trailing bytes that do not fill a word are ignored.
pub fn le_bytes_to_words(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}
