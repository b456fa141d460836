//! Built-in codec profile, matching the block shader's compiled-in constants.

/// RON text of the default profile. Parses to `CodecProfile::default()`.
pub const DEFAULT_PROFILE_RON: &str = r#"(
    layout: V2Split,
    atlas: (
        columns: 12,
        tile_texels: 16,
    ),
    chunk_side: 16,
    // Flippable block types have no shared rule; list them explicitly.
    flip_block_types: [4, 6, 12],
    invalid_normal: Reject,
)
"#;
