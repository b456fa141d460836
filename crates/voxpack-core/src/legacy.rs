//! Layout revisions.
//!
//! Version 1 packed a vertex into a single u32 that is bit-for-bit the
//! current `lo` word: the block type is just the 4-bit nibble at [28:31] and
//! there is no foliage tint. Version 2 added the `hi` word carrying the rest
//! of the block type and the tint. Layouts are never mixed in one stream;
//! legacy words are widened to the canonical form before decoding.

use serde::{Deserialize, Serialize};

use crate::codec::{check_ranges, encode};
use crate::constants::LEGACY_BLOCK_TYPE_MAX;
use crate::error::{FieldOverflow, RangeError};
use crate::layout::{BLOCK_TYPE_HIGH, FOLIAGE_B, FOLIAGE_G, FOLIAGE_R};
use crate::types::{FoliageTint, PackedVertex, VertexFields};

/// Packed vertex layout revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u16)]
pub enum LayoutVersion {
    /// One word per vertex, 16 block types, no tint.
    V1SingleWord = 1,
    /// Two words per vertex (`hi`, `lo`).
    #[default]
    V2Split = 2,
}

impl LayoutVersion {
    /// Tag stored in containers.
    pub fn tag(self) -> u16 {
        self as u16
    }

    pub fn from_tag(tag: u16) -> Option<Self> {
        match tag {
            1 => Some(LayoutVersion::V1SingleWord),
            2 => Some(LayoutVersion::V2Split),
            _ => None,
        }
    }

    /// u32 words per vertex.
    pub fn words_per_vertex(self) -> usize {
        match self {
            LayoutVersion::V1SingleWord => 1,
            LayoutVersion::V2Split => 2,
        }
    }
}

/// `hi` word implied by a legacy vertex: block type high bits zero, white tint.
const LEGACY_HI: u32 = BLOCK_TYPE_HIGH.insert(0)
    | FOLIAGE_R.insert(FoliageTint::WHITE.r as u32)
    | FOLIAGE_G.insert(FoliageTint::WHITE.g as u32)
    | FOLIAGE_B.insert(FoliageTint::WHITE.b as u32);

/// Widen a single-word vertex to the canonical two-word form.
pub fn widen_v1(word: u32) -> PackedVertex {
    PackedVertex {
        hi: LEGACY_HI,
        lo: word,
    }
}

/// Narrow a canonical vertex to a single word. Drops the tint and the block
/// type bits above the low nibble.
pub fn narrow_to_v1(vertex: PackedVertex) -> u32 {
    vertex.lo
}

/// Strictly encode to the single-word layout. Block types above 15 are
/// rejected in addition to the usual range checks; the tint is not stored.
pub fn encode_v1_strict(fields: &VertexFields) -> Result<u32, RangeError> {
    let mut overflows = match check_ranges(fields) {
        Ok(()) => Vec::new(),
        Err(e) => e.fields,
    };
    if fields.block_type.0 > LEGACY_BLOCK_TYPE_MAX {
        overflows.push(FieldOverflow {
            field: "block_type",
            value: fields.block_type.0 as u32,
            max: LEGACY_BLOCK_TYPE_MAX as u32,
        });
    }
    if !overflows.is_empty() {
        return Err(RangeError { fields: overflows });
    }
    Ok(encode(fields).lo)
}

/// Read one vertex of the given layout from a word stream.
/// Returns `None` if `words` holds too few words for that layout.
pub fn read_vertex(layout: LayoutVersion, words: &[u32]) -> Option<PackedVertex> {
    match layout {
        LayoutVersion::V1SingleWord => words.first().map(|&w| widen_v1(w)),
        LayoutVersion::V2Split => match words {
            [hi, lo, ..] => Some(PackedVertex { hi: *hi, lo: *lo }),
            _ => None,
        },
    }
}

/// Decode a whole word stream into canonical vertices.
/// Trailing words that do not form a full vertex are ignored.
pub fn read_stream(layout: LayoutVersion, words: &[u32]) -> Vec<PackedVertex> {
    words
        .chunks_exact(layout.words_per_vertex())
        .filter_map(|chunk| read_vertex(layout, chunk))
        .collect()
}
