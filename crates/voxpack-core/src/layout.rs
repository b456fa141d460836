//! Bit layout of the canonical two-word packed vertex.
//!
//! ```text
//!   lo [0:2]    reserved (always 0)
//!   lo [3:14]   grid position   x[11:14] y[7:10] z[3:6]
//!   lo [15:17]  normal index
//!   lo [18:27]  uv              u[23:27] v[18:22]
//!   lo [28:31]  block type, low nibble
//!   hi [0:11]   block type, high 12 bits
//!   hi [12:31]  foliage tint    r[26:31] g[19:25] b[12:18]
//! ```
//!
//! The block type straddles the word boundary: `(hi[0:11] << 4) | lo[28:31]`.

/// Which of the two packed words a field lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    Hi,
    Lo,
}

/// A contiguous run of bits inside one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    pub name: &'static str,
    pub word: Word,
    pub shift: u32,
    pub width: u32,
}

impl BitField {
    pub const fn new(name: &'static str, word: Word, shift: u32, width: u32) -> Self {
        Self {
            name,
            word,
            shift,
            width,
        }
    }

    /// Largest value the field can hold.
    #[inline]
    pub const fn max_value(self) -> u32 {
        if self.width >= 32 {
            u32::MAX
        } else {
            (1u32 << self.width) - 1
        }
    }

    /// Mask of the field's bits in place.
    #[inline]
    pub const fn mask(self) -> u32 {
        self.max_value() << self.shift
    }

    #[inline]
    pub const fn extract(self, word: u32) -> u32 {
        (word >> self.shift) & self.max_value()
    }

    /// Place `value` into the field. Excess high bits are discarded.
    #[inline]
    pub const fn insert(self, value: u32) -> u32 {
        (value & self.max_value()) << self.shift
    }
}

pub const RESERVED: BitField = BitField::new("reserved", Word::Lo, 0, 3);
pub const GRID_POSITION: BitField = BitField::new("grid_position", Word::Lo, 3, 12);
pub const NORMAL_INDEX: BitField = BitField::new("normal_index", Word::Lo, 15, 3);
pub const UV: BitField = BitField::new("uv", Word::Lo, 18, 10);
pub const BLOCK_TYPE_LOW: BitField = BitField::new("block_type_low", Word::Lo, 28, 4);
pub const BLOCK_TYPE_HIGH: BitField = BitField::new("block_type_high", Word::Hi, 0, 12);
pub const FOLIAGE: BitField = BitField::new("foliage", Word::Hi, 12, 20);

pub const GRID_X: BitField = BitField::new("grid_x", Word::Lo, 11, 4);
pub const GRID_Y: BitField = BitField::new("grid_y", Word::Lo, 7, 4);
pub const GRID_Z: BitField = BitField::new("grid_z", Word::Lo, 3, 4);

pub const TEXEL_U: BitField = BitField::new("texel_u", Word::Lo, 23, 5);
pub const TEXEL_V: BitField = BitField::new("texel_v", Word::Lo, 18, 5);

pub const FOLIAGE_R: BitField = BitField::new("foliage_r", Word::Hi, 26, 6);
pub const FOLIAGE_G: BitField = BitField::new("foliage_g", Word::Hi, 19, 7);
pub const FOLIAGE_B: BitField = BitField::new("foliage_b", Word::Hi, 12, 7);

/// Bits of the block type stored in `lo`.
pub const BLOCK_TYPE_LOW_BITS: u32 = BLOCK_TYPE_LOW.width;

/// Top-level fields of the `lo` word, lowest first.
pub const LO_FIELDS: [BitField; 5] = [RESERVED, GRID_POSITION, NORMAL_INDEX, UV, BLOCK_TYPE_LOW];

/// Top-level fields of the `hi` word, lowest first.
pub const HI_FIELDS: [BitField; 2] = [BLOCK_TYPE_HIGH, FOLIAGE];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tiles(fields: &[BitField], expected: u32) {
        for (i, a) in fields.iter().enumerate() {
            for b in &fields[i + 1..] {
                assert_eq!(
                    a.mask() & b.mask(),
                    0,
                    "{} overlaps {}",
                    a.name,
                    b.name
                );
            }
        }
        let union = fields.iter().fold(0u32, |acc, f| acc | f.mask());
        assert_eq!(union, expected);
    }

    #[test]
    fn test_lo_fields_cover_word_exactly() {
        assert_tiles(&LO_FIELDS, u32::MAX);
        assert!(LO_FIELDS.iter().all(|f| f.word == Word::Lo));
    }

    #[test]
    fn test_hi_fields_cover_word_exactly() {
        assert_tiles(&HI_FIELDS, u32::MAX);
        assert!(HI_FIELDS.iter().all(|f| f.word == Word::Hi));
    }

    #[test]
    fn test_sub_fields_tile_their_parent() {
        assert_tiles(&[GRID_X, GRID_Y, GRID_Z], GRID_POSITION.mask());
        assert_tiles(&[TEXEL_U, TEXEL_V], UV.mask());
        assert_tiles(&[FOLIAGE_R, FOLIAGE_G, FOLIAGE_B], FOLIAGE.mask());
    }

    #[test]
    fn test_widths_sum_to_word() {
        let lo: u32 = LO_FIELDS.iter().map(|f| f.width).sum();
        let hi: u32 = HI_FIELDS.iter().map(|f| f.width).sum();
        assert_eq!(lo, 32);
        assert_eq!(hi, 32);
        assert_eq!(BLOCK_TYPE_LOW.width + BLOCK_TYPE_HIGH.width, 16);
    }

    #[test]
    fn test_extract_insert() {
        assert_eq!(NORMAL_INDEX.insert(5), 5 << 15);
        assert_eq!(NORMAL_INDEX.extract(5 << 15), 5);
        // Values wider than the field are truncated
        assert_eq!(NORMAL_INDEX.insert(9), 1 << 15);
        assert_eq!(FOLIAGE_R.max_value(), 63);
        assert_eq!(FOLIAGE_G.max_value(), 127);
        assert_eq!(BLOCK_TYPE_LOW.mask(), 0xF000_0000);
        assert_eq!(FOLIAGE.mask(), 0xFFFF_F000);
    }
}
