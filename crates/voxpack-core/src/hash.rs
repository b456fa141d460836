//! Grid-position hash driving per-block UV flips.
//!
//! Pure function of the grid position: no seed, no state. The block vertex
//! shader runs the identical algorithm, so results must match bit for bit.

use glam::UVec3;

use crate::constants::{DEFAULT_FLIP_BLOCK_TYPES, FLIP_VARIANTS, HASH_INCREMENT, HASH_MULTIPLIER};

/// Hash a grid position into a well-mixed u32. All arithmetic wraps mod 2^32.
pub fn hash_uvec3(v: UVec3) -> u32 {
    let mut x = v.x.wrapping_mul(HASH_MULTIPLIER).wrapping_add(HASH_INCREMENT);
    let mut y = v.y.wrapping_mul(HASH_MULTIPLIER).wrapping_add(HASH_INCREMENT);
    let mut z = v.z.wrapping_mul(HASH_MULTIPLIER).wrapping_add(HASH_INCREMENT);

    // Each step sees the values updated by the previous one
    x = x.wrapping_add(y.wrapping_mul(z));
    y = y.wrapping_add(z.wrapping_mul(x));
    z = z.wrapping_add(x.wrapping_mul(y));

    x ^= x >> 16;
    y ^= y >> 16;
    z ^= z >> 16;

    x ^ y ^ z
}

/// Block types whose textures get a hashed orientation.
///
/// Kept as explicit configuration: membership is a list of ids, not a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipSet {
    ids: Vec<u16>,
}

impl Default for FlipSet {
    fn default() -> Self {
        Self::from_ids(&DEFAULT_FLIP_BLOCK_TYPES)
    }
}

impl FlipSet {
    /// Build from a list of ids. Duplicates are collapsed.
    pub fn from_ids(ids: &[u16]) -> Self {
        let mut ids = ids.to_vec();
        ids.sort_unstable();
        ids.dedup();
        Self { ids }
    }

    /// A set that never flips.
    pub fn empty() -> Self {
        Self { ids: Vec::new() }
    }

    pub fn contains(&self, block_type: u16) -> bool {
        self.ids.binary_search(&block_type).is_ok()
    }

    pub fn ids(&self) -> &[u16] {
        &self.ids
    }

    /// Flip variant in [0, 3]: bit 0 mirrors U, bit 1 mirrors V.
    /// Always 0 for block types outside the set.
    pub fn variant(&self, block_type: u16, grid: UVec3) -> u8 {
        if self.contains(block_type) {
            (hash_uvec3(grid) % FLIP_VARIANTS) as u8
        } else {
            0
        }
    }
}

/// Flip variant using the built-in flip set {4, 6, 12}.
pub fn uv_flip_variant(block_type: u16, grid: UVec3) -> u8 {
    if DEFAULT_FLIP_BLOCK_TYPES.contains(&block_type) {
        (hash_uvec3(grid) % FLIP_VARIANTS) as u8
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic xorshift stream for sampling grid positions.
    fn positions(count: usize) -> impl Iterator<Item = UVec3> {
        let mut state = 0x2545_F491u32;
        (0..count).map(move |_| {
            let mut next = || {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state
            };
            UVec3::new(next(), next(), next())
        })
    }

    #[test]
    fn test_known_values() {
        assert_eq!(hash_uvec3(UVec3::new(0, 0, 0)), 0xA375_F7D5);
        assert_eq!(hash_uvec3(UVec3::new(1, 2, 3)), 0x0848_48DF);
        assert_eq!(hash_uvec3(UVec3::new(15, 15, 15)), 0xC28C_9BF2);
        assert_eq!(uv_flip_variant(4, UVec3::new(1, 2, 3)), 3);
        assert_eq!(uv_flip_variant(12, UVec3::new(7, 0, 12)), 0);
        assert_eq!(uv_flip_variant(6, UVec3::new(15, 15, 15)), 2);
    }

    #[test]
    fn test_deterministic() {
        let p = UVec3::new(1, 2, 3);
        let a = hash_uvec3(p);
        for _ in 0..10 {
            assert_eq!(hash_uvec3(p), a);
            assert_eq!(uv_flip_variant(4, p), uv_flip_variant(4, p));
        }
    }

    #[test]
    fn test_variant_range_over_random_positions() {
        let mut seen = [false; 4];
        for p in positions(10_000) {
            let v = uv_flip_variant(6, p);
            assert!(v < 4, "variant {v} out of range for {p}");
            seen[v as usize] = true;
        }
        assert_eq!(seen, [true; 4], "every variant should occur");
    }

    #[test]
    fn test_only_flip_set_members_flip() {
        for block in 0u16..=300 {
            let any_nonzero = positions(64).any(|p| uv_flip_variant(block, p) != 0);
            assert_eq!(
                any_nonzero,
                matches!(block, 4 | 6 | 12),
                "block {block} flip membership"
            );
        }
    }

    #[test]
    fn test_distribution_over_chunk() {
        let mut counts = [0u32; 4];
        for x in 0..16 {
            for y in 0..16 {
                for z in 0..16 {
                    counts[uv_flip_variant(4, UVec3::new(x, y, z)) as usize] += 1;
                }
            }
        }
        // 4096 cells, expect ~1024 each
        for (variant, count) in counts.iter().enumerate() {
            assert!(
                (900..1150).contains(count),
                "variant {variant} occurs {count} times"
            );
        }
    }

    #[test]
    fn test_flip_set_matches_default_function() {
        let set = FlipSet::default();
        assert_eq!(set.ids(), &[4, 6, 12]);
        for p in positions(256) {
            for block in [0u16, 4, 5, 6, 12, 13] {
                assert_eq!(set.variant(block, p), uv_flip_variant(block, p));
            }
        }
    }

    #[test]
    fn test_custom_and_empty_sets() {
        let set = FlipSet::from_ids(&[9, 9, 2]);
        assert_eq!(set.ids(), &[2, 9]);
        assert!(set.contains(9));
        assert!(!set.contains(4));
        let p = UVec3::new(1, 2, 3);
        assert_eq!(set.variant(9, p), (hash_uvec3(p) % 4) as u8);
        assert_eq!(FlipSet::empty().variant(4, p), 0);
    }
}
