//! Hashing of flooded cube spaces.
//!
//! Uses FNV-1a for fast, deterministic hashing of the final
//! classification. Not cryptographically secure; used for cheap
//! equality checks across runs (determinism, idempotence).

use tarn_space::CubeSpace;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash the dimensions and every cell's material tag.
///
/// Dimensions are folded in first so that spaces with the same cells in
/// a different shape hash differently.
pub fn resolution_hash(space: &CubeSpace) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, space.length());
    hash = fnv1a_u32(hash, space.width());
    hash = fnv1a_u32(hash, space.height());
    for material in space.as_slice() {
        hash = fnv1a_byte(hash, material.tag());
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarn_core::{CellMaterial, HeightMap};

    fn space(rows: Vec<Vec<u32>>) -> CubeSpace {
        CubeSpace::extrude(&HeightMap::new(rows).unwrap())
    }

    #[test]
    fn identical_spaces_hash_equal() {
        let a = space(vec![vec![1, 2], vec![0, 1]]);
        let b = space(vec![vec![1, 2], vec![0, 1]]);
        assert_eq!(resolution_hash(&a), resolution_hash(&b));
    }

    #[test]
    fn material_change_changes_hash() {
        let a = space(vec![vec![2, 2, 2], vec![2, 0, 2], vec![2, 2, 2]]);
        let mut b = a.clone();
        b.set(1, 1, 0, CellMaterial::Water).unwrap();
        assert_ne!(resolution_hash(&a), resolution_hash(&b));
    }

    #[test]
    fn shape_is_part_of_hash() {
        // Same six board cells, transposed.
        let a = space(vec![vec![1, 1, 1], vec![1, 1, 1]]);
        let b = space(vec![vec![1, 1], vec![1, 1], vec![1, 1]]);
        assert_eq!(a.as_slice(), b.as_slice());
        assert_ne!(resolution_hash(&a), resolution_hash(&b));
    }
}
