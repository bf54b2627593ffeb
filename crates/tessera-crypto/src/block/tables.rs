//! Fixed permutation and substitution tables
//!
//! Positions are 1-indexed and counted from the most significant bit. These
//! values must match bit for bit or existing ciphertexts stop decrypting.

/// Initial permutation applied to every input block
pub const IP: [u8; 8] = [2, 6, 3, 1, 4, 8, 5, 7];

/// Final permutation, the inverse of [`IP`]
pub const FP: [u8; 8] = [4, 1, 3, 5, 7, 2, 8, 6];

/// Key permutation over the 10 key bits
pub const P10: [u8; 10] = [3, 5, 2, 7, 4, 10, 1, 9, 8, 6];

/// Compression selecting 8 of the 10 rotated key bits
pub const P8: [u8; 8] = [6, 3, 7, 4, 8, 5, 10, 9];

/// Expansion of a nibble (held in the high half of a byte) to 8 bits
pub const EP: [u8; 8] = [4, 1, 2, 3, 2, 3, 4, 1];

/// First substitution box, flattened in index order
pub const S0: [u8; 16] = [1, 0, 3, 2, 3, 2, 1, 0, 0, 2, 1, 3, 3, 1, 3, 2];

/// Second substitution box, flattened in index order
pub const S1: [u8; 16] = [0, 1, 2, 3, 2, 0, 1, 3, 3, 0, 1, 0, 2, 1, 0, 3];

/// Permutation of the 4-bit S-box output
pub const P4: [u8; 4] = [2, 4, 3, 1];

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(table: &[u8]) -> bool {
        let mut sorted = table.to_vec();
        sorted.sort_unstable();
        sorted.iter().enumerate().all(|(i, &pos)| usize::from(pos) == i + 1)
    }

    #[test]
    fn bijective_tables_are_permutations() {
        assert!(is_permutation(&IP));
        assert!(is_permutation(&FP));
        assert!(is_permutation(&P10));
        assert!(is_permutation(&P4));
    }

    #[test]
    fn final_permutation_inverts_initial() {
        for (i, &src) in IP.iter().enumerate() {
            assert_eq!(usize::from(FP[usize::from(src) - 1]), i + 1);
        }
    }

    #[test]
    fn sbox_outputs_fit_in_two_bits() {
        assert!(S0.iter().chain(S1.iter()).all(|&v| v < 4));
    }

    #[test]
    fn compression_never_selects_first_two_bits() {
        assert!(P8.iter().all(|&pos| (3..=10).contains(&pos)));
    }
}
