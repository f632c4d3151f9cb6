use rewire_core::Matrix;
use sha2::{Digest, Sha256};

/// Computes the canonical SHA-256 digest of an adjacency matrix.
///
/// The digest covers the shape and the IEEE-754 bit pattern of every entry, so
/// equal digests mean byte-identical matrices (`0.0` and `-0.0` differ).
pub fn canonical_hash(matrix: &Matrix<f64>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"rewire-matrix:v1");
    hasher.update((matrix.rows() as u64).to_le_bytes());
    hasher.update((matrix.cols() as u64).to_le_bytes());
    for value in matrix.as_slice() {
        hasher.update(value.to_bits().to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}
