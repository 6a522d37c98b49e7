use md5::Md5;
use sha2::{Digest, Sha256};

use crate::models::ChecksumKind;

/// Hashes one or more strings into the checksum that seeds an icon.
/// The same input always yields the same bytes.
pub fn compute_checksum(inputs: &[&str], kind: ChecksumKind) -> Vec<u8> {
    match kind {
        ChecksumKind::Md5 => digest_all::<Md5>(inputs),
        ChecksumKind::Sha256 => digest_all::<Sha256>(inputs),
    }
}

fn digest_all<D: Digest>(inputs: &[&str]) -> Vec<u8> {
    let mut hasher = D::new();
    for input in inputs {
        hasher.update(input.as_bytes());
    };
    hasher.finalize().to_vec()
}

/// Reads `len` bytes from the checksum, starting over at index 0
/// whenever the checksum is exhausted.
pub fn cycle_bytes(checksum: &[u8], len: usize) -> Vec<u8> {
    checksum.iter().copied().cycle().take(len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_checksum_md5() {
        let checksum = compute_checksum(&["Simple"], ChecksumKind::Md5);
        assert_eq!(hex::encode(&checksum), "1fbb1e3943c2c6c560247ac8f9289780");
        assert_eq!(checksum.len(), 16);
    }

    #[test]
    fn test_compute_checksum_sha256() {
        let checksum = compute_checksum(&["Simple"], ChecksumKind::Sha256);
        assert_eq!(checksum.len(), 32);
        assert_eq!(&checksum[..3], &[63, 238, 149]);
    }

    #[test]
    fn test_compute_checksum_concatenates_inputs() {
        let joined = compute_checksum(&["Sim", "ple"], ChecksumKind::Md5);
        let single = compute_checksum(&["Simple"], ChecksumKind::Md5);
        assert_eq!(joined, single);
    }

    #[test]
    fn test_compute_checksum_is_deterministic() {
        let first = compute_checksum(&["Custom"], ChecksumKind::Md5);
        let second = compute_checksum(&["Custom"], ChecksumKind::Md5);
        assert_eq!(first, second);
        assert_ne!(first, compute_checksum(&["custom"], ChecksumKind::Md5));
    }

    #[test]
    fn test_cycle_bytes_wraps_to_first_byte() {
        let checksum = [1, 2, 3];
        assert_eq!(cycle_bytes(&checksum, 2), vec![1, 2]);
        assert_eq!(cycle_bytes(&checksum, 8), vec![1, 2, 3, 1, 2, 3, 1, 2]);
    }
}
