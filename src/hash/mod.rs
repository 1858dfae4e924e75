// Identifier digests
// Every allocation decision is read from one 128-bit digest of the identifier.
// Each decision reads its own slice so the streams stay independent.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CATEGORY_SLICE, DIGEST_BYTES, DIGEST_HEX_LEN, PERTURB_CHUNK_WIDTH, TEMPLATE_SLICE,
};

/// Hash function used to digest identifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// MD5, compatible with assignments produced by earlier tooling
    #[default]
    Md5,
    /// BLAKE3 truncated to 128 bits
    Blake3,
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigestAlgorithm::Md5 => write!(f, "md5"),
            DigestAlgorithm::Blake3 => write!(f, "blake3"),
        }
    }
}

/// Lowercase hex digest of an identifier, always `DIGEST_HEX_LEN` chars
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierDigest(String);

impl IdentifierDigest {
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Value used for the weighted category split, reduced into `buckets`.
    pub fn category_roll(&self, buckets: u32) -> u32 {
        (self.slice_value(CATEGORY_SLICE.start, CATEGORY_SLICE.end) % u64::from(buckets)) as u32
    }

    /// Template index inside a category of `len` templates. `len` must be non-zero.
    pub fn template_roll(&self, len: usize) -> usize {
        (self.slice_value(TEMPLATE_SLICE.start, TEMPLATE_SLICE.end) % len as u64) as usize
    }

    /// The `index`-th fixed-width chunk of the digest.
    pub fn chunk(&self, index: usize) -> u16 {
        let start = index * PERTURB_CHUNK_WIDTH;
        self.slice_value(start, start + PERTURB_CHUNK_WIDTH) as u16
    }

    fn slice_value(&self, start: usize, end: usize) -> u64 {
        // Construction guarantees DIGEST_HEX_LEN hex chars
        u64::from_str_radix(&self.0[start..end], 16).unwrap_or(0)
    }
}

/// Digest an identifier with the chosen algorithm
pub fn digest_identifier(algorithm: DigestAlgorithm, identifier: &str) -> IdentifierDigest {
    let hex = match algorithm {
        DigestAlgorithm::Md5 => format!("{:x}", md5::compute(identifier.as_bytes())),
        DigestAlgorithm::Blake3 => {
            let hash = blake3::hash(identifier.as_bytes());
            hash.as_bytes()[..DIGEST_BYTES]
                .iter()
                .map(|b| format!("{:02x}", b))
                .collect()
        }
    };
    debug_assert_eq!(hex.len(), DIGEST_HEX_LEN);
    IdentifierDigest(hex)
}
