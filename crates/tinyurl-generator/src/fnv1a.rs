use crate::Generator;
use tinyurl_core::ShortId;

/// 64-bit FNV offset basis.
pub const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
/// 64-bit FNV prime.
pub const PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hashes `bytes` with 64-bit FNV-1a (xor, then multiply mod 2^64).
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(OFFSET_BASIS, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(PRIME)
    })
}

/// Raw FNV-1a digest of a long URL, rendered as a base-36 [`ShortId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fnv1aHash(u64);

impl Fnv1aHash {
    pub fn of(long_url: &str) -> Self {
        Self(fnv1a_64(long_url.as_bytes()))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<Fnv1aHash> for ShortId {
    fn from(hash: Fnv1aHash) -> Self {
        ShortId::from_u64(hash.0)
    }
}

/// Deterministic id generator: FNV-1a over the UTF-8 bytes of the URL.
///
/// Distinct URLs can collide on the same id. Nothing here detects that;
/// the create path decides what a collision means.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fnv1aGenerator;

impl Fnv1aGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for Fnv1aGenerator {
    type Output = Fnv1aHash;

    fn generate(&self, long_url: &str) -> Self::Output {
        Fnv1aHash::of(long_url)
    }
}
