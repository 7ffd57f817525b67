//! The fixed-output SHA-3 digests.

use crate::Strategy;

/// Domain-separation suffix for the fixed-output SHA-3 digests: the 01
/// suffix bits plus the first bit of the pad10*1 padding.
pub const SHA3_DELIMITER: u8 = 0x06;

/// Returns the SHA3-256 digest of `msg`.
pub fn sha3_256(msg: &[u8]) -> [u8; 32] {
    sha3_256_with(Strategy::default(), msg)
}

/// Returns the SHA3-256 digest of `msg`, computed with an explicit
/// permutation strategy.
pub fn sha3_256_with(strategy: Strategy, msg: &[u8]) -> [u8; 32] {
    let mut md = [0; 32];
    strategy.oneshot(msg, &mut md, SHA3_DELIMITER);
    md
}

/// Returns the SHA3-512 digest of `msg`.
pub fn sha3_512(msg: &[u8]) -> [u8; 64] {
    sha3_512_with(Strategy::default(), msg)
}

/// Returns the SHA3-512 digest of `msg`, computed with an explicit
/// permutation strategy.
pub fn sha3_512_with(strategy: Strategy, msg: &[u8]) -> [u8; 64] {
    let mut md = [0; 64];
    strategy.oneshot(msg, &mut md, SHA3_DELIMITER);
    md
}
