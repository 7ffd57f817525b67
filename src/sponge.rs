//! The sponge construction over Keccak-f\[1600\].
//!
//! The rate/capacity split is derived from the output length: squeezing `L`
//! bytes keeps `2·L` bytes of capacity and absorbs through the remaining
//! `200 − 2·L`. Padding is pad10\*1 behind a domain-separation delimiter.
//! The fixed-output SHA-3 digests pass `0x06`; other delimiters (e.g. the
//! SHAKE `0x1F`) work through the same entry point.

use crate::complement::COMPLEMENTED_LANES;
use crate::state::{State, LANE_BYTES, STATE_BYTES};
use crate::Permutation;

/// One-shot sponge: absorb `msg`, pad with `delim`, and squeeze `md.len()`
/// bytes into `md` using the permutation strategy `P`.
///
/// The capacity is twice the output length, so `md` must be non-empty and
/// shorter than 100 bytes. Outputs longer than the rate squeeze multiple
/// blocks.
pub fn oneshot<P: Permutation>(msg: &[u8], md: &mut [u8], delim: u8) {
    let mut state = State::new();
    if P::COMPLEMENTED {
        state.complement();
    }
    absorb::<P>(&mut state, msg, md.len(), delim);
    squeeze::<P>(&mut state, md);
}

fn rate_for(md_len: usize) -> usize {
    let capacity_bytes = 2 * md_len;
    debug_assert!(
        capacity_bytes > 0 && capacity_bytes < STATE_BYTES,
        "output length must be in 1..100 bytes"
    );
    STATE_BYTES - capacity_bytes
}

fn absorb<P: Permutation>(state: &mut State, msg: &[u8], md_len: usize, delim: u8) {
    let rate_bytes = rate_for(md_len);

    // Whole blocks: XOR into the rate portion of the state and permute.
    let mut blocks = msg.chunks_exact(rate_bytes);
    for block in blocks.by_ref() {
        xor_bytes(&mut state.bytes_mut()[..rate_bytes], block);
        state.permute::<P>();
    }

    // Remaining bytes advance a block offset; a filled block permutes the
    // state and resets it.
    let mut block_off = 0;
    for &byte in blocks.remainder() {
        state.bytes_mut()[block_off] ^= byte;
        block_off += 1;
        if block_off == rate_bytes {
            state.permute::<P>();
            block_off = 0;
        }
    }

    // pad10*1 behind the delimiter. A delimiter whose high bit sits on the
    // last rate byte already fills the block, so the closing padding bit
    // needs a fresh one.
    state.bytes_mut()[block_off] ^= delim;
    if delim & 0x80 != 0 && block_off == rate_bytes - 1 {
        state.permute::<P>();
    }
    state.bytes_mut()[rate_bytes - 1] ^= 0x80;
    state.permute::<P>();
}

fn squeeze<P: Permutation>(state: &mut State, mut md: &mut [u8]) {
    let rate_bytes = rate_for(md.len());

    while !md.is_empty() {
        let block_len = md.len().min(rate_bytes);
        let (block, rest) = md.split_at_mut(block_len);
        block.copy_from_slice(&state.bytes()[..block_len]);
        if P::COMPLEMENTED {
            uncomplement(block);
        }
        md = rest;
        if !md.is_empty() {
            state.permute::<P>();
        }
    }
}

/// Re-invert output bytes that were read out of complemented lanes.
fn uncomplement(block: &mut [u8]) {
    for lane in COMPLEMENTED_LANES {
        let start = lane * LANE_BYTES;
        if start >= block.len() {
            break;
        }
        let end = block.len().min(start + LANE_BYTES);
        for byte in &mut block[start..end] {
            *byte = !*byte;
        }
    }
}

fn xor_bytes(dst: &mut [u8], src: &[u8]) {
    dst.iter_mut().zip(src).for_each(|(d, s)| *d ^= s);
}
