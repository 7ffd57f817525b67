//! The 1600-bit Keccak state.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::complement::COMPLEMENTED_LANES;
use crate::Permutation;

/// Bytes in the state.
pub(crate) const STATE_BYTES: usize = 200;
/// Lanes in the state.
pub(crate) const NUM_LANES: usize = 25;
/// Bytes per lane.
pub(crate) const LANE_BYTES: usize = 8;

/// The Keccak-f\[1600\] state: 25 lanes of 64 bits, stored as 200 bytes in
/// little-endian lane order.
///
/// Byte `8k + j` holds bits `8j..8j + 8` of lane `k`, so XORing message bytes
/// at arbitrary offsets lands on the same bits the lane-wise permutation code
/// sees. The lane view is materialized with explicit little-endian reads and
/// writes, so the mapping holds on big-endian hosts as well.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
#[repr(align(8))]
pub struct State([u8; STATE_BYTES]);

impl Default for State {
    fn default() -> Self {
        State([0; STATE_BYTES])
    }
}

impl State {
    /// Returns a zero-filled state.
    pub fn new() -> Self {
        State::default()
    }

    /// The byte view of the state.
    pub fn bytes(&self) -> &[u8; STATE_BYTES] {
        &self.0
    }

    /// The mutable byte view of the state.
    pub fn bytes_mut(&mut self) -> &mut [u8; STATE_BYTES] {
        &mut self.0
    }

    /// Applies the permutation strategy `P` to the lane view of the state.
    #[inline(always)]
    pub fn permute<P: Permutation>(&mut self) {
        let mut lanes = [0u64; NUM_LANES];
        LittleEndian::read_u64_into(&self.0, &mut lanes);
        P::permute(&mut lanes);
        LittleEndian::write_u64_into(&lanes, &mut self.0);
    }

    /// Inverts the lanes a lane-complementing strategy keeps complemented.
    ///
    /// Masking, permuting with such a strategy, and masking again matches a
    /// plain strategy's permutation exactly.
    pub(crate) fn complement(&mut self) {
        for lane in COMPLEMENTED_LANES {
            for byte in &mut self.0[lane * LANE_BYTES..(lane + 1) * LANE_BYTES] {
                *byte = !*byte;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LaneComplementing, Reference};

    #[test]
    fn byte_and_lane_views_alias() {
        let mut state = State::new();
        state.bytes_mut()[8] = 0x01;
        state.bytes_mut()[15] = 0x80;

        let mut lanes = [0u64; NUM_LANES];
        LittleEndian::read_u64_into(state.bytes(), &mut lanes);
        assert_eq!(lanes[1], 0x8000_0000_0000_0001);
    }

    #[test]
    fn complement_mask_round_trips_the_permutation() {
        let mut plain = State::new();
        plain.bytes_mut()[0] = 0x5a;
        plain.bytes_mut()[77] = 0xc3;
        let mut masked = plain.clone();

        plain.permute::<Reference>();

        masked.complement();
        masked.permute::<LaneComplementing>();
        masked.complement();

        assert_eq!(plain.bytes(), masked.bytes());
    }
}
