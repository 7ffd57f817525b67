#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

//! A collection of Keccak-f\[1600\] permutation strategies and the FIPS 202
//! SHA-3 digests built on them.
//!
//! The six strategies compute the same permutation and produce identical
//! digests; they differ in code size, memory traffic, and instruction mix:
//!
//! 1. [`Reference`]: loop-based θ, ρ∘π, χ, and ι steps with tabulated
//!    constants.
//! 2. [`Compact`]: the reference structure with the large tables replaced by
//!    a one-byte-per-round constant encoding and ρ offsets computed on the
//!    fly, for storage-constrained environments.
//! 3. [`InPlaceUnrolled`]: all 25 lane updates expanded into straight-line
//!    code, mutating the state in place.
//! 4. [`IntermediateUnrolled`]: each round reads from one state buffer and
//!    writes to another, fusing all four steps into one pass per plane and
//!    keeping each access window within six lanes.
//! 5. [`EarlyParity`]: the intermediate form carrying the column-parity
//!    vector across rounds instead of recomputing it.
//! 6. [`LaneComplementing`]: the intermediate form holding six lanes
//!    inverted, cutting the NOTs in χ from 25 per round to 6.
//!
//! One-shot digests are exposed as [`sha3_256`] and [`sha3_512`], which use
//! the reference strategy, and as [`sha3_256_with`]/[`sha3_512_with`], which
//! take an explicit [`Strategy`]. The generic sponge is available in
//! [`sponge`] for other delimiters and output lengths.

mod compact;
mod complement;
mod digest;
mod early_parity;
mod fuzzing;
mod inplace;
mod intermediate;
mod reference;
pub mod sponge;
mod state;

pub use crate::compact::Compact;
pub use crate::complement::LaneComplementing;
pub use crate::digest::{sha3_256, sha3_256_with, sha3_512, sha3_512_with, SHA3_DELIMITER};
pub use crate::early_parity::EarlyParity;
pub use crate::inplace::InPlaceUnrolled;
pub use crate::intermediate::IntermediateUnrolled;
pub use crate::reference::Reference;
pub use crate::state::State;

/// A strategy for applying the 24 rounds of Keccak-f\[1600\] to the lane view
/// of a [`State`].
///
/// Strategies are pure arithmetic over the 25 lanes and cannot fail. Any two
/// of them permute a state to bitwise-identical lanes, except that a strategy
/// with [`COMPLEMENTED`](Permutation::COMPLEMENTED) set expects and produces
/// lanes 1, 2, 8, 12, 17, and 20 inverted; the sponge applies the matching
/// mask at the state boundary.
pub trait Permutation {
    /// Whether the strategy keeps the complemented lane set inverted between
    /// calls. The sponge then pre-inverts those lanes when the state is
    /// created and re-inverts the bytes it squeezes out of them.
    const COMPLEMENTED: bool = false;

    /// Apply all 24 rounds to `lanes` in place.
    fn permute(lanes: &mut [u64; 25]);
}

/// A runtime-selectable permutation strategy.
///
/// Each variant dispatches to the [`Permutation`] type of the same name.
/// Every digest call is self-contained, so distinct calls may use distinct
/// strategies, including concurrently.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Strategy {
    /// [`Reference`], the default.
    #[default]
    Reference,
    /// [`Compact`].
    Compact,
    /// [`InPlaceUnrolled`].
    InPlaceUnrolled,
    /// [`IntermediateUnrolled`].
    IntermediateUnrolled,
    /// [`EarlyParity`].
    EarlyParity,
    /// [`LaneComplementing`].
    LaneComplementing,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 6] = [
        Strategy::Reference,
        Strategy::Compact,
        Strategy::InPlaceUnrolled,
        Strategy::IntermediateUnrolled,
        Strategy::EarlyParity,
        Strategy::LaneComplementing,
    ];

    /// Whether the strategy keeps the complemented lane set inverted between
    /// permutations.
    pub fn complemented(self) -> bool {
        matches!(self, Strategy::LaneComplementing)
    }

    /// One-shot sponge with this strategy: absorb `msg`, pad with `delim`,
    /// and squeeze `md.len()` bytes into `md`.
    pub fn oneshot(self, msg: &[u8], md: &mut [u8], delim: u8) {
        match self {
            Strategy::Reference => sponge::oneshot::<Reference>(msg, md, delim),
            Strategy::Compact => sponge::oneshot::<Compact>(msg, md, delim),
            Strategy::InPlaceUnrolled => sponge::oneshot::<InPlaceUnrolled>(msg, md, delim),
            Strategy::IntermediateUnrolled => {
                sponge::oneshot::<IntermediateUnrolled>(msg, md, delim)
            }
            Strategy::EarlyParity => sponge::oneshot::<EarlyParity>(msg, md, delim),
            Strategy::LaneComplementing => sponge::oneshot::<LaneComplementing>(msg, md, delim),
        }
    }
}
