#![cfg(all(test, feature = "std"))]

use proptest::collection::vec;
use proptest::prelude::*;
use sha3::{Digest, Sha3_256, Sha3_512};

use crate::{sha3_256_with, sha3_512_with, Permutation, Reference, Strategy};

proptest! {
    #[test]
    fn sha3_256_strategies_agree(msg in vec(any::<u8>(), 0..600)) {
        let expected = Sha3_256::digest(&msg);
        for strategy in Strategy::ALL {
            let actual = sha3_256_with(strategy, &msg);
            prop_assert_eq!(actual.as_slice(), expected.as_slice());
        }
    }

    #[test]
    fn sha3_512_strategies_agree(msg in vec(any::<u8>(), 0..600)) {
        let expected = Sha3_512::digest(&msg);
        for strategy in Strategy::ALL {
            let actual = sha3_512_with(strategy, &msg);
            prop_assert_eq!(actual.as_slice(), expected.as_slice());
        }
    }

    #[test]
    fn permutation_separates_states(a in any::<[u64; 25]>(), b in any::<[u64; 25]>()) {
        // A bijection maps distinct states to distinct states.
        prop_assume!(a != b);
        let (mut pa, mut pb) = (a, b);
        Reference::permute(&mut pa);
        Reference::permute(&mut pb);
        prop_assert_ne!(pa, pb);
    }
}
