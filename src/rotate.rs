use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cycles::rotate_by_cycles;
use crate::error::Error;
use crate::mover::{ElementMover, SliceMover};
use crate::normalize::normalize;
use crate::reversal::rotate_by_reversal;

/// Algorithm used to rotate a slice.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Three in-place reversals. Needs swap access only.
    #[default]
    Reversal,
    /// Juggling over `gcd(d, n)` cycles through an [`ElementMover`].
    Cycles,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::Reversal => write!(f, "reversal"),
            Strategy::Cycles => write!(f, "cycles"),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reversal" => Ok(Strategy::Reversal),
            "cycles" => Ok(Strategy::Cycles),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

/// Rotate the first `n` elements of `seq` left by `d` (right when `d < 0`).
pub fn rotate<T>(seq: &mut [T], n: usize, d: isize) {
    tracing::trace!(
        n,
        d,
        normalized = normalize(n, d),
        strategy = %Strategy::Reversal,
        "rotate"
    );

    rotate_by_reversal(seq, n, d);
}

/// Like [`rotate`], with an explicit choice of algorithm.
pub fn rotate_using<T: Clone>(
    seq: &mut [T],
    n: usize,
    d: isize,
    strategy: Strategy,
) {
    tracing::trace!(n, d, normalized = normalize(n, d), %strategy, "rotate");

    match strategy {
        Strategy::Reversal => rotate_by_reversal(seq, n, d),
        Strategy::Cycles => {
            debug_assert!(n <= seq.len(), "length {n} exceeds slice");
            rotate_by_cycles(&mut seq[..n], n, d, &mut SliceMover::new());
        }
    }
}

/// Rotate `n` elements of arbitrary storage, moving every element through
/// `mover`. Always uses the cyclic strategy.
pub fn rotate_with_mover<S, M>(seq: &mut S, n: usize, d: isize, mover: &mut M)
where
    S: ?Sized,
    M: ElementMover<S> + ?Sized,
{
    tracing::trace!(
        n,
        d,
        normalized = normalize(n, d),
        strategy = %Strategy::Cycles,
        "rotate"
    );

    rotate_by_cycles(seq, n, d, mover);
}

/// Rotate `seq[offset..offset + len]`, checking the range first.
pub fn rotate_range<T: Clone>(
    seq: &mut [T],
    offset: usize,
    len: usize,
    d: isize,
    strategy: Strategy,
) -> Result<(), Error> {
    let end = offset
        .checked_add(len)
        .filter(|&end| end <= seq.len())
        .ok_or(Error::RangeOutOfBounds {
            offset,
            len,
            total: seq.len(),
        })?;

    rotate_using(&mut seq[offset..end], len, d, strategy);

    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::{any, prop, prop_assert_eq, proptest};
    use test_case::test_case;

    use super::*;

    const ONE_TO_EIGHT: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

    #[test_case(Strategy::Reversal ; "reversal")]
    #[test_case(Strategy::Cycles ; "cycles")]
    fn concrete_cases(strategy: Strategy) {
        let mut s = ONE_TO_EIGHT;

        rotate_using(&mut s, 8, -1, strategy);
        similar_asserts::assert_eq!(s, [8, 1, 2, 3, 4, 5, 6, 7]);
        rotate_using(&mut s, 8, -1, strategy);
        similar_asserts::assert_eq!(s, [7, 8, 1, 2, 3, 4, 5, 6]);
        rotate_using(&mut s, 8, -6, strategy);
        similar_asserts::assert_eq!(s, ONE_TO_EIGHT);
        rotate_using(&mut s, 8, 1, strategy);
        similar_asserts::assert_eq!(s, [2, 3, 4, 5, 6, 7, 8, 1]);
        rotate_using(&mut s, 8, 1, strategy);
        similar_asserts::assert_eq!(s, [3, 4, 5, 6, 7, 8, 1, 2]);
        rotate_using(&mut s, 8, 6, strategy);
        similar_asserts::assert_eq!(s, ONE_TO_EIGHT);
        rotate_using(&mut s, 8, 24, strategy);
        similar_asserts::assert_eq!(s, ONE_TO_EIGHT);
        rotate_using(&mut s, 8, 9, strategy);
        similar_asserts::assert_eq!(s, [2, 3, 4, 5, 6, 7, 8, 1]);
    }

    #[test_case(Strategy::Reversal ; "reversal")]
    #[test_case(Strategy::Cycles ; "cycles")]
    fn inner_range(strategy: Strategy) {
        let mut s = ONE_TO_EIGHT;

        rotate_range(&mut s, 1, 6, 1, strategy).unwrap();

        similar_asserts::assert_eq!(s, [1, 3, 4, 5, 6, 7, 2, 8]);
    }

    #[test_case(0, 9 ; "past the end")]
    #[test_case(7, 2 ; "straddles the end")]
    #[test_case(usize::MAX, 2 ; "overflowing offset")]
    fn range_out_of_bounds(offset: usize, len: usize) {
        let mut s = ONE_TO_EIGHT;

        let err = rotate_range(&mut s, offset, len, 1, Strategy::Cycles)
            .unwrap_err();

        assert_eq!(
            err,
            Error::RangeOutOfBounds {
                offset,
                len,
                total: 8
            }
        );
        assert_eq!(s, ONE_TO_EIGHT);
    }

    #[test]
    fn default_rotate_is_reversal() {
        let mut s = ONE_TO_EIGHT;

        rotate(&mut s, 8, 3);

        assert_eq!(s, [4, 5, 6, 7, 8, 1, 2, 3]);
    }

    #[test]
    fn rotate_with_slice_mover() {
        let mut s = ONE_TO_EIGHT;

        rotate_with_mover(&mut s[..], 8, -3, &mut SliceMover::new());

        assert_eq!(s, [6, 7, 8, 1, 2, 3, 4, 5]);
    }

    #[test_case("reversal" => Ok(Strategy::Reversal))]
    #[test_case("cycles" => Ok(Strategy::Cycles))]
    #[test_case("juggle" => Err(Error::UnknownStrategy("juggle".to_string())))]
    fn parse_strategy(s: &str) -> Result<Strategy, Error> {
        s.parse()
    }

    #[test]
    fn strategy_serde() {
        let json = serde_json::to_string(&Strategy::Cycles).unwrap();
        assert_eq!(json, "\"cycles\"".to_string());

        let parsed: Strategy = serde_json::from_str("\"reversal\"").unwrap();
        assert_eq!(parsed, Strategy::Reversal);
        assert_eq!(parsed.to_string(), "reversal".to_string());
    }

    fn rotated(s: &[i32], d: isize, strategy: Strategy) -> Vec<i32> {
        let mut s = s.to_vec();
        let n = s.len();
        rotate_using(&mut s, n, d, strategy);
        s
    }

    proptest! {
        #[test]
        fn strategies_agree(
            s in prop::collection::vec(any::<i32>(), 0..64),
            d in -1000_isize..1000,
        ) {
            prop_assert_eq!(
                rotated(&s, d, Strategy::Reversal),
                rotated(&s, d, Strategy::Cycles)
            );
        }

        #[test]
        fn matches_std_rotate(
            s in prop::collection::vec(any::<i32>(), 1..64),
            d in -1000_isize..1000,
        ) {
            let mut expected = s.clone();
            expected.rotate_left(normalize(s.len(), d));

            prop_assert_eq!(rotated(&s, d, Strategy::Cycles), expected);
        }

        #[test]
        fn opposite_rotation_restores(
            s in prop::collection::vec(any::<i32>(), 0..64),
            d in -1000_isize..1000,
        ) {
            let there = rotated(&s, d, Strategy::Cycles);
            let back = rotated(&there, -d, Strategy::Reversal);

            prop_assert_eq!(back, s);
        }

        #[test]
        fn modulo_invariance(
            s in prop::collection::vec(any::<i32>(), 1..64),
            d in -1000_isize..1000,
            k in -20_isize..20,
        ) {
            let n = s.len() as isize;

            prop_assert_eq!(
                rotated(&s, d, Strategy::Cycles),
                rotated(&s, d + k * n, Strategy::Cycles)
            );
        }

        #[test]
        fn short_sequences_are_untouched(
            s in prop::collection::vec(any::<i32>(), 0..2),
            d in any::<isize>(),
        ) {
            prop_assert_eq!(&rotated(&s, d, Strategy::Reversal), &s);
            prop_assert_eq!(&rotated(&s, d, Strategy::Cycles), &s);
        }
    }
}
