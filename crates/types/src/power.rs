//! Voting power and quorum arithmetic.
//!
//! All quorum arithmetic operates on non-negative arbitrary-precision
//! integers with floor division. Voting powers routinely reach 1e9 and
//! beyond on weighted networks, so nothing here may assume machine-word
//! width.
//!
//! The two thresholds are consensus-critical: every node must derive the
//! same integers from the same validator set, or the network forks.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

/// Non-negative, arbitrary-precision voting power.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VotingPower(BigUint);

impl VotingPower {
    /// Zero power.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Whether this power is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The underlying integer.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl From<u64> for VotingPower {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u128> for VotingPower {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for VotingPower {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl AddAssign<&VotingPower> for VotingPower {
    fn add_assign(&mut self, rhs: &VotingPower) {
        self.0 += &rhs.0;
    }
}

impl fmt::Display for VotingPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Standard quorum: `(total * 2) / 3 + 1`.
///
/// Floor division makes this the smallest integer strictly greater than
/// two thirds of `total`, for every `total >= 1`.
pub fn quorum_threshold(total: &VotingPower) -> VotingPower {
    VotingPower(&total.0 * 2u32 / 3u32 + 1u32)
}

/// Relaxed round-change quorum: `(total * 30) / 100`, floored.
pub fn round_change_min_quorum(total: &VotingPower) -> VotingPower {
    VotingPower(&total.0 * 30u32 / 100u32)
}

/// Sum a collection of voting powers. An empty collection sums to zero.
pub fn total_voting_power<'a, I>(powers: I) -> VotingPower
where
    I: IntoIterator<Item = &'a VotingPower>,
{
    let mut total = VotingPower::zero();
    for power in powers {
        total += power;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn power(value: u64) -> VotingPower {
        VotingPower::from(value)
    }

    #[test]
    fn test_quorum_threshold_table() {
        let cases = [
            (1u64, 1u64),
            (2, 2),
            (3, 3),
            (4, 3),
            (6, 5),
            (9, 7),
            (10, 7),
            (21, 15),
            (60, 41),
            (90, 61),
        ];

        for (total, expected) in cases {
            assert_eq!(
                quorum_threshold(&power(total)),
                power(expected),
                "total {}",
                total
            );
        }
    }

    #[test]
    fn test_round_change_min_quorum_table() {
        let cases = [
            (0u64, 0u64),
            (1, 0),
            (3, 0),
            (9, 2),
            (10, 3),
            (115, 34),
            (1085, 325),
            (12763, 3828),
            (999_999_999, 299_999_999),
        ];

        for (total, expected) in cases {
            assert_eq!(
                round_change_min_quorum(&power(total)),
                power(expected),
                "total {}",
                total
            );
        }
    }

    /// quorum is strictly more than two thirds, at most the total, and the
    /// relaxed quorum always sits strictly below it.
    #[test]
    fn test_threshold_invariants() {
        for total in 1u64..=2000 {
            let total = power(total);
            let quorum = quorum_threshold(&total);
            let rc_min = round_change_min_quorum(&total);

            assert!(quorum <= total, "quorum must not exceed total {}", total);
            assert!(
                quorum.as_biguint() * 3u32 > total.as_biguint() * 2u32,
                "quorum {} is not more than two thirds of {}",
                quorum,
                total
            );
            assert!(rc_min <= total, "rc quorum exceeds total {}", total);
            assert!(
                rc_min < quorum,
                "rc quorum {} not below standard quorum {} at total {}",
                rc_min,
                quorum,
                total
            );
        }
    }

    #[test]
    fn test_thresholds_beyond_machine_words() {
        // 10^24 does not fit in u64; 30% of it is exact, the quorum floors.
        let total = VotingPower::from(BigUint::parse_bytes(b"1000000000000000000000000", 10).unwrap());

        assert_eq!(
            quorum_threshold(&total),
            VotingPower::from(BigUint::parse_bytes(b"666666666666666666666667", 10).unwrap())
        );
        assert_eq!(
            round_change_min_quorum(&total),
            VotingPower::from(BigUint::parse_bytes(b"300000000000000000000000", 10).unwrap())
        );
    }

    #[test]
    fn test_total_voting_power_sums() {
        assert_eq!(total_voting_power(std::iter::empty()), VotingPower::zero());

        let powers = [power(2), power(7), power(7), power(5)];
        assert_eq!(total_voting_power(powers.iter()), power(21));
    }

    #[test]
    fn test_total_voting_power_beyond_u128() {
        let powers = [
            VotingPower::from(u128::MAX),
            VotingPower::from(u128::MAX),
            VotingPower::from(1u64),
        ];
        let expected = VotingPower::from(BigUint::from(u128::MAX) * 2u32 + 1u32);
        assert_eq!(total_voting_power(powers.iter()), expected);
    }
}
