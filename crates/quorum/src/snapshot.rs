//! Immutable per-height validator-set snapshot.

use ibft_types::{
    quorum_threshold, round_change_min_quorum, total_voting_power, ValidatorId, VotingPower,
};
use std::collections::HashMap;

/// Validator weights effective at one height, with the thresholds derived
/// from them.
///
/// A snapshot is built once and never mutated; the manager replaces the
/// whole value when the height advances. Any observer of a snapshot
/// therefore sees weights and thresholds belonging to the same height.
#[derive(Debug, Clone)]
pub struct ValidatorSetSnapshot {
    voting_powers: HashMap<ValidatorId, VotingPower>,
    total_power: VotingPower,
    quorum_size: VotingPower,
    rc_min_quorum: VotingPower,
}

impl ValidatorSetSnapshot {
    /// Build a snapshot from the weights the backend returned.
    ///
    /// Returns `None` when the summed voting power is zero, covering both
    /// an empty map and all-zero weights; such a set can never reach any
    /// quorum and must not replace a working one.
    pub fn build(voting_powers: HashMap<ValidatorId, VotingPower>) -> Option<Self> {
        let total_power = total_voting_power(voting_powers.values());
        if total_power.is_zero() {
            return None;
        }

        let quorum_size = quorum_threshold(&total_power);
        let rc_min_quorum = round_change_min_quorum(&total_power);

        Some(Self {
            voting_powers,
            total_power,
            quorum_size,
            rc_min_quorum,
        })
    }

    /// Total voting power of the set.
    pub fn total_power(&self) -> &VotingPower {
        &self.total_power
    }

    /// Standard quorum: strictly more than two thirds of the total.
    pub fn quorum_size(&self) -> &VotingPower {
        &self.quorum_size
    }

    /// Relaxed round-change quorum: 30% of the total, floored.
    pub fn rc_min_quorum(&self) -> &VotingPower {
        &self.rc_min_quorum
    }

    /// Number of validators in the set.
    pub fn len(&self) -> usize {
        self.voting_powers.len()
    }

    /// Always `false`: an empty set never builds.
    pub fn is_empty(&self) -> bool {
        self.voting_powers.is_empty()
    }

    /// Voting power of one validator, if it is in the set.
    pub fn voting_power(&self, validator: &ValidatorId) -> Option<&VotingPower> {
        self.voting_powers.get(validator)
    }

    /// Sum the power held by `senders`.
    ///
    /// Ids that are not in the set contribute zero; an unknown sender is
    /// not an error at this layer.
    pub fn accumulated_power<'a, I>(&self, senders: I) -> VotingPower
    where
        I: IntoIterator<Item = &'a ValidatorId>,
    {
        total_voting_power(
            senders
                .into_iter()
                .filter_map(|sender| self.voting_powers.get(sender)),
        )
    }

    /// Whether `senders` hold the standard quorum.
    pub fn has_quorum<'a, I>(&self, senders: I) -> bool
    where
        I: IntoIterator<Item = &'a ValidatorId>,
    {
        self.accumulated_power(senders) >= self.quorum_size
    }

    /// Whether `senders` hold the relaxed round-change quorum.
    pub fn meets_rc_min_quorum<'a, I>(&self, senders: I) -> bool
    where
        I: IntoIterator<Item = &'a ValidatorId>,
    {
        self.accumulated_power(senders) >= self.rc_min_quorum
    }
}
