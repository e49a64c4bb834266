//! Quorum engine configuration.

/// Tunables for the quorum engine.
///
/// These values change consensus decisions, not just local behavior; every
/// node in a network must run identical ones.
#[derive(Debug, Clone)]
pub struct QuorumConfig {
    /// Round index above which ROUND-CHANGE certificates may form with the
    /// relaxed 30% quorum. Rounds up to and including the threshold use
    /// the standard quorum.
    pub rc_min_quorum_threshold: u64,
}

impl Default for QuorumConfig {
    fn default() -> Self {
        Self {
            rc_min_quorum_threshold: 5,
        }
    }
}
