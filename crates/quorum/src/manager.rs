//! The validator manager: mutable holder of the current snapshot.

use crate::config::QuorumConfig;
use crate::snapshot::ValidatorSetSnapshot;
use ibft_core::{BackendError, Phase, ValidatorBackend};
use ibft_types::{Message, ValidatorId};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

/// Failure modes of [`ValidatorManager::init`].
///
/// The quorum predicates never fail; anomalies there map to `false`.
#[derive(Debug, Error)]
pub enum InitError {
    /// The backend returned a set whose summed voting power is zero.
    #[error("total voting power is zero or less")]
    InvalidVotingPower,

    /// The backend could not produce the validator set.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Long-lived quorum engine for one consensus node.
///
/// The manager holds the validator-set snapshot for the height currently
/// being decided and answers quorum queries from the consensus driver, the
/// message-ingress path, and the round timer. The snapshot cell is the only
/// mutable state: the predicates hold the read lock for the duration of one
/// computation, [`init`](Self::init) takes the write lock only for the
/// replacement itself.
pub struct ValidatorManager {
    backend: Arc<dyn ValidatorBackend>,
    config: QuorumConfig,

    /// Current snapshot; `None` until the first successful `init`.
    snapshot: RwLock<Option<ValidatorSetSnapshot>>,
}

impl ValidatorManager {
    /// Create a manager with the default [`QuorumConfig`].
    pub fn new(backend: Arc<dyn ValidatorBackend>) -> Self {
        Self::with_config(backend, QuorumConfig::default())
    }

    /// Create a manager with explicit tunables.
    pub fn with_config(backend: Arc<dyn ValidatorBackend>, config: QuorumConfig) -> Self {
        Self {
            backend,
            config,
            snapshot: RwLock::new(None),
        }
    }

    /// Install the validator set effective at `height`.
    ///
    /// The backend call happens outside the lock, so a slow backend never
    /// stalls readers. On any failure the previously installed snapshot
    /// stays in place untouched.
    pub fn init(&self, height: u64) -> Result<(), InitError> {
        let voting_powers = self.backend.get_voting_powers(height)?;

        let next =
            ValidatorSetSnapshot::build(voting_powers).ok_or(InitError::InvalidVotingPower)?;

        debug!(
            height,
            validators = next.len(),
            total_power = %next.total_power(),
            quorum_size = %next.quorum_size(),
            rc_min_quorum = %next.rc_min_quorum(),
            "validator set installed"
        );

        *self.snapshot.write() = Some(next);

        Ok(())
    }

    /// Whether `senders` hold the standard quorum.
    ///
    /// `false` when no snapshot is installed. Sender ids outside the
    /// current set contribute zero power; they are not an error.
    pub fn has_quorum(&self, senders: &HashSet<ValidatorId>) -> bool {
        match self.snapshot.read().as_ref() {
            Some(snapshot) => snapshot.has_quorum(senders),
            None => false,
        }
    }

    /// Whether the PREPARE phase has reached quorum.
    ///
    /// The proposer's PREPARE is implicit in its PRE-PREPARE, so the
    /// proposer is counted from the proposal message and must not appear
    /// among the PREPARE authors. A proposer-authored PREPARE refuses
    /// quorum outright rather than risk double-counting.
    pub fn has_prepare_quorum(
        &self,
        phase: Phase,
        proposal: Option<&Message>,
        prepares: &[Message],
    ) -> bool {
        let Some(proposal) = proposal else {
            // A PREPARE can legitimately arrive before the PRE-PREPARE for
            // the same view; only the prepare phase itself requires the
            // proposal to already be present.
            if phase == Phase::Prepare {
                error!(%phase, "prepare quorum requested with no proposal message");
            }

            return false;
        };

        let proposer = &proposal.from;

        let mut senders = HashSet::with_capacity(prepares.len() + 1);
        senders.insert(proposer.clone());

        for message in prepares {
            if message.from == *proposer {
                error!(proposer = %proposer, "proposer is among the prepare signers");

                return false;
            }

            senders.insert(message.from.clone());
        }

        self.has_quorum(&senders)
    }

    /// Whether ROUND-CHANGE messages have reached the quorum required at
    /// `round`.
    ///
    /// Rounds up to and including the configured threshold use the
    /// standard quorum. Beyond it the network is presumed stalled and the
    /// relaxed 30% quorum expedites recovery; the strict boundary is
    /// intentional.
    pub fn has_round_change_quorum(&self, round: u64, senders: &HashSet<ValidatorId>) -> bool {
        if round <= self.config.rc_min_quorum_threshold {
            return self.has_quorum(senders);
        }

        match self.snapshot.read().as_ref() {
            Some(snapshot) => snapshot.meets_rc_min_quorum(senders),
            None => false,
        }
    }
}

impl std::fmt::Debug for ValidatorManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot.read();
        let mut out = f.debug_struct("ValidatorManager");
        out.field("rc_min_quorum_threshold", &self.config.rc_min_quorum_threshold);
        match snapshot.as_ref() {
            Some(snapshot) => out
                .field("validators", &snapshot.len())
                .field("total_power", snapshot.total_power())
                .finish(),
            None => out.field("snapshot", &"uninitialized").finish(),
        }
    }
}
