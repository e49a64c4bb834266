//! Backend contract the outer node implements.

use ibft_types::{Message, ValidatorId, View, VotingPower};
use std::collections::HashMap;
use thiserror::Error;

/// Opaque failure surfaced by a backend implementation.
///
/// The engine never inspects backend failures; they are wrapped here and
/// propagated verbatim to the caller, which also makes a cancelled backend
/// call surface as an ordinary error without touching engine state.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct BackendError(Box<dyn std::error::Error + Send + Sync + 'static>);

impl BackendError {
    /// Wrap an arbitrary error value.
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(source))
    }

    /// Build a failure from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self(message.into().into())
    }
}

impl From<Box<dyn std::error::Error + Send + Sync + 'static>> for BackendError {
    fn from(source: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
        Self(source)
    }
}

/// Constructs the signed messages this node emits.
pub trait MessageConstructor {
    /// Build a PRE-PREPARE message carrying `proposal` for `view`.
    fn build_pre_prepare_message(&self, proposal: &[u8], view: View) -> Message;

    /// Build a PREPARE message for `view`.
    fn build_prepare_message(&self, proposal: &[u8], view: View) -> Message;

    /// Build a COMMIT message for `view`.
    fn build_commit_message(&self, proposal: &[u8], view: View) -> Message;

    /// Build a ROUND-CHANGE message for the given height and round.
    fn build_round_change_message(&self, height: u64, round: u64) -> Message;
}

/// The one capability the quorum engine consumes.
///
/// Implementations must return the exact validator set effective at
/// `height`. The engine treats the returned map as a pure value; an empty
/// map is permitted here and rejected by the engine.
pub trait ValidatorBackend: Send + Sync {
    /// Validator addresses and their voting powers at `height`.
    fn get_voting_powers(
        &self,
        height: u64,
    ) -> Result<HashMap<ValidatorId, VotingPower>, BackendError>;
}

/// The full contract between the consensus core and the outer node.
///
/// Everything the consensus process needs that involves blocks, signatures,
/// or persistence lives behind this trait.
pub trait Backend: MessageConstructor + ValidatorBackend {
    /// Whether the proposed block is a well-formed child of the current chain.
    fn is_valid_block(&self, block: &[u8]) -> bool;

    /// Whether the message signature matches the claimed sender.
    fn is_valid_sender(&self, msg: &Message) -> bool;

    /// Whether `id` is the proposer for the given height and round.
    fn is_proposer(&self, id: &ValidatorId, height: u64, round: u64) -> bool;

    /// Produce a new block proposal for `block_number`.
    fn build_proposal(&self, block_number: u64) -> Result<Vec<u8>, BackendError>;

    /// Whether `hash` binds to `proposal`.
    fn verify_proposal_hash(&self, proposal: &[u8], hash: &[u8]) -> Result<(), BackendError>;

    /// Whether `seal` is a valid committed seal over `proposal`.
    fn is_valid_committed_seal(&self, proposal: &[u8], seal: &[u8]) -> bool;

    /// Finalize and persist the decided block.
    fn insert_block(&self, proposal: &[u8], committed_seals: &[Vec<u8>]) -> Result<(), BackendError>;

    /// This node's validator id.
    fn id(&self) -> ValidatorId;

    /// Size of the validator set at `block_number`.
    fn validator_count(&self, block_number: u64) -> u64;

    /// Maximum tolerated faulty validators, `(n - 1) / 3`. Informational.
    fn allowed_faulty(&self) -> u64;
}
