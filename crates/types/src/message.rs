//! Consensus message shape as observed by the quorum engine.
//!
//! Construction, signing, and signature verification belong to the backend;
//! the engine reads only the author of each message.

use crate::ValidatorId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One attempt to decide one block: a `(height, round)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct View {
    /// Block number being decided.
    pub height: u64,
    /// Round index within the height, starting at 0.
    pub round: u64,
}

/// IBFT message kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageType {
    /// Proposal broadcast by the round's proposer.
    PrePrepare,
    /// Endorsement of the proposal.
    Prepare,
    /// Commitment to the proposal.
    Commit,
    /// Request to advance to a higher round.
    RoundChange,
}

/// A signed consensus message.
///
/// Callers present messages already grouped by view and with the sender
/// authenticated; the engine never inspects `payload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Authenticated author.
    pub from: ValidatorId,
    /// View the message belongs to.
    pub view: View,
    /// Message kind.
    pub kind: MessageType,
    /// Kind-specific body, opaque to the engine.
    pub payload: Vec<u8>,
}

/// Project messages onto their distinct set of authors.
pub fn sender_set(messages: &[Message]) -> HashSet<ValidatorId> {
    messages
        .iter()
        .map(|message| message.from.clone())
        .collect()
}
