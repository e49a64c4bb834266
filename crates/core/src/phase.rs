//! Consensus state names.

use std::fmt;

/// The phases of one IBFT view, as named by the outer state machine.
///
/// The quorum engine only branches on [`Phase::Prepare`]; the other values
/// exist so callers can report their actual state and get the logging
/// behavior they expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the round's proposal.
    NewRound,
    /// Collecting PREPARE messages.
    Prepare,
    /// Collecting COMMIT messages.
    Commit,
    /// The view has decided and the block is being finalized.
    Fin,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::NewRound => write!(f, "new round"),
            Phase::Prepare => write!(f, "prepare"),
            Phase::Commit => write!(f, "commit"),
            Phase::Fin => write!(f, "fin"),
        }
    }
}
