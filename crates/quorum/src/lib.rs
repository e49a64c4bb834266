//! Validator-set quorum engine for weighted IBFT consensus.
//!
//! Given a per-height map of validator identities to voting power, this
//! crate decides when a collection of signed messages from the PREPARE,
//! COMMIT, and ROUND-CHANGE phases constitutes a quorum sufficient to
//! advance the consensus state machine.
//!
//! # Architecture
//!
//! - [`ValidatorSetSnapshot`]: the immutable per-height weights plus the
//!   thresholds derived from them, installed wholesale and never mutated
//!   in place
//! - [`ValidatorManager`]: the long-lived engine; `init` swaps snapshots
//!   and the `has_*_quorum` predicates answer against the installed one
//! - [`QuorumConfig`]: the protocol-tunable round threshold
//!
//! # Quorum policies
//!
//! Two integer-floor policies are encoded, selected by round number:
//!
//! - **standard**: accumulated power `>= (2 * total) / 3 + 1`, used by
//!   PREPARE and COMMIT tallies and by round changes at low rounds
//! - **relaxed recovery**: accumulated power `>= (30 * total) / 100`, used
//!   by round changes strictly above
//!   [`QuorumConfig::rc_min_quorum_threshold`], where the network is
//!   presumed stalled and a smaller certificate expedites recovery
//!
//! # Concurrency
//!
//! The manager is shared between the consensus driver, the message-ingress
//! path, and the round timer. The snapshot cell is the only mutable state
//! and follows a single-writer / multiple-reader discipline; the backend is
//! never called under the lock.

mod config;
mod manager;
mod snapshot;

pub use config::QuorumConfig;
pub use manager::{InitError, ValidatorManager};
pub use snapshot::ValidatorSetSnapshot;
