//! Core types for the IBFT quorum engine.
//!
//! This crate provides the foundational types shared across the workspace:
//!
//! - **Identifiers**: [`ValidatorId`]
//! - **Voting power**: [`VotingPower`] and the quorum arithmetic
//! - **Messages**: [`Message`], [`MessageType`], [`View`]
//!
//! # Design Philosophy
//!
//! This crate is self-contained with minimal dependencies and does not
//! depend on any other workspace crate, making it the foundation layer.
//!
//! The quorum arithmetic lives here rather than in the engine crate because
//! it is pure and stateless: `(2 * total) / 3 + 1` for the standard quorum
//! and `(30 * total) / 100` for the relaxed round-change quorum, both with
//! integer floor division over arbitrary-precision operands.

mod identifiers;
mod message;
mod power;

pub use identifiers::ValidatorId;
pub use message::{sender_set, Message, MessageType, View};
pub use power::{quorum_threshold, round_change_min_quorum, total_voting_power, VotingPower};
