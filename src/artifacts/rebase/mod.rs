//! History rewriting
//!
//! A rebase replays the commits a source branch gained since it forked from a
//! target branch on top of the target's tip. The user picks one action per
//! commit through a [`LineReader`](crate::artifacts::core::line_reader::LineReader);
//! a conflict suspends the rebase into a durable [`PausedRebase`](paused::PausedRebase)
//! record that `--continue` or `--abort` later resolves.

pub mod action;
pub mod conflict;
pub mod engine;
pub mod paused;
pub mod plan;
