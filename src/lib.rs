//! twig: a minimal content-addressed version control engine
//!
//! - `areas`: the stores a repository is made of (objects, refs, index, ...)
//! - `artifacts`: data types and algorithms over those stores
//! - `commands`: the CLI commands, as `impl Repository` blocks
//! - `errors`: domain failures callers can match on

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
