//! Core repository components
//!
//! - `database`: content-addressable object store
//! - `history`: commit graph queries and rewriting primitives over the store
//! - `index`: staging area feeding `status`
//! - `lock`: exclusive lock held by mutating commands
//! - `refs`: branch refs and HEAD
//! - `repository`: the session object tying the stores together
//! - `workspace`: working directory file system access

pub mod database;
pub mod history;
pub mod index;
pub mod lock;
pub mod refs;
pub mod repository;
pub mod workspace;
