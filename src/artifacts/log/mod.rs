//! Commit history traversal
//!
//! - `rev_list`: first-parent walk from a tip commit to the root

pub mod rev_list;
