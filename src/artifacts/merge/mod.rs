//! History algorithms used by merge and rebase
//!
//! - `common_ancestor`: first-common-element search over two ancestry chains

pub mod common_ancestor;
