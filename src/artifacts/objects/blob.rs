//! File snapshot object
//!
//! A blob is the raw content of a file at the moment it was staged. No file
//! name, mode or header is stored with it, so identical files collapse into a
//! single object.

use crate::artifacts::objects::object::{Object, Packable};
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Object for Blob {}
