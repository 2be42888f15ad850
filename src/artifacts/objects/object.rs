//! Object encoding traits
//!
//! The store itself only sees bytes; these traits are how typed records
//! become those bytes and come back.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Result;
use bytes::Bytes;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(content: &[u8]) -> Result<Self>
    where
        Self: Sized;
}

/// Anything that can be written to the object store
pub trait Object: Packable {
    /// Digest of the serialized bytes, i.e. the key the object is stored under
    fn object_id(&self) -> Result<ObjectId> {
        Ok(ObjectId::digest(&self.serialize()?))
    }
}
