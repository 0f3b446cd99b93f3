use crate::artifacts::core::hasher::HashStrategy;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use bytes::Bytes;

pub trait Packable {
    fn serialize(&self) -> Bytes;
}

pub trait Unpackable {
    fn deserialize(oid: &ObjectId, data: Bytes) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    /// Hash of the serialized payload; this is also the object's storage key
    fn object_id(&self, hasher: &dyn HashStrategy) -> ObjectId {
        hasher.hash(&self.serialize())
    }
}
