//! Unique identifiers for stored todo records.
//!
//! # Design
//! An `ObjectId` is 12 bytes: a 4-byte big-endian unix-seconds creation
//! timestamp followed by 8 random bytes. Its string form is a fixed-length
//! 24-character hexadecimal token, which is what appears in URLs and JSON.
//! Leading with the timestamp makes identifier order approximate insertion
//! order, which is the order the store backends iterate in.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use rand::Rng;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Length of the string form in hex characters.
pub const OBJECT_ID_HEX_LEN: usize = 24;

/// A 12-byte record identifier with a 24-hex-character string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; 12]);

/// The string was not a well-formed identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed object id")]
pub struct InvalidObjectId;

impl ObjectId {
    /// Generates a fresh identifier: current unix seconds plus a random tail.
    pub fn new() -> Self {
        let mut bytes = [0u8; 12];
        let secs = Utc::now().timestamp() as u32;
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        rand::thread_rng().fill(&mut bytes[4..]);
        Self(bytes)
    }

    /// Parses the 24-hex-character string form. Anything else is rejected
    /// here, before the store is contacted.
    pub fn parse(s: &str) -> Result<Self, InvalidObjectId> {
        if s.len() != OBJECT_ID_HEX_LEN {
            return Err(InvalidObjectId);
        }
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| InvalidObjectId)?;
        Ok(Self(bytes))
    }

    /// Raw bytes, used as the store key.
    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// The 24-character hex string form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = InvalidObjectId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl de::Visitor<'_> for HexVisitor {
            type Value = ObjectId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 24-character hex string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ObjectId, E> {
                ObjectId::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}
