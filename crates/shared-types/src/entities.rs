//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Identity**: `MessageId`, the `EMPTY_ID` genesis sentinel
//! - **Graph**: `MessageRef` (a message and its trunk/branch parents)

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Length of a message identifier in bytes.
pub const MESSAGE_ID_LENGTH: usize = 32;

/// Identifier of the genesis message.
///
/// No real message hashes to all zeroes, so parents that point here mean
/// "attach to genesis".
pub const EMPTY_ID: MessageId = MessageId([0u8; MESSAGE_ID_LENGTH]);

/// A 32-byte opaque message identifier.
///
/// Ordering is bytewise so that sets of ids can be iterated
/// deterministically.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct MessageId(pub [u8; MESSAGE_ID_LENGTH]);

impl MessageId {
    /// Wraps raw identifier bytes.
    pub const fn new(bytes: [u8; MESSAGE_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Derives an identifier by hashing the given parts with SHA-256.
    ///
    /// The result is never `EMPTY_ID` in practice; callers that need a hard
    /// guarantee should check `is_empty()`.
    pub fn digest(parts: &[&[u8]]) -> Self {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part);
        }
        Self(hasher.finalize().into())
    }

    /// Lowercase hex encoding of the full identifier.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; MESSAGE_ID_LENGTH] {
        &self.0
    }

    /// True for the genesis sentinel.
    pub fn is_empty(&self) -> bool {
        *self == EMPTY_ID
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("MessageId(genesis)");
        }
        write!(f, "MessageId({}..)", hex::encode(&self.0[..4]))
    }
}

/// The identity view of a message: its own id and the two parents it
/// approves.
///
/// Payload, issuer and signature live with the external message model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageRef {
    /// Id of the message itself.
    pub id: MessageId,
    /// First parent reference.
    pub trunk: MessageId,
    /// Second parent reference.
    pub branch: MessageId,
}

impl MessageRef {
    /// Creates a reference approving `trunk` and `branch`.
    pub const fn new(id: MessageId, trunk: MessageId, branch: MessageId) -> Self {
        Self { id, trunk, branch }
    }

    /// Creates a reference whose parents are both genesis.
    pub const fn genesis_child(id: MessageId) -> Self {
        Self::new(id, EMPTY_ID, EMPTY_ID)
    }

    /// Both parent ids, trunk first.
    pub fn parents(&self) -> [MessageId; 2] {
        [self.trunk, self.branch]
    }
}
