//! Player identification.
//!
//! A `PlayerId` is an opaque token: two identities are the same player iff
//! they compare equal. The engine never orders players; which one moves first
//! is decided by the seat it is given at construction.

use serde::{Deserialize, Serialize};

/// Opaque player identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw identity value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
