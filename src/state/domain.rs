//! Guest domains known to the host.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Identifier of a running guest domain.
///
/// Domain 0 is the privileged control domain and is never a valid target, so
/// the id is backed by a `NonZeroU32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainId(NonZeroU32);

impl DomainId {
    /// Returns `None` for the reserved id 0.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(DomainId)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Entry of the domain table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: DomainId,
    #[serde(default)]
    pub name: String,
}

impl Domain {
    pub fn new(id: DomainId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
