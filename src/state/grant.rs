//! Physical access grants.

use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::domain::DomainId;
use super::partition::PartitionName;

bitflags! {
    /// Permission a domain holds on a partition.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct AccessMode: u8 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = if self.contains(AccessMode::READ) { 'r' } else { '-' };
        let w = if self.contains(AccessMode::WRITE) { 'w' } else { '-' };
        write!(f, "{r}{w}")
    }
}

/// Error for an access mode string other than `r`, `w` or `rw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadAccessMode;

impl FromStr for AccessMode {
    type Err = BadAccessMode;

    /// Parses the operator spelling used by `-f`: `r`, `w`, `rw` (or `wr`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mode = AccessMode::empty();
        for c in s.chars() {
            let bit = match c {
                'r' | 'R' => AccessMode::READ,
                'w' | 'W' => AccessMode::WRITE,
                _ => return Err(BadAccessMode),
            };
            if mode.contains(bit) {
                return Err(BadAccessMode);
            }
            mode |= bit;
        }
        if mode.is_empty() {
            return Err(BadAccessMode);
        }
        Ok(mode)
    }
}

/// Record that `domain` may access `partition` with `mode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    pub domain: DomainId,
    pub partition: PartitionName,
    pub mode: AccessMode,
}

impl Grant {
    pub fn new(domain: DomainId, partition: PartitionName, mode: AccessMode) -> Self {
        Self {
            domain,
            partition,
            mode,
        }
    }

    /// Whether this grant relates the given pair.
    pub fn matches(&self, domain: DomainId, partition: &PartitionName) -> bool {
        self.domain == domain && &self.partition == partition
    }
}
