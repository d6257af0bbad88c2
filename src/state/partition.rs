//! Storage partitions the host can hand out to domains.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Name of a partition, e.g. `hda3` or `disk0`. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartitionName(String);

impl PartitionName {
    /// Returns `None` for the empty string.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            None
        } else {
            Some(PartitionName(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PartitionName {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PartitionName::new(value).ok_or("partition name must not be empty")
    }
}

impl From<PartitionName> for String {
    fn from(name: PartitionName) -> Self {
        name.0
    }
}

impl fmt::Display for PartitionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Entry of the host partition table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub name: PartitionName,
    /// Block device major number.
    #[serde(default)]
    pub major: u16,
    /// Block device minor number.
    #[serde(default)]
    pub minor: u16,
    /// First sector of the partition on its device.
    #[serde(default)]
    pub start_sect: u64,
    /// Length in 512-byte sectors.
    #[serde(default)]
    pub nr_sects: u64,
}

impl Partition {
    pub fn new(name: PartitionName, major: u16, minor: u16, start_sect: u64, nr_sects: u64) -> Self {
        Self {
            name,
            major,
            minor,
            start_sect,
            nr_sects,
        }
    }
}
