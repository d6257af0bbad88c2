//! Command parser implementations.
//!
//! Each command family is defined in its own module file.

pub mod domain;
pub mod group;
pub mod help;
pub mod partitions;
pub mod physical;

// Re-export parser instances for the registry
pub use domain::{DOMAIN, DOMAIN_LIST};
pub use group::CommandGroup;
pub use help::HELP;
pub use partitions::{PARTITIONS, PARTITIONS_LIST};
pub use physical::{PHYSICAL, PHYSICAL_GRANT, PHYSICAL_LIST, PHYSICAL_REVOKE};
