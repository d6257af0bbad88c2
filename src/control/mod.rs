//! Commands: the operations carried out against host state.
//!
//! A command is built by a parser from already validated parameters and run
//! once. It reports domain-level failures as
//! [`ControlError::CommandFailed`](crate::error::ControlError::CommandFailed)
//! and returns an optional result string for the operator.
//!
//! # Adding a New Command
//!
//! 1. Create a new file in `control/` with a struct holding its parameters
//! 2. Implement the [`Command`] trait
//! 3. Re-export it here and build it from a parser in `cmdline/parsers/`

mod domain_list;
mod partition_list;
mod physical_grant;
mod physical_list;
mod physical_revoke;

use crate::error::ControlResult;
use crate::state::StateLoader;

pub use domain_list::DomainList;
pub use partition_list::PartitionList;
pub use physical_grant::PhysicalGrant;
pub use physical_list::PhysicalList;
pub use physical_revoke::PhysicalRevoke;

/// An operation against the loaded host state.
pub trait Command {
    /// Run the command. The loader must already be loaded; mutating commands
    /// persist through it before returning.
    ///
    /// `Ok(None)` is a silent success.
    fn execute(&self, store: &mut StateLoader) -> ControlResult<Option<String>>;
}
