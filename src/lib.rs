//! xenctl - control tool for a virtualization host.
//!
//! Operator commands such as `physical revoke -n5 -pdisk0` are parsed by a
//! [`CommandParser`](cmdline::CommandParser), validated, and turned into a
//! [`Command`](control::Command) that runs against the host's domain,
//! partition and grant tables.

pub mod cmdline;
pub mod config;
pub mod console;
pub mod control;
pub mod error;
pub mod state;

pub use error::{ControlError, ControlResult};
