//! List the partitions a domain has physical access to.

use core::fmt::Write;

use crate::command_ensure;
use crate::control::Command;
use crate::error::{ControlError, ControlResult};
use crate::state::{DomainId, StateLoader};

pub struct PhysicalList {
    domain: DomainId,
}

impl PhysicalList {
    pub fn new(domain: DomainId) -> Self {
        Self { domain }
    }
}

impl Command for PhysicalList {
    fn execute(&self, store: &mut StateLoader) -> ControlResult<Option<String>> {
        let state = store.loaded().map_err(ControlError::command)?;
        command_ensure!(
            state.domain(self.domain).is_some(),
            "Domain {} does not exist",
            self.domain
        );

        let mut grants = state.grants_for(self.domain).peekable();
        if grants.peek().is_none() {
            return Ok(Some(format!(
                "Domain {} has no physical access grants",
                self.domain
            )));
        }

        let mut out = format!("{:<16} {:<4} {:>12}", "Partition", "Mode", "Sectors");
        for grant in grants {
            let sectors = state
                .partition(&grant.partition)
                .map(|p| p.nr_sects)
                .unwrap_or(0);
            let _ = write!(
                out,
                "\n{:<16} {:<4} {:>12}",
                grant.partition.as_str(),
                grant.mode.to_string(),
                sectors
            );
        }
        Ok(Some(out))
    }
}
