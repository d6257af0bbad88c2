//! Revoke a domain's physical access to a partition.

use crate::command_ensure;
use crate::config::Defaults;
use crate::control::Command;
use crate::error::{ControlError, ControlResult};
use crate::state::{DomainId, PartitionName, StateLoader};

/// Removes the grant relating `domain` and `partition`.
pub struct PhysicalRevoke<'a> {
    defaults: &'a Defaults,
    domain: DomainId,
    partition: PartitionName,
}

impl<'a> PhysicalRevoke<'a> {
    pub fn new(defaults: &'a Defaults, domain: DomainId, partition: PartitionName) -> Self {
        Self {
            defaults,
            domain,
            partition,
        }
    }
}

impl Command for PhysicalRevoke<'_> {
    fn execute(&self, store: &mut StateLoader) -> ControlResult<Option<String>> {
        let state = store.loaded_mut().map_err(ControlError::command)?;

        command_ensure!(
            state.domain(self.domain).is_some(),
            "Domain {} does not exist",
            self.domain
        );
        command_ensure!(
            state.partition(&self.partition).is_some(),
            "Partition {} does not exist",
            self.partition
        );

        let Some(grant) = state.remove_grant(self.domain, &self.partition) else {
            if self.defaults.strict_revoke {
                return Err(ControlError::CommandFailed(format!(
                    "Domain {} has no access to partition {}",
                    self.domain, self.partition
                )));
            }
            return Ok(Some(format!(
                "Domain {} had no access to partition {}; nothing revoked",
                self.domain, self.partition
            )));
        };

        if let Err(e) = store.persist() {
            // Keep memory in step with the file that was not rewritten.
            store.loaded_mut().map_err(ControlError::command)?.insert_grant(grant);
            return Err(ControlError::command(e));
        }
        log::info!(
            "revoked {} access to {} from domain {}",
            grant.mode,
            grant.partition,
            grant.domain
        );
        Ok(None)
    }
}
