//! Grant a domain physical access to a partition.

use crate::command_ensure;
use crate::config::Defaults;
use crate::control::Command;
use crate::error::{ControlError, ControlResult};
use crate::state::{AccessMode, DomainId, Grant, PartitionName, StateLoader};

/// Creates or updates the grant relating `domain` and `partition`.
pub struct PhysicalGrant<'a> {
    defaults: &'a Defaults,
    domain: DomainId,
    partition: PartitionName,
    mode: Option<AccessMode>,
}

impl<'a> PhysicalGrant<'a> {
    /// `mode` of `None` falls back to the configured grant mode.
    pub fn new(
        defaults: &'a Defaults,
        domain: DomainId,
        partition: PartitionName,
        mode: Option<AccessMode>,
    ) -> Self {
        Self {
            defaults,
            domain,
            partition,
            mode,
        }
    }
}

impl Command for PhysicalGrant<'_> {
    fn execute(&self, store: &mut StateLoader) -> ControlResult<Option<String>> {
        let mode = self.mode.unwrap_or(self.defaults.grant_mode);
        command_ensure!(!mode.is_empty(), "No access mode given");

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

        let previous = state.insert_grant(Grant::new(self.domain, self.partition.clone(), mode));
        if let Err(e) = store.persist() {
            let state = store.loaded_mut().map_err(ControlError::command)?;
            match previous {
                Some(old) => {
                    state.insert_grant(Grant::new(self.domain, self.partition.clone(), old));
                }
                None => {
                    state.remove_grant(self.domain, &self.partition);
                }
            }
            return Err(ControlError::command(e));
        }

        match previous {
            Some(old) => log::info!(
                "changed domain {} access to {} from {} to {}",
                self.domain,
                self.partition,
                old,
                mode
            ),
            None => log::info!(
                "granted domain {} {} access to {}",
                self.domain,
                mode,
                self.partition
            ),
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::{dom, part, sample_state};

    #[test]
    fn grants_with_configured_mode() {
        let defaults = Defaults::default();
        let mut store = StateLoader::in_memory(sample_state());

        let cmd = PhysicalGrant::new(&defaults, dom(7), part("disk1"), None);
        assert_eq!(cmd.execute(&mut store), Ok(None));
        let grant = store.loaded().unwrap().grant(dom(7), &part("disk1")).cloned();
        assert_eq!(grant.map(|g| g.mode), Some(AccessMode::READ));
    }

    #[test]
    fn regrant_replaces_mode() {
        let defaults = Defaults::default();
        let mut store = StateLoader::in_memory(sample_state());

        let cmd = PhysicalGrant::new(&defaults, dom(5), part("disk0"), Some(AccessMode::READ));
        cmd.execute(&mut store).unwrap();
        let state = store.loaded().unwrap();
        assert_eq!(state.grants_for(dom(5)).count(), 1);
        assert_eq!(state.grant(dom(5), &part("disk0")).unwrap().mode, AccessMode::READ);
    }

    #[test]
    fn failed_persist_restores_previous_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        let mut seed = StateLoader::from_file(&path);
        *seed.ensure_loaded().unwrap() = sample_state();
        seed.persist().unwrap();
        std::fs::create_dir(dir.path().join("state.toml.tmp")).unwrap();

        let defaults = Defaults::default();
        let mut store = StateLoader::from_file(&path);
        store.ensure_loaded().unwrap();

        let change = PhysicalGrant::new(&defaults, dom(5), part("disk0"), Some(AccessMode::READ));
        assert!(change.execute(&mut store).is_err());
        let add = PhysicalGrant::new(&defaults, dom(7), part("disk1"), None);
        assert!(add.execute(&mut store).is_err());

        assert_eq!(store.loaded().unwrap(), &sample_state());
    }

    #[test]
    fn unknown_partition_fails() {
        let defaults = Defaults::default();
        let mut store = StateLoader::in_memory(sample_state());

        let cmd = PhysicalGrant::new(&defaults, dom(5), part("hdb9"), None);
        assert_eq!(
            cmd.execute(&mut store),
            Err(ControlError::CommandFailed("Partition hdb9 does not exist".into()))
        );
    }
}
