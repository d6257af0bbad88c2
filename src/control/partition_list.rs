//! List the host partition table.

use core::fmt::Write;

use crate::control::Command;
use crate::error::{ControlError, ControlResult};
use crate::state::StateLoader;

pub struct PartitionList;

impl Command for PartitionList {
    fn execute(&self, store: &mut StateLoader) -> ControlResult<Option<String>> {
        let state = store.loaded().map_err(ControlError::command)?;
        if state.partitions().next().is_none() {
            return Ok(Some("No partitions known".to_string()));
        }

        let mut out = format!(
            "{:<16} {:>7} {:>12} {:>12}  {}",
            "Name", "Dev", "Start", "Sectors", "Domains"
        );
        for partition in state.partitions() {
            let holders: Vec<String> = state
                .grants_on(&partition.name)
                .map(|g| g.domain.to_string())
                .collect();
            let holders = if holders.is_empty() {
                "-".to_string()
            } else {
                holders.join(",")
            };
            let _ = write!(
                out,
                "\n{:<16} {:>7} {:>12} {:>12}  {}",
                partition.name.as_str(),
                format!("{}:{}", partition.major, partition.minor),
                partition.start_sect,
                partition.nr_sects,
                holders
            );
        }
        Ok(Some(out))
    }
}
