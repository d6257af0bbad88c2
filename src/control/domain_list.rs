//! List the domain table.

use core::fmt::Write;

use crate::control::Command;
use crate::error::{ControlError, ControlResult};
use crate::state::StateLoader;

pub struct DomainList;

impl Command for DomainList {
    fn execute(&self, store: &mut StateLoader) -> ControlResult<Option<String>> {
        let state = store.loaded().map_err(ControlError::command)?;
        if state.domains().next().is_none() {
            return Ok(Some("No domains known".to_string()));
        }

        let mut out = format!("{:>5}  {:<16} {:>6}", "Id", "Name", "Grants");
        for domain in state.domains() {
            let _ = write!(
                out,
                "\n{:>5}  {:<16} {:>6}",
                domain.id.get(),
                domain.name,
                state.grants_for(domain.id).count()
            );
        }
        Ok(Some(out))
    }
}
