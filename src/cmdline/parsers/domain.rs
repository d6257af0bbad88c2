//! `domain` commands.

use crate::cmdline::{ArgList, CommandGroup, CommandParser, Session};
use crate::control::{Command, DomainList};
use crate::error::ControlResult;

/// The `domain` command group.
pub static DOMAIN: CommandGroup =
    CommandGroup::new("domain", "Inspect the domains on this host.", &[&DOMAIN_LIST]);

/// `domain list` instance.
pub static DOMAIN_LIST: DomainListParser = DomainListParser;

pub struct DomainListParser;

impl CommandParser for DomainListParser {
    fn name(&self) -> &'static str {
        "list"
    }

    fn usage(&self) -> &'static str {
        ""
    }

    fn help(&self) -> &'static str {
        "List the domains known to the host."
    }

    fn parse(&self, session: &mut Session, _args: &mut ArgList) -> ControlResult<()> {
        session.load_state()?;
        let output = DomainList.execute(&mut session.loader)?;
        session.deliver(output);
        Ok(())
    }
}
