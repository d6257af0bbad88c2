//! `partitions` commands.

use crate::cmdline::{ArgList, CommandGroup, CommandParser, Session};
use crate::control::{Command, PartitionList};
use crate::error::ControlResult;

/// The `partitions` command group.
pub static PARTITIONS: CommandGroup = CommandGroup::new(
    "partitions",
    "Inspect the host partition table.",
    &[&PARTITIONS_LIST],
);

/// `partitions list` instance.
pub static PARTITIONS_LIST: PartitionsListParser = PartitionsListParser;

pub struct PartitionsListParser;

impl CommandParser for PartitionsListParser {
    fn name(&self) -> &'static str {
        "list"
    }

    fn usage(&self) -> &'static str {
        ""
    }

    fn help(&self) -> &'static str {
        "List the partitions known to the host and the domains using them."
    }

    fn parse(&self, session: &mut Session, _args: &mut ArgList) -> ControlResult<()> {
        session.load_state()?;
        let output = PartitionList.execute(&mut session.loader)?;
        session.deliver(output);
        Ok(())
    }
}
