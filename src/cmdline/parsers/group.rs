//! Command groups: a keyword that forwards to one of its member parsers.

use crate::cmdline::{ArgList, CommandParser, Session};
use crate::error::{ControlError, ControlResult};

/// A parser whose first argument selects a member parser, e.g. `physical`
/// dispatching to `grant`, `revoke` and `list`.
pub struct CommandGroup {
    name: &'static str,
    help: &'static str,
    members: &'static [&'static dyn CommandParser],
}

impl CommandGroup {
    pub const fn new(
        name: &'static str,
        help: &'static str,
        members: &'static [&'static dyn CommandParser],
    ) -> Self {
        Self {
            name,
            help,
            members,
        }
    }

    /// Find a member by name.
    pub fn find(&self, name: &str) -> Option<&'static dyn CommandParser> {
        self.members.iter().copied().find(|p| p.name() == name)
    }
}

impl CommandParser for CommandGroup {
    fn name(&self) -> &'static str {
        self.name
    }

    fn usage(&self) -> &'static str {
        "<sub-command> <flags>"
    }

    fn help(&self) -> &'static str {
        self.help
    }

    fn subcommands(&self) -> &'static [&'static dyn CommandParser] {
        self.members
    }

    fn parse(&self, session: &mut Session, args: &mut ArgList) -> ControlResult<()> {
        let Some(sub) = args.take_subcommand() else {
            return Err(ControlError::parse(format!(
                "Expected sub-command for {}",
                self.name
            )));
        };
        let parser = self.find(&sub).ok_or_else(|| {
            ControlError::parse(format!("Unknown sub-command '{}' for {}", sub, self.name))
        })?;
        log::debug!("{} {} with {:?}", self.name, sub, args);
        parser.parse(session, args)
    }
}
