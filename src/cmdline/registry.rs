//! Parser registry - static registration, lookup and dispatch.

use crate::cmdline::parsers;
use crate::cmdline::{ArgList, CommandParser, Session};
use crate::error::{ControlError, ControlResult};

/// Static array of all top-level parsers.
///
/// To add a new command:
/// 1. Create a new file in `parsers/` (or add to an existing group)
/// 2. Implement the `CommandParser` trait
/// 3. Export a static instance
/// 4. Add it to this array, or to its group's member list
static PARSERS: &[&dyn CommandParser] = &[
    &parsers::DOMAIN,
    &parsers::PARTITIONS,
    &parsers::PHYSICAL,
    &parsers::HELP,
];

/// Find a top-level parser by name.
pub fn find_parser(name: &str) -> Option<&'static dyn CommandParser> {
    PARSERS.iter().copied().find(|p| p.name() == name)
}

/// Get all registered top-level parsers.
pub fn all_parsers() -> &'static [&'static dyn CommandParser] {
    PARSERS
}

/// `"<path> <usage>"`, or just the path for a command without flags.
pub fn synopsis(path: &str, usage: &str) -> String {
    if usage.is_empty() {
        path.to_string()
    } else {
        format!("{} {}", path, usage)
    }
}

/// Synopsis of the most specific command `words` names, for showing after a
/// parse failure.
pub fn usage_for(words: &[String]) -> Option<String> {
    let (name, rest) = words.split_first()?;
    let parser = find_parser(name)?;
    let member = rest
        .first()
        .and_then(|sub| parser.subcommands().iter().copied().find(|p| p.name() == sub.as_str()));
    Some(match member {
        Some(member) => synopsis(&format!("{} {}", name, member.name()), member.usage()),
        None => synopsis(name, parser.usage()),
    })
}

/// Execute a command line.
///
/// The first word selects the parser, the rest become its arguments. An
/// empty command line shows help.
pub fn dispatch(session: &mut Session, words: &[String]) -> ControlResult<()> {
    let mut args = ArgList::new(words.to_vec());
    if args.is_empty() {
        return parsers::HELP.parse(session, &mut args);
    }

    let Some(name) = args.take_subcommand() else {
        return Err(ControlError::parse("Expected a command"));
    };
    let parser = find_parser(&name)
        .ok_or_else(|| ControlError::parse(format!("Unknown command '{}'", name)))?;

    log::debug!("dispatching {} with {:?}", name, args);
    parser.parse(session, &mut args)
}
