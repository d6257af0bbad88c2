//! Help command - lists the available commands and their usage.

use crate::cmdline::registry::{self, synopsis};
use crate::cmdline::{ArgList, CommandParser, Session};
use crate::error::{ControlError, ControlResult};

/// Help command instance.
pub static HELP: HelpParser = HelpParser;

pub struct HelpParser;

impl CommandParser for HelpParser {
    fn name(&self) -> &'static str {
        "help"
    }

    fn usage(&self) -> &'static str {
        "[<command> [<sub-command>]]"
    }

    fn help(&self) -> &'static str {
        "Show all commands, or the usage of one command."
    }

    fn parse(&self, session: &mut Session, args: &mut ArgList) -> ControlResult<()> {
        let output = match args.take_subcommand() {
            Some(name) => command_help(&name, args.take_subcommand().as_deref())?,
            None => all_commands_help(),
        };
        session.deliver(Some(output));
        Ok(())
    }
}

/// Usage lines for one command, or one member of a command group.
fn command_help(name: &str, sub: Option<&str>) -> ControlResult<String> {
    let parser = registry::find_parser(name)
        .ok_or_else(|| ControlError::parse(format!("Unknown command '{}'", name)))?;

    let mut lines = Vec::new();
    match sub {
        Some(sub) => {
            let member = parser
                .subcommands()
                .iter()
                .copied()
                .find(|p| p.name() == sub)
                .ok_or_else(|| {
                    ControlError::parse(format!("Unknown sub-command '{}' for {}", sub, name))
                })?;
            describe(&mut lines, name, member);
        }
        None => {
            if !parser.subcommands().is_empty() {
                lines.push(format!("{}: {}", parser.name(), parser.help()));
            }
            describe(&mut lines, "", parser);
        }
    }
    Ok(lines.join("\n"))
}

fn all_commands_help() -> String {
    let mut lines = vec![
        "Usage: xenctl [--config <file>] [--state <file>] [-v] <command> [<sub-command>] <flags>"
            .to_string(),
        String::new(),
        "Commands:".to_string(),
    ];
    for parser in registry::all_parsers() {
        describe(&mut lines, "", *parser);
    }
    lines.push(String::new());
    lines.push("Type 'xenctl help <command>' for the usage of one command.".to_string());
    lines.join("\n")
}

/// Append the synopsis and description of `parser`, expanding groups into
/// their members.
fn describe(lines: &mut Vec<String>, prefix: &str, parser: &dyn CommandParser) {
    let path = if prefix.is_empty() {
        parser.name().to_string()
    } else {
        format!("{} {}", prefix, parser.name())
    };

    let members = parser.subcommands();
    if members.is_empty() {
        lines.push(format!("  {}", synopsis(&path, parser.usage())));
        lines.push(format!("      {}", parser.help()));
    } else {
        for member in members {
            describe(lines, &path, *member);
        }
    }
}
