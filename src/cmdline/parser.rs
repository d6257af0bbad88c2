//! Command parser trait and the session it runs in.

use crate::cmdline::ArgList;
use crate::config::Defaults;
use crate::console::Console;
use crate::error::{ControlError, ControlResult};
use crate::state::StateLoader;

/// Everything a parser needs besides its flags: configuration, the host
/// state loader and the console results go to.
///
/// A session exclusively owns the host state; parsers take it as `&mut`, so
/// commands run one at a time even in a long-lived process.
#[derive(Debug)]
pub struct Session {
    pub defaults: Defaults,
    pub loader: StateLoader,
    pub console: Console,
}

impl Session {
    pub fn new(defaults: Defaults, loader: StateLoader, console: Console) -> Self {
        Self {
            defaults,
            loader,
            console,
        }
    }

    /// Session over the state file named by `defaults`, printing to stdout.
    pub fn from_defaults(defaults: Defaults) -> Self {
        let loader = StateLoader::from_file(&defaults.state_file);
        Self::new(defaults, loader, Console::stdout())
    }

    /// Make sure host state is loaded. Repeated calls are cheap and keep any
    /// changes already made in this session.
    pub fn load_state(&mut self) -> ControlResult<()> {
        self.loader
            .ensure_loaded()
            .map(|_| ())
            .map_err(ControlError::command)
    }

    /// Deliver a command's result, if it produced one.
    pub fn deliver(&mut self, output: Option<String>) {
        if let Some(output) = output {
            self.console.emit(&output);
        }
    }
}

/// Translates flags into a validated command and runs it.
///
/// Parsers are registered statically and looked up by name; they carry no
/// state of their own.
pub trait CommandParser: Sync {
    /// Keyword the router matches against.
    fn name(&self) -> &'static str;

    /// One-line flag summary.
    fn usage(&self) -> &'static str;

    /// One-sentence description.
    fn help(&self) -> &'static str;

    /// Members of a command group; empty for a plain command.
    fn subcommands(&self) -> &'static [&'static dyn CommandParser] {
        &[]
    }

    /// Validate `args` and execute the resulting command.
    ///
    /// Missing or malformed flags fail with `ParseFailed` before any state is
    /// touched; `CommandFailed` from the command is passed through unchanged.
    fn parse(&self, session: &mut Session, args: &mut ArgList) -> ControlResult<()>;
}
