//! Command line system - parsers that turn flags into commands.
//!
//! # Architecture
//!
//! - `args.rs` - `ArgList`, typed extraction of `-<letter><value>` flags
//! - `parser.rs` - the `CommandParser` trait and the `Session` it runs in
//! - `registry.rs` - static parser registration, lookup and dispatch
//! - `parsers/` - individual parsers and command groups
//!
//! # Adding a New Command
//!
//! 1. Implement the operation as a `Command` in `control/`
//! 2. Create a parser in `parsers/` implementing `CommandParser`
//! 3. Export a static instance: `pub static MYCOMMAND: MyParser = MyParser;`
//! 4. Register it in `registry.rs` or in its group's member list

pub mod args;
pub mod parser;
pub mod parsers;
pub mod registry;

pub use args::ArgList;
pub use parser::{CommandParser, Session};
pub use parsers::CommandGroup;
pub use registry::{dispatch, usage_for};
