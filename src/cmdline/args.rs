//! Parameter extraction from `-<letter><value>` tokens.

use core::str::FromStr;

use crate::error::{ControlError, ControlResult};

/// The not yet consumed tokens of a command line.
///
/// Flags take their value attached to the letter (`-n5`, `-pdisk0`). Each
/// extraction removes the token it matched, so flags may come in any order
/// and whatever is left over can be handed to the next parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgList {
    tokens: Vec<String>,
}

impl ArgList {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Number of remaining tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the remaining tokens.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }

    /// Pop the leading token if it is a word rather than a flag.
    pub fn take_subcommand(&mut self) -> Option<String> {
        match self.tokens.first() {
            Some(first) if !first.starts_with('-') => Some(self.tokens.remove(0)),
            _ => None,
        }
    }

    /// Remove the first `-<flag>...` token and return what follows the letter.
    fn take_flag(&mut self, flag: char) -> Option<String> {
        let index = self.tokens.iter().position(|t| flag_value(t, flag).is_some())?;
        let token = self.tokens.remove(index);
        flag_value(&token, flag).map(str::to_string)
    }

    /// Integer value of `-<flag>`, or `default` when the flag is absent.
    ///
    /// A present but malformed value is a parse failure rather than the
    /// default.
    pub fn int_parameter<T: FromStr>(&mut self, flag: char, default: T) -> ControlResult<T> {
        match self.take_flag(flag) {
            None => Ok(default),
            Some(value) => value.parse().map_err(|_| {
                ControlError::parse(format!("Malformed value for -{}: '{}'", flag, value))
            }),
        }
    }

    /// String value of `-<flag>`, or `default` when the flag is absent.
    pub fn string_parameter(&mut self, flag: char, default: &str) -> String {
        self.take_flag(flag).unwrap_or_else(|| default.to_string())
    }
}

impl<S: Into<String>> FromIterator<S> for ArgList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

fn flag_value(token: &str, flag: char) -> Option<&str> {
    token.strip_prefix('-')?.strip_prefix(flag)
}
