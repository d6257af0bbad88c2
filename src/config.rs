//! Tool configuration.
//!
//! [`Defaults`] is layered with figment: built-in values, then a TOML file,
//! then `XENCTL_*` environment variables.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::state::AccessMode;

/// Configuration file looked up in the working directory when none is given.
pub const CONFIG_FILE: &str = "xenctl.toml";

/// Prefix of the environment variables that override the configuration.
pub const ENV_PREFIX: &str = "XENCTL_";

/// Default location of the persisted host state.
pub const STATE_FILE: &str = "/var/lib/xenctl/state.toml";

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Host state file.
    pub state_file: PathBuf,
    /// Access mode used by `physical grant` when `-f` is not given.
    pub grant_mode: AccessMode,
    /// Whether revoking a grant that does not exist is an error.
    pub strict_revoke: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            state_file: PathBuf::from(STATE_FILE),
            grant_mode: AccessMode::READ,
            strict_revoke: true,
        }
    }
}

impl Defaults {
    /// Load the layered configuration.
    ///
    /// An explicit `config` file must exist; the implicit `xenctl.toml` is
    /// optional.
    pub fn load(config: Option<&Path>) -> Result<Self, figment::Error> {
        let figment = Figment::from(Serialized::defaults(Defaults::default()));
        let figment = match config {
            Some(path) => {
                if !path.exists() {
                    return Err(figment::Error::from(format!(
                        "config file {} not found",
                        path.display()
                    )));
                }
                figment.merge(Toml::file(path))
            }
            None => figment.merge(Toml::file(CONFIG_FILE)),
        };
        figment.merge(Env::prefixed(ENV_PREFIX)).extract()
    }
}
