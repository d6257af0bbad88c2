//! Host state loader and persistence.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::HostState;
use crate::error::StoreResult;

/// Where the host state comes from and goes back to.
#[derive(Debug, Clone)]
enum Backing {
    /// TOML state file.
    File(PathBuf),
    /// Pre-built state that is never written anywhere.
    Memory,
}

/// Lazily materializes the [`HostState`] for the current process.
///
/// `ensure_loaded` reads the backing store the first time it is called and
/// hands out the cached state afterwards, so in-process changes are never
/// clobbered by a second load.
#[derive(Debug)]
pub struct StateLoader {
    backing: Backing,
    state: Option<HostState>,
}

impl StateLoader {
    /// Loader backed by a TOML state file. Nothing is read until
    /// [`ensure_loaded`](Self::ensure_loaded).
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            backing: Backing::File(path.into()),
            state: None,
        }
    }

    /// Loader over an already materialized state. `persist` is a no-op.
    pub fn in_memory(state: HostState) -> Self {
        Self {
            backing: Backing::Memory,
            state: Some(state),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_some()
    }

    /// Path of the state file, if file-backed.
    pub fn path(&self) -> Option<&Path> {
        match &self.backing {
            Backing::File(path) => Some(path),
            Backing::Memory => None,
        }
    }

    /// Load the state if that has not happened yet.
    pub fn ensure_loaded(&mut self) -> StoreResult<&mut HostState> {
        if self.state.is_none() {
            let state = match &self.backing {
                Backing::File(path) => read_state(path)?,
                Backing::Memory => HostState::new(),
            };
            self.state = Some(state);
        }
        self.loaded_mut()
    }

    /// The loaded state; fails if `ensure_loaded` has not run.
    pub fn loaded(&self) -> StoreResult<&HostState> {
        self.state.as_ref().context("host state has not been loaded")
    }

    /// Mutable access to the loaded state; fails if `ensure_loaded` has not run.
    pub fn loaded_mut(&mut self) -> StoreResult<&mut HostState> {
        self.state.as_mut().context("host state has not been loaded")
    }

    /// Write the loaded state back to its file.
    pub fn persist(&self) -> StoreResult<()> {
        let Backing::File(path) = &self.backing else {
            return Ok(());
        };
        let state = self.loaded()?;
        write_state(path, state)
    }
}

fn read_state(path: &Path) -> StoreResult<HostState> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("no state file at {}, starting empty", path.display());
            return Ok(HostState::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };

    let state: HostState = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    state
        .validate()
        .with_context(|| format!("corrupt host state in {}", path.display()))?;

    log::debug!(
        "loaded {} domains, {} partitions, {} grants from {}",
        state.domains().count(),
        state.partitions().count(),
        state.grants().count(),
        path.display()
    );
    Ok(state)
}

fn write_state(path: &Path, state: &HostState) -> StoreResult<()> {
    let content = toml::to_string_pretty(state).context("failed to serialize host state")?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }

    // Write next to the target and rename so a crash never leaves half a file.
    let tmp = path.with_extension("toml.tmp");
    fs::write(&tmp, content).with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("failed to replace {}", path.display()))?;

    log::debug!("persisted host state to {}", path.display());
    Ok(())
}
