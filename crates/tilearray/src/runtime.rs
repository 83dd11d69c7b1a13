//! Explicit runtime lifecycle context.
//!
//! ```text
//! Uninitialized --initialize--> Initialized --finalize--> Finalized
//! ```
//!
//! `Finalized` is terminal: initializing again is an error.

use std::fmt;

use tracing::{debug, info};

use crate::config::RuntimeConfig;
use crate::error::{Result, TileError};

/// Where a [`Runtime`] is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    #[default]
    Uninitialized,
    Initialized,
    Finalized,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Uninitialized => "uninitialized",
            Self::Initialized => "initialized",
            Self::Finalized => "finalized",
        };
        f.write_str(s)
    }
}

/// Lifecycle state plus configuration, passed explicitly to whatever needs
/// an initialized runtime.
///
/// # Example
///
/// ```
/// use tilearray::{Runtime, RuntimeConfig, TileError};
///
/// let mut rt = Runtime::new(RuntimeConfig::default().with_quiet(false));
/// rt.initialize().unwrap();
/// assert!(rt.is_initialized());
/// rt.finalize().unwrap();
/// assert_eq!(rt.initialize(), Err(TileError::AlreadyFinalized));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Runtime {
    state: LifecycleState,
    config: RuntimeConfig,
}

impl Runtime {
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            state: LifecycleState::Uninitialized,
            config,
        }
    }

    /// A runtime configured from the process environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(RuntimeConfig::from_env()?))
    }

    #[inline]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.state == LifecycleState::Initialized
    }

    pub fn is_finalized(&self) -> bool {
        self.state == LifecycleState::Finalized
    }

    /// Move from `Uninitialized` to `Initialized`.
    ///
    /// # Errors
    ///
    /// - `TileError::AlreadyInitialized` if already initialized.
    /// - `TileError::AlreadyFinalized` after [`finalize`](Self::finalize).
    pub fn initialize(&mut self) -> Result<()> {
        match self.state {
            LifecycleState::Uninitialized => {
                self.transition(LifecycleState::Initialized);
                if !self.config.quiet {
                    info!(order = ?self.config.default_order, "tilearray runtime initialized");
                }
                Ok(())
            }
            LifecycleState::Initialized => Err(TileError::AlreadyInitialized),
            LifecycleState::Finalized => Err(TileError::AlreadyFinalized),
        }
    }

    /// Move from `Initialized` to `Finalized`.
    ///
    /// # Errors
    ///
    /// - `TileError::NotInitialized` if never initialized.
    /// - `TileError::AlreadyFinalized` if already finalized.
    pub fn finalize(&mut self) -> Result<()> {
        match self.state {
            LifecycleState::Initialized => {
                self.transition(LifecycleState::Finalized);
                Ok(())
            }
            LifecycleState::Uninitialized => Err(TileError::NotInitialized),
            LifecycleState::Finalized => Err(TileError::AlreadyFinalized),
        }
    }

    /// Ok only while initialized.
    pub fn ensure_initialized(&self) -> Result<()> {
        match self.state {
            LifecycleState::Initialized => Ok(()),
            LifecycleState::Uninitialized => Err(TileError::NotInitialized),
            LifecycleState::Finalized => Err(TileError::AlreadyFinalized),
        }
    }

    fn transition(&mut self, to: LifecycleState) {
        debug!(from = %self.state, %to, "runtime lifecycle transition");
        self.state = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_lifecycle() {
        let mut rt = Runtime::default();
        assert_eq!(rt.state(), LifecycleState::Uninitialized);
        assert_eq!(rt.ensure_initialized(), Err(TileError::NotInitialized));

        rt.initialize().unwrap();
        assert_eq!(rt.state(), LifecycleState::Initialized);
        assert!(rt.ensure_initialized().is_ok());

        rt.finalize().unwrap();
        assert!(rt.is_finalized());
        assert_eq!(rt.ensure_initialized(), Err(TileError::AlreadyFinalized));
    }

    #[test]
    fn test_double_initialize() {
        let mut rt = Runtime::default();
        rt.initialize().unwrap();
        assert_eq!(rt.initialize(), Err(TileError::AlreadyInitialized));
        assert!(rt.is_initialized());
    }

    #[test]
    fn test_finalized_is_terminal() {
        let mut rt = Runtime::default();
        rt.initialize().unwrap();
        rt.finalize().unwrap();
        assert_eq!(rt.initialize(), Err(TileError::AlreadyFinalized));
        assert_eq!(rt.finalize(), Err(TileError::AlreadyFinalized));
        assert_eq!(rt.state(), LifecycleState::Finalized);
    }

    #[test]
    fn test_finalize_before_initialize() {
        let mut rt = Runtime::default();
        assert_eq!(rt.finalize(), Err(TileError::NotInitialized));
        assert_eq!(rt.state(), LifecycleState::Uninitialized);
    }

    #[test]
    fn test_display_state() {
        assert_eq!(LifecycleState::Finalized.to_string(), "finalized");
    }
}
