//! Thread-safe player handle
//!
//! One mutex around the whole controller, so a queue load and a navigation
//! call can never interleave into a mismatched `(queue, index)` pair.

use crate::controller::PlayerController;
use crate::error::{PlayerError, Result};
use crate::types::PlayerConfig;
use std::sync::{Arc, Mutex};

/// Cloneable handle to a single `PlayerController`
#[derive(Debug, Clone, Default)]
pub struct SharedPlayer {
    inner: Arc<Mutex<PlayerController>>,
}

impl SharedPlayer {
    /// Create a handle around a new controller
    pub fn new(config: PlayerConfig) -> Self {
        Self::from_controller(PlayerController::new(config))
    }

    /// Wrap an existing controller
    pub fn from_controller(controller: PlayerController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Run `f` with exclusive access to the controller
    ///
    /// Observers registered on the controller run inside this lock; they
    /// must not call back into the same handle.
    pub fn with<T>(&self, f: impl FnOnce(&mut PlayerController) -> T) -> Result<T> {
        let mut player = self.inner.lock().map_err(|_| PlayerError::LockPoisoned)?;
        Ok(f(&mut player))
    }
}
