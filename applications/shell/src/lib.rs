//! Podcastr Shell
//!
//! Line-oriented driver for the Podcastr player: loads a newest-first
//! episode list, shapes it into the home page listing and plays it through
//! a shared player controller.

pub mod commands;
pub mod config;
pub mod error;
pub mod session;

pub use commands::Command;
pub use config::ShellConfig;
pub use error::{Result, ShellError};
pub use session::{Flow, Session};
