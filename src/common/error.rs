//! Fatal startup errors.
//!
//! Gameplay never fails: an empty bullet pool or zero mana is a no-op.
//! These are the conditions under which the game cannot run at all.

use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A texture or audio file is missing or could not be decoded.
    AssetLoad { path: String, reason: String },
    /// A host device (window, audio output) is unavailable.
    DeviceInit { device: &'static str },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetLoad { path, reason } => {
                write!(f, "failed to load asset `{path}`: {reason}")
            }
            Self::DeviceInit { device } => write!(f, "failed to initialise {device}"),
        }
    }
}

impl std::error::Error for GameError {}
