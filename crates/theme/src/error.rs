//! Theme errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    /// A handle in the target no longer refers to a live element.
    #[error("invalid theme target: {handle} is detached")]
    InvalidTarget { handle: &'static str },

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
}
