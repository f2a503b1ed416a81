//! Decision Source: where resolved field values and album confirmations
//! come from.
//!
//! The pipeline never reads the terminal directly. It asks a
//! `DecisionSource`, which is either an interactive `Prompt` or an
//! automated policy, so a whole run can be driven without a terminal.

mod prompt;
mod resolve;
#[cfg(test)]
mod scripted;

use crate::album::AlbumField;
use crate::error::Result;

pub use prompt::Prompt;
pub use resolve::Resolver;
#[cfg(test)]
pub use scripted::{Question, ScriptedDecisions};

/// Answer to "apply the changes for this album?" or "rename this file?".
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    /// Stop the whole run; nothing after this album is touched.
    Quit,
}

pub trait DecisionSource {
    /// Ask for a new value for `field`. `None` keeps `current`.
    fn resolve_field(&mut self, field: AlbumField, current: Option<&str>) -> Result<Option<String>>;

    /// Tell the source that `value` was not accepted for `field`.
    fn reject(&mut self, _field: AlbumField, _value: &str, _reason: &str) {}

    fn confirm_album(&mut self, album: &str) -> Result<Confirmation>;

    /// Ask whether the file `from` may be renamed to `to`.
    fn confirm_rename(&mut self, from: &str, to: &str) -> Result<Confirmation>;
}

/// Non-interactive policy: keeps every provisional value and answers every
/// confirmation the same way.
#[derive(Debug, Copy, Clone)]
pub struct AutoPolicy {
    confirmation: Confirmation,
}

impl AutoPolicy {
    pub fn new(confirmation: Confirmation) -> Self {
        Self { confirmation }
    }

    pub fn accept_all() -> Self {
        Self::new(Confirmation::Yes)
    }
}

impl DecisionSource for AutoPolicy {
    fn resolve_field(&mut self, _field: AlbumField, _current: Option<&str>) -> Result<Option<String>> {
        Ok(None)
    }

    fn confirm_album(&mut self, _album: &str) -> Result<Confirmation> {
        Ok(self.confirmation)
    }

    fn confirm_rename(&mut self, _from: &str, _to: &str) -> Result<Confirmation> {
        Ok(self.confirmation)
    }
}
