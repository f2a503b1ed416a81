use std::collections::VecDeque;

use crate::album::AlbumField;
use crate::error::Result;

use super::{Confirmation, DecisionSource};

/// Something a `ScriptedDecisions` source was asked or told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    Field {
        field: AlbumField,
        current: Option<String>,
    },
    Rejected {
        field: AlbumField,
        value: String,
    },
    Confirm {
        album: String,
    },
    Rename {
        from: String,
        to: String,
    },
}

/// Replays queued answers. Once a queue runs dry, fields keep their current
/// value and albums and renames are declined. Album and rename confirmations
/// share one queue.
#[derive(Debug, Default)]
pub struct ScriptedDecisions {
    answers: VecDeque<Option<String>>,
    confirmations: VecDeque<Confirmation>,
    pub asked: Vec<Question>,
}

impl ScriptedDecisions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a field answer; `None` keeps the current value.
    pub fn answer(mut self, value: Option<&str>) -> Self {
        self.answers.push_back(value.map(str::to_string));
        self
    }

    pub fn confirm(mut self, confirmation: Confirmation) -> Self {
        self.confirmations.push_back(confirmation);
        self
    }

    pub fn confirmations_asked(&self) -> usize {
        self.asked
            .iter()
            .filter(|q| matches!(q, Question::Confirm { .. } | Question::Rename { .. }))
            .count()
    }
}

impl DecisionSource for ScriptedDecisions {
    fn resolve_field(&mut self, field: AlbumField, current: Option<&str>) -> Result<Option<String>> {
        self.asked.push(Question::Field {
            field,
            current: current.map(str::to_string),
        });
        Ok(self.answers.pop_front().flatten())
    }

    fn reject(&mut self, field: AlbumField, value: &str, _reason: &str) {
        self.asked.push(Question::Rejected {
            field,
            value: value.to_string(),
        });
    }

    fn confirm_album(&mut self, album: &str) -> Result<Confirmation> {
        self.asked.push(Question::Confirm {
            album: album.to_string(),
        });
        Ok(self.confirmations.pop_front().unwrap_or(Confirmation::No))
    }

    fn confirm_rename(&mut self, from: &str, to: &str) -> Result<Confirmation> {
        self.asked.push(Question::Rename {
            from: from.to_string(),
            to: to.to_string(),
        });
        Ok(self.confirmations.pop_front().unwrap_or(Confirmation::No))
    }
}
