use tracing::debug;

use crate::album::{AlbumField, AlbumFields, ConsistencyReport};
use crate::error::Result;

use super::DecisionSource;

/// Turns a consistency report into canonical album fields by asking a
/// `DecisionSource` about every flagged field.
#[derive(Debug, Clone)]
pub struct Resolver {
    categories: Vec<String>,
}

impl Resolver {
    pub fn new(categories: &[String]) -> Self {
        Self {
            categories: categories.to_vec(),
        }
    }

    /// Check a proposed value. The error is the message shown to the user.
    pub fn validate(&self, field: AlbumField, value: &str) -> std::result::Result<(), String> {
        match field {
            AlbumField::AlbumName => Ok(()),
            AlbumField::AlbumArtist => {
                if self.categories.iter().any(|c| c == value) {
                    Ok(())
                } else {
                    Err(format!(
                        "Invalid value for {field}. Allowed values: {}",
                        self.categories.join(", ")
                    ))
                }
            }
            AlbumField::Year => {
                if value.len() == 4 && value.chars().all(|c| c.is_ascii_digit()) {
                    Ok(())
                } else {
                    Err(format!(
                        "Invalid year format for {field}. Please enter a four-digit year (e.g., '2022')."
                    ))
                }
            }
        }
    }

    /// Unflagged fields keep their provisional value. Each flagged field is
    /// asked until the source keeps the current value or gives a valid one.
    pub fn resolve(
        &self,
        report: &ConsistencyReport,
        source: &mut dyn DecisionSource,
    ) -> Result<AlbumFields> {
        let mut fields = report.provisional.clone();
        for &field in &report.flagged {
            loop {
                let Some(value) = source.resolve_field(field, fields.get(field))? else {
                    break;
                };
                match self.validate(field, &value) {
                    Ok(()) => {
                        debug!("resolved {field} to {value:?}");
                        fields.set(field, Some(value));
                        break;
                    }
                    Err(reason) => source.reject(field, &value, &reason),
                }
            }
        }
        Ok(fields)
    }
}
