use std::io::{BufRead, Write};

use crate::album::AlbumField;
use crate::error::Result;

use super::{Confirmation, DecisionSource};

const DRY_RUN_PREFIX: &str = "[DRY RUN] ";

/// Interactive decisions read line by line from `input`.
///
/// End of input keeps the current value when resolving a field and counts
/// as a quit when confirming an album or a rename.
pub struct Prompt<R, W> {
    input: R,
    output: W,
    dry_run: bool,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W, dry_run: bool) -> Self {
        Self {
            input,
            output,
            dry_run,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `question` and read one trimmed line, or `None` at end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask `question` until the answer is y, n or q. End of input quits.
    fn confirm(&mut self, question: &str) -> Result<Confirmation> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(Confirmation::Quit);
            };
            match answer.to_lowercase().as_str() {
                "y" => return Ok(Confirmation::Yes),
                "n" => return Ok(Confirmation::No),
                "q" => return Ok(Confirmation::Quit),
                _ => writeln!(self.output, "Invalid input. Please enter 'y', 'n', or 'q'.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> DecisionSource for Prompt<R, W> {
    fn resolve_field(&mut self, field: AlbumField, current: Option<&str>) -> Result<Option<String>> {
        let prefix = if self.dry_run { DRY_RUN_PREFIX } else { "" };
        let question = format!(
            "{prefix}  Set {field} (Current: '{}'): ",
            current.unwrap_or("None")
        );
        match self.ask(&question)? {
            Some(answer) if !answer.is_empty() => Ok(Some(answer)),
            _ => {
                writeln!(self.output, "  Skipping {field}.")?;
                Ok(None)
            }
        }
    }

    fn reject(&mut self, _field: AlbumField, _value: &str, reason: &str) {
        // A broken output stream surfaces on the next prompt.
        let _ = writeln!(self.output, "  {reason}");
    }

    fn confirm_album(&mut self, _album: &str) -> Result<Confirmation> {
        self.confirm("\nConfirm changes? (y = yes, n = no, q = quit): ")
    }

    fn confirm_rename(&mut self, _from: &str, _to: &str) -> Result<Confirmation> {
        self.confirm("Proceed? (y = yes, n = no, q = quit): ")
    }
}
