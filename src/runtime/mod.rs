//! Runs the tools: the folder reorganizer, the metadata audit and the
//! file prefixer.
//!
//! The first two walk the library one album at a time and share extraction,
//! consistency checking and resolution; they differ in what a confirmed
//! album leads to (file moves versus tag writes). The prefixer works on a
//! single folder, one file at a time.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::album::{AlbumUnit, audio_format, extract_track};
use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::decide::{AutoPolicy, DecisionSource, Prompt};
use crate::error::{Error, Result};
use crate::issues::IssueLog;
use crate::library::AlbumCandidate;
use crate::tags::{LoftyStore, TagStore};

mod audit;
mod prefix;
mod reorganize;
mod settings;

pub use audit::audit;
pub use prefix::prefix_files;
pub use reorganize::reorganize;

/// How a run ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    /// The user quit at a confirmation; later albums were not touched.
    Aborted,
}

/// Collaborators for one run of either tool.
pub struct Session<'a> {
    pub settings: &'a Settings,
    pub tags: &'a dyn TagStore,
    pub decisions: &'a mut dyn DecisionSource,
    /// User-facing output: album headers, proposed changes, results.
    pub out: &'a mut dyn Write,
    pub dry_run: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    let mut settings = settings::load_settings();
    let args = cli.command.args().clone();
    if let Some(categories) = &args.categories {
        settings.audit.categories = categories.clone();
    }
    settings.validate().map_err(Error::Config)?;
    if let Command::Prefix(prefix_args) = &cli.command {
        validate_prefix(&prefix_args.prefix).map_err(Error::Config)?;
    }

    if !args.library.is_dir() {
        return Err(Error::NotADirectory(args.library));
    }

    let log_file = args.log_file.clone().unwrap_or_else(|| {
        PathBuf::from(match &cli.command {
            Command::Reorganize(_) => &settings.log.reorganize_file,
            Command::Audit(_) => &settings.log.audit_file,
            Command::Prefix(_) => &settings.log.prefix_file,
        })
    });

    let mut decisions: Box<dyn DecisionSource> = if args.yes {
        Box::new(AutoPolicy::accept_all())
    } else {
        Box::new(Prompt::new(io::stdin().lock(), io::stdout(), args.dry_run))
    };
    let mut stdout = io::stdout();
    let mut session = Session {
        settings: &settings,
        tags: &LoftyStore,
        decisions: decisions.as_mut(),
        out: &mut stdout,
        dry_run: args.dry_run,
    };

    let (log, result) = match &cli.command {
        Command::Reorganize(_) => {
            let mut log = IssueLog::for_reorganize();
            let result = reorganize(&args.library, &mut session, &mut log);
            (log, result)
        }
        Command::Audit(_) => {
            let mut log = IssueLog::for_audit();
            let result = audit(&args.library, &mut session, &mut log);
            (log, result)
        }
        Command::Prefix(prefix_args) => {
            let mut log = IssueLog::for_prefix();
            let result = prefix_files(&args.library, &prefix_args.prefix, &mut session, &mut log);
            (log, result)
        }
    };

    // The log is written however the run ended.
    save_log(&log, &log_file, session.out);
    let outcome = result?;
    if log.is_empty() {
        info!("run finished: {outcome:?}, no issues recorded");
    } else {
        info!("run finished: {outcome:?}, {} issue(s) recorded", log.len());
    }
    Ok(())
}

/// A prefix must be non-empty and stay within the file name.
fn validate_prefix(prefix: &str) -> std::result::Result<(), String> {
    if prefix.is_empty() {
        return Err("--prefix must not be empty".to_string());
    }
    if prefix.chars().any(std::path::is_separator) {
        return Err(format!("--prefix must not contain a path separator: '{prefix}'"));
    }
    Ok(())
}

fn save_log(log: &IssueLog, path: &Path, out: &mut dyn Write) {
    match log.save(path) {
        Ok(()) => {
            let _ = writeln!(out, "\nLog saved to {}", path.display());
        }
        Err(e) => warn!("Error saving log file {}: {e}", path.display()),
    }
}

/// Read the tags of every file in `candidate`.
///
/// Returns `None` when no file could be read: without any metadata there is
/// nothing to name the album after.
fn load_album(
    candidate: AlbumCandidate,
    tags: &dyn TagStore,
    log: &mut IssueLog,
) -> Option<AlbumUnit> {
    let tracks: Vec<_> = candidate
        .audio_files
        .iter()
        .filter_map(|path| extract_track(tags, path, log))
        .collect();
    if tracks.is_empty() {
        warn!("no readable tracks in {}, skipping", candidate.dir.display());
        return None;
    }

    let format = audio_format(&candidate.audio_files[0]);
    Some(AlbumUnit {
        dir: candidate.dir,
        files: candidate.audio_files,
        tracks,
        canonical: Default::default(),
        format,
    })
}
