//! Terminal rendering of consistency reports and proposed changes.
//!
//! Colors: red for old values, green for new ones, cyan for folders and
//! yellow for things that stay as they are.

use std::io::{self, Write};
use std::path::{MAIN_SEPARATOR_STR, Path};

use crossterm::style::Stylize;

use crate::album::{AlbumFields, ConsistencyReport, TrackMetadata};
use crate::plan::AlbumPlan;

const MAX_PATH_LEN: usize = 50;

fn show(value: Option<&str>) -> &str {
    value.unwrap_or("None")
}

/// `old -> new` in red and green when they differ, otherwise `old` as is.
fn highlight(old: &str, new: &str) -> String {
    if old == new {
        old.to_string()
    } else {
        format!("{} -> {}", old.red(), new.green())
    }
}

fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

/// Shorten long relative paths to `first/.../parent/name`.
pub fn truncate_path(path: &str, max_len: usize) -> String {
    if path.chars().count() <= max_len {
        return path.to_string();
    }
    let parts: Vec<&str> = path.split(MAIN_SEPARATOR_STR).collect();
    if parts.len() <= 2 {
        return path.to_string();
    }
    [parts[0], "...", parts[parts.len() - 2], parts[parts.len() - 1]].join(MAIN_SEPARATOR_STR)
}

pub fn album_header(out: &mut dyn Write, name: &str) -> io::Result<()> {
    writeln!(out, "\nProcessing album: {}", name.cyan())
}

/// The provisional values and which fields need attention.
pub fn consistency_report(
    out: &mut dyn Write,
    album: &str,
    report: &ConsistencyReport,
) -> io::Result<()> {
    let p = &report.provisional;
    let flagged: Vec<&str> = report.flagged.iter().map(|f| f.label()).collect();
    writeln!(out, "  Issues found for album '{album}':")?;
    writeln!(
        out,
        "  Current Metadata: Album: '{}', Album Artist: '{}', Year: '{}'",
        show(p.album.as_deref()),
        show(p.album_artist.as_deref()),
        show(p.year.as_deref())
    )?;
    writeln!(out, "  Missing/Invalid Fields: {}", flagged.join(", "))
}

/// Proposed folder rename and file moves, grouped by folder.
pub fn album_plan(
    out: &mut dyn Write,
    root: &Path,
    current: &str,
    plan: &AlbumPlan,
) -> io::Result<()> {
    if plan.is_empty() {
        if plan.held.is_empty() {
            writeln!(out, "  {}", "No changes needed for this album.".yellow())?;
        } else {
            let notice = format!(
                "No changes possible: {} track(s) kept in place because their destination is taken.",
                plan.held.len()
            );
            writeln!(out, "  {}", notice.yellow())?;
        }
        return Ok(());
    }
    if current != plan.folder_name {
        writeln!(out, "Proposed rename: {}", plan.folder_name.as_str().green())?;
    }

    writeln!(out, "\nProposed changes:")?;
    let mut current_folder: Option<&Path> = None;
    for change in &plan.changes {
        let before = relative(&change.source, root);
        let after = relative(&change.destination, root);
        let before_folder = before.parent().unwrap_or(Path::new(""));
        let after_folder = after.parent().unwrap_or(Path::new(""));

        if current_folder != Some(before_folder) {
            if current_folder.is_some() {
                writeln!(out)?;
            }
            writeln!(out, "  {}", format!("{}/", before_folder.display()).cyan())?;
            if before_folder != after_folder {
                writeln!(out, "  {}", format!("-> {}/", after_folder.display()).green())?;
            }
            current_folder = Some(before_folder);
        }

        let before_name = before.file_name().unwrap_or_default().to_string_lossy();
        let after_name = after.file_name().unwrap_or_default().to_string_lossy();
        if before_name != after_name {
            writeln!(out, "    {}", highlight(&before_name, &after_name))?;
        }
    }
    Ok(())
}

/// Per-file old and new album fields, for the metadata audit.
pub fn metadata_updates(
    out: &mut dyn Write,
    dir: &Path,
    tracks: &[TrackMetadata],
    fields: &AlbumFields,
) -> io::Result<()> {
    let album = show(fields.album.as_deref());
    let artist = show(fields.album_artist.as_deref());
    let year = show(fields.year.as_deref());
    let name = dir.file_name().unwrap_or_default().to_string_lossy();

    writeln!(out, "\nProposed updates for album '{name}':")?;
    writeln!(
        out,
        "  New Metadata -> Album: '{album}', Artist: '{artist}', Year: '{year}'"
    )?;
    writeln!(out, "\n  Files to be updated:")?;
    for track in tracks {
        let path = relative(&track.path, dir).display().to_string();
        writeln!(out, "    {}", truncate_path(&path, MAX_PATH_LEN).cyan())?;
        writeln!(
            out,
            "      Old -> Album: '{}', Artist: '{}', Year: '{}'",
            highlight(show(track.album.as_deref()), album),
            highlight(show(track.album_artist.as_deref()), artist),
            highlight(show(track.year.as_deref()), year)
        )?;
        writeln!(
            out,
            "      New -> Album: '{album}', Artist: '{artist}', Year: '{year}'"
        )?;
    }
    Ok(())
}
