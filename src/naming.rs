//! Canonical names for album folders and track files.

mod filename;
mod folder;
mod sanitize;

pub use filename::parse_filename;
pub use folder::FolderNameBuilder;

#[cfg(test)]
mod tests;
