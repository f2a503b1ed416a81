use std::path::PathBuf;

/// A directory holding at least one audio file, as found by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumCandidate {
    pub dir: PathBuf,
    /// Audio files directly inside `dir`, ordered by file name.
    pub audio_files: Vec<PathBuf>,
}

impl AlbumCandidate {
    /// Folder name of the album, for display.
    pub fn name(&self) -> String {
        self.dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.dir.display().to_string())
    }
}
