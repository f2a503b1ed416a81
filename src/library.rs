//! Library walker: groups audio files on disk into album candidates.

mod model;
mod scan;

pub use model::AlbumCandidate;
pub use scan::walk_albums;
