//! Album units: per-track metadata extraction and album-wide consistency.

mod check;
mod extract;
mod model;

pub use check::{ConsistencyReport, check_album};
pub use extract::extract_track;
pub use model::*;
