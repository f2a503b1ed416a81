//! User settings: library scanning, allowed album artists, folder naming
//! rules and issue log locations.
//!
//! Settings come from an optional TOML file plus `RESHELVE__*` environment
//! overrides; every key has a default.

mod load;
mod schema;

pub use schema::*;
