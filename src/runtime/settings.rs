use tracing::warn;

use crate::config::Settings;

/// Load settings, falling back to defaults. A bad config file never stops a run.
pub fn load_settings() -> Settings {
    let loaded = Settings::load()
        .map_err(|e| format!("failed to load config: {e}"))
        .and_then(|s| s.validate().map(|()| s).map_err(|msg| format!("invalid config: {msg}")));

    loaded.unwrap_or_else(|msg| {
        warn!("{msg}, using defaults");
        Settings::default()
    })
}
