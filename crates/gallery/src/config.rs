use loading_types::{LoaderConfig, LoaderSettings};
use std::path::Path;
use std::sync::OnceLock;

static SETTINGS: OnceLock<LoaderSettings> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "loading.toml";

/// Environment variable that points at a different config file.
const CONFIG_ENV: &str = "LOADING_CONFIG";

/// Read the loader config once and keep the resolved settings for the
/// process lifetime. Only the first call has effect.
///
/// A missing or invalid file falls back to the default dark theme.
pub fn load_settings() -> &'static LoaderSettings {
    SETTINGS.get_or_init(|| {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string());
        settings_from_file(Path::new(&path))
    })
}

fn settings_from_file(path: &Path) -> LoaderSettings {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "loader config not found, using defaults");
            return LoaderSettings::default();
        }
    };

    match LoaderConfig::from_toml_str(&contents) {
        Ok(config) => {
            let settings = config.settings();
            tracing::info!(
                path = %path.display(),
                mode = settings.theme.mode.as_str(),
                frame_rate = settings.animation.frame_rate,
                "loaded loader config"
            );
            settings
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid loader config, using defaults");
            LoaderSettings::default()
        }
    }
}
