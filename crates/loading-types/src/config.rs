use crate::error::LoaderError;
use crate::theme::{LoaderTheme, ThemeMode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Frame rates accepted in `[animation] frame_rate`.
pub const FRAME_RATE_RANGE: std::ops::RangeInclusive<u32> = 1..=240;

fn default_frame_rate() -> u32 {
    60
}

/// Palette selection plus optional per-colour overrides.
///
/// Every field is optional so a partial `[theme]` table only changes what
/// it names.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default)]
    pub skeleton_fill: Option<String>,
    #[serde(default)]
    pub card_background: Option<String>,
    #[serde(default)]
    pub card_border: Option<String>,
    #[serde(default)]
    pub backdrop: Option<String>,
}

impl ThemeConfig {
    /// Resolve the palette for `mode`, then apply the overrides.
    pub fn resolve(&self) -> LoaderTheme {
        let mut theme = LoaderTheme::for_mode(ThemeMode::from_key(&self.mode));
        let overrides = [
            (&self.accent, &mut theme.accent),
            (&self.skeleton_fill, &mut theme.skeleton_fill),
            (&self.card_background, &mut theme.card_background),
            (&self.card_border, &mut theme.card_border),
            (&self.backdrop, &mut theme.backdrop),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value.as_ref().filter(|v| !v.trim().is_empty()) {
                *slot = value.clone();
            }
        }
        theme
    }
}

/// Frame loop settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnimationSettings {
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
}

impl AnimationSettings {
    /// Time between two frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
        }
    }
}

/// Top-level config file structure matching `loading.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LoaderConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub animation: AnimationSettings,
}

impl LoaderConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, LoaderError> {
        let config: LoaderConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LoaderError> {
        if !FRAME_RATE_RANGE.contains(&self.animation.frame_rate) {
            return Err(LoaderError::invalid_config(format!(
                "animation.frame_rate must be within {}..={}, got {}",
                FRAME_RATE_RANGE.start(),
                FRAME_RATE_RANGE.end(),
                self.animation.frame_rate
            )));
        }
        Ok(())
    }

    /// Everything the widgets need at render time.
    pub fn settings(&self) -> LoaderSettings {
        LoaderSettings {
            theme: self.theme.resolve(),
            animation: self.animation,
        }
    }
}

/// Resolved theme and animation settings shared with the component tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoaderSettings {
    pub theme: LoaderTheme,
    pub animation: AnimationSettings,
}
