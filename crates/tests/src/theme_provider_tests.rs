use crate::common::render;
use dioxus::prelude::*;
use loading_types::{LoaderConfig, LoaderSettings};
use loading_ui::{LoaderThemeProvider, LoadingSkeleton, LoadingSpinner, SkeletonListItem};

fn themed(settings: LoaderSettings) -> Element {
    rsx! {
        LoaderThemeProvider { settings: settings,
            LoadingSpinner { full_page: true }
            LoadingSkeleton {}
            SkeletonListItem {}
        }
    }
}

fn settings_from(toml: &str) -> LoaderSettings {
    LoaderConfig::from_toml_str(toml).unwrap().settings()
}

#[test]
fn light_mode_palette_reaches_widgets() {
    let html = render(themed, settings_from("[theme]\nmode = \"light\"\n"));
    assert!(html.contains("background-color: #e2e8f0;"));
    assert!(html.contains("background-color: rgba(0,0,0,0.5);"));
    assert!(!html.contains("#1e2d45"));
}

#[test]
fn accent_override_tints_spinner() {
    let html = render(themed, settings_from("[theme]\naccent = \"#f5576c\"\n"));
    assert!(html.contains("border-color: #f5576c;"));
    assert!(!html.contains("#4ade80"));
}

#[test]
fn default_settings_use_dark_palette() {
    let html = render(themed, LoaderSettings::default());
    assert!(html.contains("background-color: #1e2d45;"));
    assert!(html.contains("border-color: #4ade80;"));
}
