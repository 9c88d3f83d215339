use dioxus::prelude::*;
use loading_types::{LoaderSettings, LoaderTheme, SpinnerSize, ThemeMode, ALL_SIZES};
use loading_ui::{
    LoaderThemeProvider, LoadingSkeleton, LoadingSpinner, SkeletonCard, SkeletonListItem,
};

mod config;

fn main() {
    // Dioxus owns the tracing subscriber.
    dioxus::logger::initialize_default();

    let settings = config::load_settings();
    tracing::info!(platform = client_platform(), "starting loader gallery");
    tracing::debug!(?settings, "resolved loader settings");

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let base = config::load_settings().clone();
    let mut mode = use_signal(|| base.theme.mode);
    let mut show_overlay = use_signal(|| false);

    // Overrides from the config file apply to the configured mode only;
    // toggling switches to the stock palette of the other mode.
    let settings = if mode() == base.theme.mode {
        base.clone()
    } else {
        LoaderSettings {
            theme: LoaderTheme::for_mode(mode()),
            animation: base.animation,
        }
    };
    let mode_key = mode().as_str();
    let page_style = match mode() {
        ThemeMode::Dark => "background: #0f172a; color: #f1f5f9; min-height: 100vh; padding: 24px;",
        ThemeMode::Light => "background: #f7fafc; color: #2d3748; min-height: 100vh; padding: 24px;",
    };

    rsx! {
        // Keyed on the mode so every widget remounts with the new theme.
        LoaderThemeProvider { key: "{mode_key}", settings: settings,
            div { style: page_style,
                h1 { "Loading states" }
                button {
                    onclick: move |_| {
                        let next = match mode() {
                            ThemeMode::Dark => ThemeMode::Light,
                            ThemeMode::Light => ThemeMode::Dark,
                        };
                        tracing::debug!(mode = next.as_str(), "switching gallery theme");
                        mode.set(next);
                    },
                    "Toggle theme ({mode_key})"
                }

                h2 { "Spinner sizes" }
                div { style: "display: flex; flex-wrap: wrap; gap: 16px;",
                    for size in ALL_SIZES.iter().copied() {
                        LoadingSpinner { key: "{size}", size: size, text: size.as_str().to_string() }
                    }
                    // Unknown keys render the large tier.
                    LoadingSpinner { size: SpinnerSize::from("bogus"), text: "bogus".to_string() }
                }

                h2 { "Without caption" }
                LoadingSpinner { size: SpinnerSize::Large, text: String::new() }

                h2 { "Custom colour" }
                LoadingSpinner { color: "#f093fb", text: "Fetching listings..." }

                h2 { "Full page" }
                button { onclick: move |_| show_overlay.set(true), "Show overlay" }
                if show_overlay() {
                    div { onclick: move |_| show_overlay.set(false),
                        LoadingSpinner { full_page: true, text: "Tap to dismiss" }
                    }
                }

                h2 { "Skeleton" }
                LoadingSkeleton { width: 120, height: 20.0 }
                LoadingSkeleton { style: "margin-top: 12px;" }

                h2 { "Card preset" }
                SkeletonCard {}
                SkeletonCard {}

                h2 { "List item preset" }
                for i in 0..3 {
                    SkeletonListItem { key: "{i}" }
                }
            }
        }
    }
}
