use dioxus::prelude::*;
use loading_types::LoaderSettings;

/// Provide loader theme and animation settings to every widget below.
///
/// Widgets rendered outside a provider fall back to
/// [`LoaderSettings::default`] (dark palette, 60 fps).
#[component]
pub fn LoaderThemeProvider(settings: LoaderSettings, children: Element) -> Element {
    use_context_provider(|| settings.clone());

    rsx! {
        {children}
    }
}

/// Settings from the nearest [`LoaderThemeProvider`], or the defaults.
pub fn use_loader_settings() -> LoaderSettings {
    try_use_context::<LoaderSettings>().unwrap_or_default()
}
