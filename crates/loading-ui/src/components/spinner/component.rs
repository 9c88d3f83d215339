use crate::hooks::{driver_attr, use_entrance, use_frames_driven};
use crate::theme::use_loader_settings;
use dioxus::prelude::*;
use loading_types::{EntranceFrame, IndicatorSize, LoaderTheme, SpinnerSize};

/// Caption shown when no `text` is given.
pub const DEFAULT_CAPTION: &str = "Loading...";

/// Activity indicator with an optional caption that fades and slides in on
/// mount.
///
/// With `full_page` the spinner sits in a fixed overlay that covers the
/// viewport and swallows pointer events; otherwise it renders inline,
/// centred in its parent. Where no frame loop can run, the stylesheet plays
/// the entrance as a keyframe animation.
#[component]
pub fn LoadingSpinner(
    /// Requested scale. Unknown keys passed as strings render the large tier.
    #[props(default, into)]
    size: SpinnerSize,
    /// Caption below the indicator. Empty renders no caption.
    #[props(default = DEFAULT_CAPTION.to_string())]
    text: String,
    /// Render inside a blocking full-screen overlay.
    #[props(default = false)]
    full_page: bool,
    /// Indicator and caption tint. Empty uses the theme accent.
    #[props(default)]
    color: String,
) -> Element {
    let settings = use_loader_settings();
    let entrance = use_entrance();
    let driven = use_frames_driven();

    let theme = &settings.theme;
    let color = if color.trim().is_empty() {
        theme.accent.clone()
    } else {
        color
    };
    let tier = size.indicator();
    let mode = if full_page { "overlay" } else { "inline" };
    let frame = *entrance.read();

    let content = rsx! {
        div {
            class: "loader-spinner",
            role: "status",
            "aria-live": "polite",
            "aria-busy": "true",
            "data-mode": mode,
            "data-spinner-size": size.as_str(),
            "data-driver": driver_attr(driven),
            style: spinner_style(theme, &frame),
            div {
                class: "loader-indicator",
                "data-size": tier.as_str(),
                style: indicator_style(tier, &color),
            }
            if !text.is_empty() {
                span {
                    class: "loader-caption",
                    style: caption_style(theme, &color),
                    "{text}"
                }
            }
        }
    };

    if full_page {
        let backdrop = theme.backdrop.clone();
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            div {
                class: "loader-overlay",
                role: "dialog",
                "aria-modal": "true",
                style: "background-color: {backdrop};",
                {content}
            }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        {content}
    }
}

fn spinner_style(theme: &LoaderTheme, frame: &EntranceFrame) -> String {
    format!(
        "gap: {}px; padding: {}px; opacity: {:.3}; transform: translateY({:.2}px);",
        theme.spinner_gap, theme.spinner_padding, frame.opacity, frame.translate_y
    )
}

fn indicator_style(tier: IndicatorSize, color: &str) -> String {
    let diameter = tier.diameter();
    format!(
        "width: {diameter}px; height: {diameter}px; border-color: {color}; border-top-color: transparent;"
    )
}

fn caption_style(theme: &LoaderTheme, color: &str) -> String {
    format!(
        "color: {color}; font-size: {}px; font-weight: {};",
        theme.caption_font_size, theme.caption_font_weight
    )
}
