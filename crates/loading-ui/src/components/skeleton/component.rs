use crate::hooks::{driver_attr, use_frames_driven, use_pulse};
use crate::theme::use_loader_settings;
use dioxus::prelude::*;
use loading_types::Dimension;

/// Accessible name announced for every skeleton block.
pub const SKELETON_LABEL: &str = "Loading...";

/// A solid placeholder block whose opacity pulses between 0.3 and 0.7
/// while content loads.
///
/// Where no frame loop can run, the `data-driver="keyframes"` hook in the
/// stylesheet pulses the block with CSS instead.
///
/// `style` is appended after the computed declarations, so anything it
/// sets wins over the defaults.
#[component]
pub fn LoadingSkeleton(
    #[props(default, into)] width: Dimension,
    #[props(default = 20.0)] height: f32,
    #[props(default = 8.0)] border_radius: f32,
    #[props(default)] style: String,
    #[props(default)] class: String,
) -> Element {
    let settings = use_loader_settings();
    let opacity = use_pulse();
    let driven = use_frames_driven();

    let style = skeleton_style(
        &settings.theme.skeleton_fill,
        width,
        height,
        border_radius,
        *opacity.read(),
        &style,
    );
    let class = if class.is_empty() {
        "loader-skeleton".to_string()
    } else {
        format!("loader-skeleton {class}")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: class,
            role: "progressbar",
            "aria-label": SKELETON_LABEL,
            "aria-busy": "true",
            "data-driver": driver_attr(driven),
            style: style,
        }
    }
}

fn skeleton_style(
    fill: &str,
    width: Dimension,
    height: f32,
    border_radius: f32,
    opacity: f32,
    overrides: &str,
) -> String {
    let mut style = format!(
        "background-color: {fill}; width: {width}; height: {height}px; border-radius: {border_radius}px; opacity: {opacity:.3};"
    );
    let overrides = overrides.trim();
    if !overrides.is_empty() {
        style.push(' ');
        style.push_str(overrides);
    }
    style
}
