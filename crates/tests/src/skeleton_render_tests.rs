use crate::common::{count, render};
use dioxus::prelude::*;
use loading_types::Dimension;
use loading_ui::LoadingSkeleton;
use pretty_assertions::assert_eq;

fn default_skeleton(_: ()) -> Element {
    rsx! {
        LoadingSkeleton {}
    }
}

fn sized_skeleton((width, height): (Dimension, f32)) -> Element {
    rsx! {
        LoadingSkeleton { width: width, height: height }
    }
}

fn styled_skeleton(style: &'static str) -> Element {
    rsx! {
        LoadingSkeleton { style: style.to_string(), class: "avatar".to_string() }
    }
}

#[test]
fn renders_single_progressbar_node() {
    let html = render(sized_skeleton, (Dimension::from(120), 20.0));
    assert_eq!(count(&html, "role=\"progressbar\""), 1);
    assert_eq!(count(&html, "<div"), 1);
    assert!(html.contains("aria-label=\"Loading...\""));
    assert!(html.contains("width: 120px; height: 20px; border-radius: 8px;"));
}

#[test]
fn defaults_fill_parent_width() {
    let html = render(default_skeleton, ());
    assert!(html.contains("background-color: #1e2d45; width: 100%; height: 20px; border-radius: 8px;"));
}

#[test]
fn percentage_width_is_kept() {
    let html = render(sized_skeleton, (Dimension::percent(55.0), 14.0));
    assert!(html.contains("width: 55%; height: 14px;"));
}

#[test]
fn opacity_starts_at_lower_bound() {
    let html = render(default_skeleton, ());
    assert!(html.contains("opacity: 0.300;"));
}

#[test]
fn caller_style_is_merged_last() {
    let html = render(styled_skeleton, "margin-top: 10px; border-radius: 0px;");
    let base = html.find("border-radius: 8px;").unwrap();
    let overridden = html.find("border-radius: 0px;").unwrap();
    assert!(overridden > base);
    assert!(html.contains("opacity: 0.300; margin-top: 10px; border-radius: 0px;"));
}

#[test]
fn extra_class_is_appended() {
    let html = render(styled_skeleton, "");
    assert!(html.contains("class=\"loader-skeleton avatar\""));
}

#[test]
fn without_runtime_the_stylesheet_pulses() {
    let html = render(default_skeleton, ());
    assert!(html.contains("data-driver=\"keyframes\""));
    assert_eq!(count(&html, "data-driver"), 1);
}
