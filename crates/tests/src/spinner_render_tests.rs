//! Static rendering of the spinner. No async runtime is running here, so
//! the entrance animation shows its settled frame.

use crate::common::{count, render};
use dioxus::prelude::*;
use loading_types::SpinnerSize;
use loading_ui::LoadingSpinner;
use pretty_assertions::assert_eq;

fn spinner_of_size(key: &'static str) -> Element {
    rsx! {
        LoadingSpinner { size: SpinnerSize::from(key) }
    }
}

fn spinner_with_text(text: &'static str) -> Element {
    rsx! {
        LoadingSpinner { text: text.to_string() }
    }
}

fn default_spinner(_: ()) -> Element {
    rsx! {
        LoadingSpinner {}
    }
}

fn spinner_full_page(full_page: bool) -> Element {
    rsx! {
        LoadingSpinner { full_page: full_page }
    }
}

fn spinner_with_color(color: &'static str) -> Element {
    rsx! {
        LoadingSpinner { color: color.to_string(), text: "Syncing".to_string() }
    }
}

#[test]
fn every_size_key_renders_a_tier() {
    let cases = [
        ("small", "small"),
        ("medium", "large"),
        ("large", "large"),
        ("xlarge", "large"),
        ("bogus", "large"),
    ];
    for (key, tier) in cases {
        let html = render(spinner_of_size, key);
        assert_eq!(count(&html, "class=\"loader-indicator\""), 1, "size {key}");
        assert!(
            html.contains(&format!("data-size=\"{tier}\"")),
            "size {key} should render the {tier} tier: {html}"
        );
    }
}

#[test]
fn unknown_size_uses_large_not_medium() {
    let html = render(spinner_of_size, "bogus");
    assert!(html.contains("data-spinner-size=\"large\""));
    assert!(html.contains("width: 36px; height: 36px;"));
}

#[test]
fn default_caption_is_loading() {
    let html = render(default_spinner, ());
    assert_eq!(count(&html, "loader-caption"), 1);
    assert!(html.contains("Loading...</span>"));
}

#[test]
fn empty_text_renders_no_caption() {
    let html = render(spinner_with_text, "");
    assert_eq!(count(&html, "loader-caption"), 0);
    assert_eq!(count(&html, "<span"), 0);
    assert_eq!(count(&html, "class=\"loader-indicator\""), 1);
}

#[test]
fn caption_content_equals_text() {
    let html = render(spinner_with_text, "Fetching listings");
    assert_eq!(count(&html, "loader-caption"), 1);
    assert!(html.contains(">Fetching listings</span>"));
}

#[test]
fn full_page_wraps_in_blocking_overlay() {
    let html = render(spinner_full_page, true);
    assert_eq!(count(&html, "class=\"loader-overlay\""), 1);
    assert!(html.contains("aria-modal=\"true\""));
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("background-color: rgba(10,15,30,0.75);"));
    assert!(html.contains("data-mode=\"overlay\""));
}

#[test]
fn inline_spinner_has_no_overlay() {
    let html = render(spinner_full_page, false);
    assert_eq!(count(&html, "loader-overlay"), 0);
    assert_eq!(count(&html, "aria-modal"), 0);
    assert!(html.contains("data-mode=\"inline\""));
    assert!(html.contains("role=\"status\""));
}

#[test]
fn default_color_is_theme_accent() {
    let html = render(default_spinner, ());
    assert!(html.contains("border-color: #4ade80;"));
    assert!(html.contains("color: #4ade80;"));
}

#[test]
fn color_tints_indicator_and_caption() {
    let html = render(spinner_with_color, "#f093fb");
    assert!(html.contains("border-color: #f093fb;"));
    assert!(html.contains("color: #f093fb; font-size: 14px;"));
    assert!(!html.contains("#4ade80"));
}

#[test]
fn without_runtime_the_settled_frame_is_shown() {
    let html = render(default_spinner, ());
    assert!(html.contains("opacity: 1.000; transform: translateY(0.00px);"));
}

#[test]
fn without_runtime_the_stylesheet_plays_the_entrance() {
    let html = render(default_spinner, ());
    assert!(html.contains("data-driver=\"keyframes\""));
}
