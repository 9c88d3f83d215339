//! Widgets mounted inside a tokio runtime drive their animations on real
//! (paused) timers. Each live animation is one runtime task, so the task
//! count shows whether frame loops outlive their widgets.

use crate::common::{advance, alive_tasks, count, mount, opacity};
use dioxus::prelude::*;
use loading_types::SpinnerSize;
use loading_ui::{LoadingSkeleton, LoadingSpinner, SkeletonCard};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn inline_spinner((size, text, full_page): (SpinnerSize, &'static str, bool)) -> Element {
    rsx! {
        LoadingSpinner { size: size, text: text.to_string(), full_page: full_page }
    }
}

fn skeleton(_: ()) -> Element {
    rsx! {
        LoadingSkeleton { width: 120, height: 20.0 }
    }
}

fn card(_: ()) -> Element {
    rsx! {
        SkeletonCard {}
    }
}

#[tokio::test(start_paused = true)]
async fn spinner_mounts_hidden_and_lowered() {
    let (_dom, html) = mount(inline_spinner, (SpinnerSize::Large, "", false));

    assert!(html.contains("opacity: 0.000; transform: translateY(10.00px);"));
    assert_eq!(count(&html, "loader-caption"), 0);
    assert_eq!(count(&html, "loader-overlay"), 0);
    assert!(html.contains("data-size=\"large\""));
}

#[tokio::test(start_paused = true)]
async fn spinner_entrance_runs_once_then_stops() {
    let (_dom, _) = mount(inline_spinner, (SpinnerSize::Large, "", false));
    assert_eq!(alive_tasks(), 1);

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(alive_tasks(), 0);
}

#[tokio::test(start_paused = true)]
async fn skeleton_pulse_loops_until_unmount() {
    let (dom, html) = mount(skeleton, ());
    assert!(html.contains("opacity: 0.300;"));
    assert_eq!(alive_tasks(), 1);

    // Several full cycles later the loop is still alive.
    tokio::time::sleep(Duration::from_millis(1800 * 4)).await;
    assert_eq!(alive_tasks(), 1);

    drop(dom);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(alive_tasks(), 0);
}

#[tokio::test(start_paused = true)]
async fn card_preset_releases_every_loop() {
    let (dom, _) = mount(card, ());
    assert_eq!(alive_tasks(), 5);

    drop(dom);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(alive_tasks(), 0);
}

#[tokio::test(start_paused = true)]
async fn skeleton_opacity_pulses_in_rendered_markup() {
    let (mut dom, html) = mount(skeleton, ());
    assert!(html.contains("data-driver=\"frames\""));
    assert_eq!(opacity(&html), 0.3);

    let mut samples = Vec::new();
    for _ in 0..4 {
        samples.push(opacity(&advance(&mut dom, 450).await));
    }

    for sample in &samples {
        assert!((0.3..=0.7).contains(sample), "opacity {sample} out of range");
    }
    let &[quarter, half, three_quarters, full] = samples.as_slice() else {
        unreachable!()
    };
    assert!((0.4..0.6).contains(&quarter), "rising midpoint was {quarter}");
    assert!(half > 0.65, "peak was {half}");
    assert!((0.4..0.6).contains(&three_quarters), "falling midpoint was {three_quarters}");
    assert!(full < 0.35, "cycle end was {full}");
}

#[tokio::test(start_paused = true)]
async fn spinner_entrance_reaches_rendered_markup() {
    let (mut dom, html) = mount(inline_spinner, (SpinnerSize::Small, "Syncing", false));
    assert_eq!(opacity(&html), 0.0);

    let midway = opacity(&advance(&mut dom, 150).await);
    assert!(midway > 0.0 && midway < 1.0, "midway opacity was {midway}");

    let settled = advance(&mut dom, 200).await;
    assert!(settled.contains("opacity: 1.000; transform: translateY(0.00px);"));
}
