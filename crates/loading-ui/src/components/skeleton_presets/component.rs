use crate::components::skeleton::LoadingSkeleton;
use crate::theme::use_loader_settings;
use dioxus::prelude::*;
use loading_types::Dimension;

/// Placeholder for a content card: title, two body lines, two buttons.
#[component]
pub fn SkeletonCard() -> Element {
    let theme = use_loader_settings().theme;
    let card_style = format!(
        "background-color: {}; border-color: {}; border-radius: {}px; padding: {}px; margin-bottom: {}px; gap: {}px;",
        theme.card_background,
        theme.card_border,
        theme.card_radius,
        theme.card_padding,
        theme.card_margin_bottom,
        theme.card_gap,
    );
    let row_style = format!("gap: {gap}px; margin-top: {gap}px;", gap = theme.row_gap);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loader-skeleton-card", style: card_style,
            LoadingSkeleton { width: Dimension::percent(60.0), height: 18.0, border_radius: 6.0 }
            LoadingSkeleton {
                width: Dimension::percent(100.0),
                height: 12.0,
                border_radius: 6.0,
                style: "margin-top: 10px;",
            }
            LoadingSkeleton {
                width: Dimension::percent(80.0),
                height: 12.0,
                border_radius: 6.0,
                style: "margin-top: 6px;",
            }
            div { class: "loader-skeleton-card-row", style: row_style,
                LoadingSkeleton { width: 80, height: 28.0, border_radius: 8.0 }
                LoadingSkeleton { width: 80, height: 28.0, border_radius: 8.0 }
            }
        }
    }
}

/// Placeholder for a list row: round avatar beside two text lines.
#[component]
pub fn SkeletonListItem() -> Element {
    let theme = use_loader_settings().theme;
    let row_style = format!(
        "gap: {}px; padding: {}px {}px; border-bottom-color: {};",
        theme.list_item_gap, theme.list_item_padding_y, theme.list_item_padding_x, theme.card_border,
    );

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loader-skeleton-list-item", style: row_style,
            LoadingSkeleton { width: 44, height: 44.0, border_radius: 22.0 }
            div { class: "loader-skeleton-list-text", style: "gap: 8px;",
                LoadingSkeleton { width: Dimension::percent(55.0), height: 14.0, border_radius: 6.0 }
                LoadingSkeleton { width: Dimension::percent(80.0), height: 11.0, border_radius: 6.0 }
            }
        }
    }
}
