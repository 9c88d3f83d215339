//! Loading-state widgets for Dioxus: a fading spinner, a pulsing skeleton
//! block and two skeleton layouts built from it.

pub mod components;
pub mod driver;
pub mod hooks;
pub mod theme;

pub use components::*;
pub use theme::*;

/// The spinner is the widget most screens reach for.
pub use components::LoadingSpinner as Loading;
