pub mod animation;
pub mod config;
pub mod dimension;
pub mod error;
pub mod size;
pub mod theme;

pub use animation::*;
pub use config::*;
pub use dimension::*;
pub use error::*;
pub use size::*;
pub use theme::*;
