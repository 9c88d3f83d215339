pub mod skeleton;
pub mod skeleton_presets;
pub mod spinner;

pub use skeleton::*;
pub use skeleton_presets::*;
pub use spinner::*;
