use crate::error::LoaderError;
use std::fmt;
use std::str::FromStr;

/// Requested spinner scale.
///
/// Only two indicator tiers exist underneath; see [`SpinnerSize::indicator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

/// All spinner sizes in ascending order.
pub const ALL_SIZES: &[SpinnerSize] = &[
    SpinnerSize::Small,
    SpinnerSize::Medium,
    SpinnerSize::Large,
    SpinnerSize::XLarge,
];

impl SpinnerSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "small",
            SpinnerSize::Medium => "medium",
            SpinnerSize::Large => "large",
            SpinnerSize::XLarge => "xlarge",
        }
    }

    /// Look up a size by key. Returns `None` for anything unrecognized.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "small" => Some(SpinnerSize::Small),
            "medium" => Some(SpinnerSize::Medium),
            "large" => Some(SpinnerSize::Large),
            "xlarge" => Some(SpinnerSize::XLarge),
            _ => None,
        }
    }

    /// The indicator tier this size renders with.
    pub fn indicator(&self) -> IndicatorSize {
        match self {
            SpinnerSize::Small => IndicatorSize::Small,
            SpinnerSize::Medium | SpinnerSize::Large | SpinnerSize::XLarge => IndicatorSize::Large,
        }
    }
}

impl fmt::Display for SpinnerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpinnerSize {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpinnerSize::from_key(s)
            .ok_or_else(|| LoaderError::unknown_size(format!("unknown spinner size `{s}`")))
    }
}

/// Lenient conversion used by component props: unknown keys fall back to
/// `Large`, never `Medium`.
impl From<&str> for SpinnerSize {
    fn from(key: &str) -> Self {
        SpinnerSize::from_key(key).unwrap_or_else(|| {
            tracing::debug!(key, "unknown spinner size, using large");
            SpinnerSize::Large
        })
    }
}

impl From<String> for SpinnerSize {
    fn from(key: String) -> Self {
        SpinnerSize::from(key.as_str())
    }
}

/// The two effective indicator tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorSize {
    Small,
    #[default]
    Large,
}

impl IndicatorSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorSize::Small => "small",
            IndicatorSize::Large => "large",
        }
    }

    /// Indicator diameter in layout units.
    pub fn diameter(&self) -> f32 {
        match self {
            IndicatorSize::Small => 20.0,
            IndicatorSize::Large => 36.0,
        }
    }
}
