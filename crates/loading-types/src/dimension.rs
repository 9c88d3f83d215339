use crate::error::LoaderError;
use std::fmt;
use std::str::FromStr;

/// A length that is either absolute or relative to the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Px(f32),
    Percent(f32),
}

impl Dimension {
    pub fn px(value: f32) -> Self {
        Dimension::Px(value)
    }

    pub fn percent(value: f32) -> Self {
        Dimension::Percent(value)
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::Percent(100.0)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Px(value) => write!(f, "{value}px"),
            Dimension::Percent(value) => write!(f, "{value}%"),
        }
    }
}

impl From<i32> for Dimension {
    fn from(value: i32) -> Self {
        Dimension::Px(value as f32)
    }
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Dimension::Px(value)
    }
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Dimension::Px(value as f32)
    }
}

/// Accepts `"55%"`, `"120"` and `"120px"`.
impl FromStr for Dimension {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || LoaderError::invalid_dimension(format!("cannot parse dimension `{s}`"));

        let (number, percent) = if let Some(rest) = trimmed.strip_suffix('%') {
            (rest, true)
        } else if let Some(rest) = trimmed.strip_suffix("px") {
            (rest, false)
        } else {
            (trimmed, false)
        };

        let value: f32 = number.trim().parse().map_err(|_| invalid())?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid());
        }

        Ok(if percent {
            Dimension::Percent(value)
        } else {
            Dimension::Px(value)
        })
    }
}
