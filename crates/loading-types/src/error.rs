use std::fmt;

/// Categorization of loader errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderErrorKind {
    UnknownSize,
    InvalidDimension,
    InvalidConfig,
}

impl fmt::Display for LoaderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderErrorKind::UnknownSize => write!(f, "UnknownSize"),
            LoaderErrorKind::InvalidDimension => write!(f, "InvalidDimension"),
            LoaderErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
        }
    }
}

/// Error produced by strict parsing and config loading.
///
/// Widgets themselves never fail: a bad `size` key degrades to the large
/// indicator tier instead of surfacing one of these.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderError {
    pub kind: LoaderErrorKind,
    pub message: String,
}

impl LoaderError {
    pub fn unknown_size(message: impl Into<String>) -> Self {
        Self {
            kind: LoaderErrorKind::UnknownSize,
            message: message.into(),
        }
    }

    pub fn invalid_dimension(message: impl Into<String>) -> Self {
        Self {
            kind: LoaderErrorKind::InvalidDimension,
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: LoaderErrorKind::InvalidConfig,
            message: message.into(),
        }
    }
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for LoaderError {}

impl From<toml::de::Error> for LoaderError {
    fn from(err: toml::de::Error) -> Self {
        LoaderError::invalid_config(err.to_string())
    }
}
