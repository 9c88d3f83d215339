/// Colour modes the loaders can render in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// All available modes in display order.
pub const ALL_MODES: &[ThemeMode] = &[ThemeMode::Dark, ThemeMode::Light];

impl ThemeMode {
    /// Internal key used in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Parse a mode key, falling back to Dark.
    pub fn from_key(s: &str) -> Self {
        match s {
            "light" => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }
}

/// Colours and metrics shared by every loader widget.
///
/// Provided to the component tree as context so nothing reads module-level
/// constants. Metrics are in layout units (CSS pixels on the web).
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderTheme {
    pub mode: ThemeMode,
    /// Default tint for the spinner indicator and caption.
    pub accent: String,
    pub skeleton_fill: String,
    pub card_background: String,
    pub card_border: String,
    /// Full-page overlay backdrop.
    pub backdrop: String,

    pub spinner_gap: f32,
    pub spinner_padding: f32,
    pub caption_font_size: f32,
    pub caption_font_weight: u16,

    pub card_radius: f32,
    pub card_padding: f32,
    pub card_gap: f32,
    pub card_margin_bottom: f32,
    pub row_gap: f32,

    pub list_item_gap: f32,
    pub list_item_padding_x: f32,
    pub list_item_padding_y: f32,
}

impl LoaderTheme {
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            accent: "#4ade80".to_string(),
            skeleton_fill: "#1e2d45".to_string(),
            card_background: "#131c2e".to_string(),
            card_border: "#1e2d45".to_string(),
            backdrop: "rgba(10,15,30,0.75)".to_string(),
            ..Self::metrics()
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            accent: "#4ade80".to_string(),
            skeleton_fill: "#e2e8f0".to_string(),
            card_background: "#ffffff".to_string(),
            card_border: "#e2e8f0".to_string(),
            backdrop: "rgba(0,0,0,0.5)".to_string(),
            ..Self::metrics()
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    // Layout metrics are identical across modes; colours are filled in by
    // the palette constructors.
    fn metrics() -> Self {
        Self {
            mode: ThemeMode::default(),
            accent: String::new(),
            skeleton_fill: String::new(),
            card_background: String::new(),
            card_border: String::new(),
            backdrop: String::new(),
            spinner_gap: 12.0,
            spinner_padding: 16.0,
            caption_font_size: 14.0,
            caption_font_weight: 500,
            card_radius: 16.0,
            card_padding: 16.0,
            card_gap: 8.0,
            card_margin_bottom: 12.0,
            row_gap: 10.0,
            list_item_gap: 12.0,
            list_item_padding_x: 16.0,
            list_item_padding_y: 12.0,
        }
    }
}

impl Default for LoaderTheme {
    fn default() -> Self {
        Self::dark()
    }
}
