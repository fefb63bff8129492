use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse the `theme.mode` config value; anything but "light" is dark.
    pub fn from_mode(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("light") {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Self::Light => egui::Visuals::light(),
            Self::Dark => egui::Visuals::dark(),
        }
    }

    /// syntect theme used for code listings
    pub fn syntax_theme(&self) -> &'static str {
        match self {
            Self::Light => "base16-ocean.light",
            Self::Dark => "base16-ocean.dark",
        }
    }

    pub fn accent(&self) -> egui::Color32 {
        match self {
            Self::Light => egui::Color32::from_rgb(30, 100, 200),
            Self::Dark => egui::Color32::from_rgb(120, 180, 255),
        }
    }
}

// --- Sizing ---
pub const HEADER_HEIGHT: f32 = 36.0;
pub const NAV_ITEM_MIN_WIDTH: f32 = 90.0;
pub const CARD_SPACING: f32 = 24.0;
pub const CARD_PADDING: f32 = 12.0;
pub const CARD_MAX_WIDTH: f32 = 900.0;
pub const TITLE_SIZE: f32 = 22.0;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

// --- Code listing ---
pub const MAX_HIGHLIGHTED_LINES: usize = 1000;

// --- Helper functions ---

pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}
