// Localized UI strings

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "en")]
    English,
}

/// Label shown on the code-listing toggle.
///
/// `Show` is displayed while the listing is hidden, `Hide` while it is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleLabel {
    Show,
    Hide,
}

impl Locale {
    pub fn toggle_label(&self, label: ToggleLabel) -> &'static str {
        match (self, label) {
            (Self::Portuguese, ToggleLabel::Show) => "Ver algoritmo",
            (Self::Portuguese, ToggleLabel::Hide) => "Ocultar algoritmo",
            (Self::English, ToggleLabel::Show) => "Show algorithm",
            (Self::English, ToggleLabel::Hide) => "Hide algorithm",
        }
    }

    pub fn watch_video(&self) -> &'static str {
        match self {
            Self::Portuguese => "▶ Assistir vídeo",
            Self::English => "▶ Watch video",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Portuguese => "Árvores",
            Self::English => "Trees",
        }
    }

    pub fn video_blocked(&self) -> &'static str {
        match self {
            Self::Portuguese => "Link de vídeo não confiável",
            Self::English => "Untrusted video link",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_portuguese() {
        assert_eq!(Locale::default(), Locale::Portuguese);
        assert_eq!(Locale::default().toggle_label(ToggleLabel::Show), "Ver algoritmo");
    }

    #[test]
    fn test_labels_differ_per_state() {
        for locale in [Locale::Portuguese, Locale::English] {
            assert_ne!(
                locale.toggle_label(ToggleLabel::Show),
                locale.toggle_label(ToggleLabel::Hide)
            );
        }
    }

    #[test]
    fn test_locale_codes() {
        #[derive(Deserialize)]
        struct Wrapper {
            locale: Locale,
        }
        let parsed: Wrapper = toml::from_str("locale = \"en\"").expect("Failed to parse");
        assert_eq!(parsed.locale, Locale::English);
    }
}
