//! Emotion labels and how they are displayed.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Color used for labels that have no entry in [`EMOTION_COLORS`].
pub const DEFAULT_EMOTION_COLOR: &str = "#e0e0e0";

/// Label shown before the first poll lands.
pub const WAITING_LABEL: &str = "Waiting...";

/// Display color for every label the detection service is known to report.
pub static EMOTION_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("angry", "#ff5252"),
        ("disgust", "#8bc34a"),
        ("fear", "#9c27b0"),
        ("happy", "#ffeb3b"),
        ("sad", "#2196f3"),
        ("surprise", "#ff9800"),
        ("neutral", "#e0e0e0"),
    ])
});

/// Looks up the display color for a label, falling back to the default.
///
/// Matching is exact: the service reports lowercase labels and anything else
/// is treated as unrecognized.
pub fn emotion_color(label: &str) -> &'static str {
    EMOTION_COLORS
        .get(label)
        .copied()
        .unwrap_or(DEFAULT_EMOTION_COLOR)
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn display_label(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// What the emotion label on the page should read.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionDisplay {
    pub text: String,
    pub color: &'static str,
}

impl EmotionDisplay {
    pub fn from_label(label: &str) -> Self {
        Self {
            text: display_label(label),
            color: emotion_color(label),
        }
    }
}

impl Default for EmotionDisplay {
    fn default() -> Self {
        Self {
            text: WAITING_LABEL.to_string(),
            color: DEFAULT_EMOTION_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_use_their_color() {
        assert_eq!(emotion_color("happy"), "#ffeb3b");
        assert_eq!(emotion_color("angry"), "#ff5252");
        assert_eq!(emotion_color("sad"), "#2196f3");
        assert_eq!(EMOTION_COLORS.len(), 7);
    }

    #[test]
    fn unknown_label_falls_back_to_default_color() {
        let display = EmotionDisplay::from_label("contempt");
        assert_eq!(display.text, "Contempt");
        assert_eq!(display.color, DEFAULT_EMOTION_COLOR);
        assert_eq!(emotion_color("Happy"), DEFAULT_EMOTION_COLOR);
    }

    #[test]
    fn capitalizes_only_the_first_character() {
        assert_eq!(display_label("happy"), "Happy");
        assert_eq!(display_label("sUrprise"), "SUrprise");
        assert_eq!(display_label("é"), "É");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn initial_display_is_waiting_in_default_color() {
        let display = EmotionDisplay::default();
        assert_eq!(display.text, WAITING_LABEL);
        assert_eq!(display.color, DEFAULT_EMOTION_COLOR);
    }
}
