// Builder: assemble a UI theme step by step.
//
// The builder is mutable and reusable: setters take `&mut self`, and every
// `create_theme` call produces a fresh theme from whatever was set so far.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlaygroundError, Result};
use crate::harness::{Pattern, Suite};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Red,
    Green,
    Blue,
    Rgb(u8, u8, u8),
}

impl Color {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0, 0, 0),
            Color::White => (255, 255, 255),
            Color::Red => (255, 0, 0),
            Color::Green => (0, 255, 0),
            Color::Blue => (0, 0, 255),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.rgb();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub background_color: Color,
    pub text_color: Color,
}

impl Theme {
    pub fn new(background_color: Color, text_color: Color) -> Self {
        Self {
            background_color,
            text_color,
        }
    }

    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThemeBuilder {
    background_color: Option<Color>,
    text_color: Option<Color>,
}

impl ThemeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_background(&mut self, color: Color) -> &mut Self {
        self.background_color = Some(color);
        self
    }

    pub fn set_text(&mut self, color: Color) -> &mut Self {
        self.text_color = Some(color);
        self
    }

    /// Fails with the first required field that was never set.
    pub fn try_build(&self) -> Result<Theme> {
        let background_color = self.background_color.ok_or(PlaygroundError::IncompleteTheme {
            field: "background_color",
        })?;
        let text_color = self
            .text_color
            .ok_or(PlaygroundError::IncompleteTheme { field: "text_color" })?;

        Ok(Theme::new(background_color, text_color))
    }

    pub fn create_theme(&self) -> Option<Theme> {
        match self.try_build() {
            Ok(theme) => Some(theme),
            Err(err) => {
                tracing::debug!(%err, "theme builder is incomplete");
                None
            }
        }
    }
}

pub fn demo_suite() -> Suite {
    let mut suite = Suite::new(Pattern::Builder);

    let mut builder = ThemeBuilder::new();
    builder.set_text(Color::White);
    builder.set_background(Color::Black);

    let expected = Theme::new(Color::Black, Color::White);
    let built = builder.create_theme();
    suite.check("complete builder creates a theme", built.is_some());
    suite.check_eq(
        "background color",
        built.map(|t| t.background_color),
        Some(expected.background_color),
    );
    suite.check_eq("text color", built.map(|t| t.text_color), Some(expected.text_color));

    let mut partial = ThemeBuilder::new();
    partial.set_text(Color::White);
    suite.check_eq("incomplete builder creates nothing", partial.create_theme(), None);

    suite
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured_builder() -> ThemeBuilder {
        let mut builder = ThemeBuilder::new();
        builder.set_text(Color::White).set_background(Color::Black);
        builder
    }

    #[test]
    fn test_builder_creates_theme() {
        assert!(configured_builder().create_theme().is_some());
    }

    #[test]
    fn test_builder_matches_direct_construction() {
        let theme = Theme::new(Color::Black, Color::White);
        assert_eq!(configured_builder().create_theme(), Some(theme));
    }

    #[test]
    fn test_missing_fields() {
        let builder = ThemeBuilder::new();
        assert_eq!(builder.create_theme(), None);
        assert_eq!(
            builder.try_build(),
            Err(PlaygroundError::IncompleteTheme {
                field: "background_color"
            })
        );

        let mut builder = ThemeBuilder::new();
        builder.set_background(Color::Black);
        assert_eq!(
            builder.try_build(),
            Err(PlaygroundError::IncompleteTheme { field: "text_color" })
        );
    }

    #[test]
    fn test_builder_is_reusable() {
        let mut builder = configured_builder();
        let first = builder.create_theme().unwrap();

        builder.set_background(Color::Rgb(18, 18, 18));
        let second = builder.create_theme().unwrap();

        assert_eq!(first.background_color, Color::Black);
        assert_eq!(second.background_color, Color::Rgb(18, 18, 18));
        assert_eq!(second.text_color, Color::White);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::White.to_string(), "#ffffff");
        assert_eq!(Color::Rgb(1, 2, 171).to_string(), "#0102ab");
    }

    #[test]
    fn test_theme_serde() {
        let theme = Theme::new(Color::Black, Color::Rgb(250, 250, 250));
        let json = serde_json::to_string(&theme).unwrap();
        assert_eq!(
            json,
            r#"{"background_color":"black","text_color":{"rgb":[250,250,250]}}"#
        );
        assert_eq!(serde_json::from_str::<Theme>(&json).unwrap(), theme);
    }

    #[test]
    fn test_demo_suite_passes() {
        assert!(demo_suite().is_success());
    }
}
