use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
    pub footer: ColorSpec,
}

/// RGB color specification.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::new(125, 207, 255),       // Blue
            banner: ColorSpec::new(255, 159, 196),        // Magenta
            text: ColorSpec::new(169, 177, 214),          // Foreground
            text_muted: ColorSpec::new(117, 121, 148),    // Comment
            error: ColorSpec::new(247, 118, 142),         // Red
            border_active: ColorSpec::new(125, 207, 255), // Blue
            border_normal: ColorSpec::new(117, 121, 148), // Comment
            highlight_bg: ColorSpec::new(125, 207, 255),  // Blue
            highlight_fg: ColorSpec::new(26, 27, 38),     // Background
            footer: ColorSpec::new(36, 40, 59),           // Selection
        }
    }

    /// Rose Pine theme.
    ///
    pub fn rose_pine() -> Self {
        Theme {
            name: "rose-pine".to_string(),
            primary: ColorSpec::new(196, 167, 231),       // Purple
            banner: ColorSpec::new(235, 111, 146),        // Love
            text: ColorSpec::new(224, 222, 244),          // Text
            text_muted: ColorSpec::new(86, 82, 100),      // Muted
            error: ColorSpec::new(235, 111, 146),         // Love
            border_active: ColorSpec::new(196, 167, 231), // Purple
            border_normal: ColorSpec::new(144, 140, 170), // Subtext
            highlight_bg: ColorSpec::new(156, 207, 216),  // Foam
            highlight_fg: ColorSpec::new(25, 23, 36),     // Base
            footer: ColorSpec::new(31, 29, 43),           // Surface
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::new(144, 122, 169),       // Iris
            banner: ColorSpec::new(180, 99, 122),         // Love
            text: ColorSpec::new(87, 82, 121),            // Text
            text_muted: ColorSpec::new(152, 147, 165),    // Muted
            error: ColorSpec::new(180, 99, 122),          // Love
            border_active: ColorSpec::new(144, 122, 169), // Iris
            border_normal: ColorSpec::new(121, 117, 147), // Subtle
            highlight_bg: ColorSpec::new(86, 148, 159),   // Foam
            highlight_fg: ColorSpec::new(250, 244, 237),  // Base
            footer: ColorSpec::new(242, 233, 225),        // Overlay
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine" => Some(Self::rose_pine()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "rose-pine".to_string(),
            "rose-pine-dawn".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_theme() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn color_spec_to_color() {
        assert_eq!(ColorSpec::new(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}
