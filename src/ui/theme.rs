use ratatui::style::Color;
use serde::{Deserialize, Serialize};

const THEME_NAMES: [&str; 4] = ["educoach", "rose-pine", "dracula", "tokyo-night"];

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::educoach()
    }
}

impl Theme {
    /// EduCoach brand theme: navy and saffron.
    ///
    pub fn educoach() -> Self {
        Theme {
            name: "educoach".to_string(),
            primary: rgb(255, 153, 51),    // Saffron
            secondary: rgb(74, 144, 226),  // Sky
            accent: rgb(255, 204, 102),    // Marigold
            banner: rgb(255, 153, 51),     // Saffron
            text: rgb(236, 239, 244),      // Snow
            text_secondary: rgb(176, 186, 204),
            text_muted: rgb(110, 122, 145),
            success: rgb(72, 199, 142),    // Mint
            warning: rgb(255, 204, 102),   // Marigold
            error: rgb(239, 83, 80),       // Red
            info: rgb(74, 144, 226),       // Sky
            border_active: rgb(255, 153, 51),
            border_normal: rgb(110, 122, 145),
            highlight_bg: rgb(30, 58, 95), // Navy
            highlight_fg: rgb(236, 239, 244),
        }
    }

    /// Rose Pine theme.
    ///
    pub fn rose_pine() -> Self {
        Theme {
            name: "rose-pine".to_string(),
            primary: rgb(196, 167, 231),       // Iris
            secondary: rgb(49, 116, 143),      // Pine
            accent: rgb(235, 111, 146),        // Love
            banner: rgb(235, 188, 186),        // Rose
            text: rgb(224, 222, 244),          // Text
            text_secondary: rgb(144, 140, 170), // Subtle
            text_muted: rgb(86, 82, 100),      // Muted
            success: rgb(49, 116, 143),        // Pine
            warning: rgb(246, 193, 119),       // Gold
            error: rgb(235, 111, 146),         // Love
            info: rgb(156, 207, 216),          // Foam
            border_active: rgb(196, 167, 231),
            border_normal: rgb(144, 140, 170),
            highlight_bg: rgb(156, 207, 216),
            highlight_fg: rgb(25, 23, 36), // Base
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: rgb(189, 147, 249),       // Purple
            secondary: rgb(80, 250, 123),      // Green
            accent: rgb(255, 121, 198),        // Pink
            banner: rgb(255, 121, 198),
            text: rgb(248, 248, 242),          // Foreground
            text_secondary: rgb(189, 189, 189),
            text_muted: rgb(98, 114, 164),     // Comment
            success: rgb(80, 250, 123),
            warning: rgb(241, 250, 140),       // Yellow
            error: rgb(255, 85, 85),           // Red
            info: rgb(139, 233, 253),          // Cyan
            border_active: rgb(189, 147, 249),
            border_normal: rgb(98, 114, 164),
            highlight_bg: rgb(68, 71, 90),     // Current line
            highlight_fg: rgb(248, 248, 242),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: rgb(122, 162, 247),       // Blue
            secondary: rgb(158, 206, 106),     // Green
            accent: rgb(187, 154, 247),        // Magenta
            banner: rgb(125, 207, 255),        // Cyan
            text: rgb(192, 202, 245),
            text_secondary: rgb(169, 177, 214),
            text_muted: rgb(86, 95, 137),      // Comment
            success: rgb(158, 206, 106),
            warning: rgb(224, 175, 104),       // Yellow
            error: rgb(247, 118, 142),         // Red
            info: rgb(125, 207, 255),
            border_active: rgb(122, 162, 247),
            border_normal: rgb(86, 95, 137),
            highlight_bg: rgb(41, 46, 66),
            highlight_fg: rgb(192, 202, 245),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "educoach" => Some(Self::educoach()),
            "rose-pine" => Some(Self::rose_pine()),
            "dracula" => Some(Self::dracula()),
            "tokyo-night" => Some(Self::tokyo_night()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> &'static [&'static str] {
        &THEME_NAMES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(&theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn default_theme_is_educoach() {
        assert_eq!(Theme::default().name, "educoach");
    }
}
