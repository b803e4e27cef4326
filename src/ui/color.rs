use crate::core::prelude::*;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppColor(Color);

impl AppColor {
    pub fn new(color: Color) -> Self {
        Self(color)
    }

    pub fn from_string(color_str: &str) -> crate::core::error::Result<Self> {
        let color = match color_str.to_lowercase().as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "gray" | "grey" => Color::Gray,
            "darkgray" | "darkgrey" => Color::DarkGray,
            "lightred" => Color::LightRed,
            "lightgreen" => Color::LightGreen,
            "lightyellow" => Color::LightYellow,
            "lightblue" => Color::LightBlue,
            "lightmagenta" => Color::LightMagenta,
            "lightcyan" => Color::LightCyan,
            "white" => Color::White,
            _ => {
                return Err(AppError::Validation(format!(
                    "Invalid color: {}",
                    color_str
                )))
            }
        };
        Ok(Self(color))
    }

    /// Colour for an HTTP-like status code shown in the info panel.
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => Self(Color::LightGreen),
            400..=499 => Self(Color::LightRed),
            _ => Self(Color::Yellow),
        }
    }

    /// Dimmer shade used for fading rain trails.
    pub fn dimmed(&self) -> Self {
        let color = match self.0 {
            Color::White => Color::Gray,
            Color::Gray => Color::DarkGray,
            Color::LightRed => Color::Red,
            Color::LightGreen => Color::Green,
            Color::LightYellow => Color::Yellow,
            Color::LightBlue => Color::Blue,
            Color::LightMagenta => Color::Magenta,
            Color::LightCyan => Color::Cyan,
            other => other,
        };
        Self(color)
    }

    pub fn to_name(&self) -> &'static str {
        match self.0 {
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
            Color::Magenta => "Magenta",
            Color::Cyan => "Cyan",
            Color::Gray => "Gray",
            Color::DarkGray => "DarkGray",
            Color::LightRed => "LightRed",
            Color::LightGreen => "LightGreen",
            Color::LightYellow => "LightYellow",
            Color::LightBlue => "LightBlue",
            Color::LightMagenta => "LightMagenta",
            Color::LightCyan => "LightCyan",
            Color::White => "White",
            _ => "Gray",
        }
    }
}

impl fmt::Display for AppColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_name())
    }
}

impl From<AppColor> for Color {
    fn from(app_color: AppColor) -> Self {
        app_color.0
    }
}

impl From<&AppColor> for Color {
    fn from(app_color: &AppColor) -> Self {
        app_color.0
    }
}

impl Default for AppColor {
    fn default() -> Self {
        Self(Color::Gray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(
            AppColor::from_string("LightCyan").map(Color::from).ok(),
            Some(Color::LightCyan)
        );
        assert_eq!(
            AppColor::from_string("darkgrey").map(Color::from).ok(),
            Some(Color::DarkGray)
        );
        assert!(AppColor::from_string("mauve").is_err());
    }

    #[test]
    fn name_round_trips() {
        let color = AppColor::new(Color::LightMagenta);
        assert_eq!(
            AppColor::from_string(color.to_name()).ok(),
            Some(color)
        );
    }
}
