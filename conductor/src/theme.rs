use iced::theme::Palette;
use iced::{Color, Theme};

#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub foreground: String,
    pub background: String,
    pub surface: String,
    pub overlay: String,
    pub border: String,
    pub accent: String,
    pub affirmative: String,
    pub caution: String,
    pub negative: String,
    pub dim_foreground: String,
    pub bright_foreground: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#C0C5CE"),
            background: String::from("#161822"),
            surface: String::from("#1C1F2B"),
            overlay: String::from("#232530"),
            border: String::from("#2E3240"),
            accent: String::from("#4FA6ED"),
            affirmative: String::from("#98C379"),
            caution: String::from("#E5C07B"),
            negative: String::from("#E06C75"),
            dim_foreground: String::from("#6B7280"),
            bright_foreground: String::from("#ECEFF4"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub foreground: Color,
    pub background: Color,
    pub surface: Color,
    pub overlay: Color,
    pub border: Color,
    pub accent: Color,
    pub affirmative: Color,
    pub caution: Color,
    pub negative: Color,
    pub dim_foreground: Color,
    pub bright_foreground: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: parse_hex_color(&p.foreground),
            background: parse_hex_color(&p.background),
            surface: parse_hex_color(&p.surface),
            overlay: parse_hex_color(&p.overlay),
            border: parse_hex_color(&p.border),
            accent: parse_hex_color(&p.accent),
            affirmative: parse_hex_color(&p.affirmative),
            caution: parse_hex_color(&p.caution),
            negative: parse_hex_color(&p.negative),
            dim_foreground: parse_hex_color(&p.dim_foreground),
            bright_foreground: parse_hex_color(&p.bright_foreground),
        }
    }
}

/// Parse a `#RRGGBB` string; malformed input falls back to white.
pub(crate) fn parse_hex_color(value: &str) -> Color {
    let hex = value.trim_start_matches('#');
    if hex.len() != 6 {
        return Color::WHITE;
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).ok()
    };

    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::from_rgb8(r, g, b),
        _ => Color::WHITE,
    }
}

/// Global application theme shared across the shell and its widgets.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        let raw_palette = ColorPalette::default();
        let iced_palette = IcedColorPalette::from(&raw_palette);

        Self {
            id: String::from("default"),
            iced_palette,
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.affirmative,
            danger: palette.negative,
            warning: palette.caution,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Manages the current global theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self {
            current: AppTheme::default(),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::parse_hex_color;

    #[test]
    fn given_valid_hex_string_when_parsed_then_channels_match() {
        let color = parse_hex_color("#4FA6ED");

        assert!((color.r - 0x4F as f32 / 255.0).abs() < f32::EPSILON);
        assert!((color.g - 0xA6 as f32 / 255.0).abs() < f32::EPSILON);
        assert!((color.b - 0xED as f32 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_malformed_hex_string_when_parsed_then_falls_back_to_white() {
        assert_eq!(parse_hex_color("#12"), iced::Color::WHITE);
        assert_eq!(parse_hex_color("not-a-color"), iced::Color::WHITE);
    }
}
