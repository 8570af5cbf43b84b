//! Fixed dark-mode theme constants and the customization overlay.

use crate::types::Customization;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);

    /// Parse a `#RRGGBB` (or `RRGGBB`) hex string.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Rgb(r, g, b))
    }

    /// Uppercase `RRGGBB` form, as OOXML color attributes expect.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// The 6-entry brand palette used for chart series colors.
///
/// Series beyond six cycle back through the palette (index modulo 6).
pub const BRAND_PALETTE: [Rgb; 6] = [
    Rgb(0x00, 0x7A, 0xCC),
    Rgb(0x09, 0x53, 0x4F),
    Rgb(0x4C, 0xAF, 0x50),
    Rgb(0xFF, 0x98, 0x00),
    Rgb(0xF4, 0x43, 0x36),
    Rgb(0x9C, 0x27, 0xB0),
];

/// Color for the chart series at `index`, cycling through the palette.
pub fn palette_color(index: usize) -> Rgb {
    BRAND_PALETTE[index % BRAND_PALETTE.len()]
}

/// Theme constants applied uniformly across generated output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Slide background fill.
    pub background: Rgb,
    /// Default body/bullet text color.
    pub text_color: Rgb,
    /// Title text color.
    pub title_color: Rgb,
    /// Title bar outline and table header fill.
    pub title_bar_color: Rgb,
    /// Fill for shaded (even) table body rows.
    pub table_row_fill: Rgb,
    /// True for a left-aligned title bar, false for centered.
    pub title_align_left: bool,
    /// Point sizes.
    pub title_size: u32,
    pub deck_title_size: u32,
    pub subtitle_size: u32,
    pub headline_size: u32,
    pub body_size: u32,
    pub table_size: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb(0x0F, 0x16, 0x32),
            text_color: Rgb::WHITE,
            title_color: Rgb::WHITE,
            title_bar_color: Rgb(0x44, 0x54, 0x6A),
            table_row_fill: Rgb(0x2A, 0x39, 0x50),
            title_align_left: true,
            title_size: 28,
            deck_title_size: 36,
            subtitle_size: 24,
            headline_size: 20,
            body_size: 16,
            table_size: 12,
        }
    }
}

impl Theme {
    /// Build a theme with any recognized customization keys applied.
    ///
    /// Unparseable color strings leave the corresponding default in place.
    pub fn customized(custom: Option<&Customization>) -> Self {
        let mut theme = Self::default();
        let Some(custom) = custom else {
            return theme;
        };

        if let Some(color) = custom.slide_bg_color.as_deref().and_then(Rgb::from_hex) {
            theme.background = color;
        }
        if let Some(color) = custom.title_font_color.as_deref().and_then(Rgb::from_hex) {
            theme.title_color = color;
        }
        if let Some(color) = custom.title_bg_color.as_deref().and_then(Rgb::from_hex) {
            theme.title_bar_color = color;
        }
        if let Some(color) = custom.body_text_color.as_deref().and_then(Rgb::from_hex) {
            theme.text_color = color;
        }
        if let Some(position) = custom.title_position.as_deref() {
            theme.title_align_left = position.eq_ignore_ascii_case("left");
        }
        if let Some(size) = custom.font_size {
            if size > 0 {
                theme.body_size = size;
            }
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parse_roundtrip() {
        assert_eq!(Rgb::from_hex("#0F1632"), Some(Rgb(0x0F, 0x16, 0x32)));
        assert_eq!(Rgb::from_hex("ffffff"), Some(Rgb::WHITE));
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("nothex"), None);
        assert_eq!(Rgb(0x2A, 0x39, 0x50).to_hex(), "2A3950");
    }

    #[test]
    fn palette_cycles_past_six() {
        assert_eq!(palette_color(0), palette_color(6));
        assert_eq!(palette_color(5), palette_color(11));
        assert_ne!(palette_color(0), palette_color(1));
    }

    #[test]
    fn customization_overrides_and_falls_back() {
        let custom = Customization {
            slide_bg_color: Some("#000000".into()),
            title_font_color: Some("not-a-color".into()),
            title_position: Some("center".into()),
            font_size: Some(20),
            ..Customization::default()
        };
        let theme = Theme::customized(Some(&custom));
        assert_eq!(theme.background, Rgb(0, 0, 0));
        // Unparseable color keeps the default.
        assert_eq!(theme.title_color, Rgb::WHITE);
        assert!(!theme.title_align_left);
        assert_eq!(theme.body_size, 20);
        // Untouched keys keep defaults.
        assert_eq!(theme.table_row_fill, Rgb(0x2A, 0x39, 0x50));
    }
}
