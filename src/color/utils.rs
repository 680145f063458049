use crate::color::Rgb;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Parse a hex color string (`#RRGGBB` or `RRGGBB`).
///
/// Malformed input yields black rather than an error; the control surface
/// treats a bad color the same as "no color".
pub fn parse_hex_color(text: &str) -> Rgb {
    let digits = text.strip_prefix('#').unwrap_or(text);
    let value = u32::from_str_radix(digits, 16).unwrap_or(0);
    rgb_from_u32(value)
}
