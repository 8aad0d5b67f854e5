//! CSS color string helpers.

/// Returns `color` with its alpha replaced by `alpha`.
///
/// Understands `#rrggbb`, `#rgb` and `hsl(...)`; anything else (named colors,
/// `rgba(...)`, malformed hex) is returned unchanged.
pub fn add_alpha(color: &str, alpha: f64) -> String {
    if let Some(hex) = color.strip_prefix('#') {
        return match parse_hex(hex) {
            Some([r, g, b]) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
            None => color.to_string(),
        };
    }
    if let Some(body) = color.strip_prefix("hsl(") {
        if let Some(inner) = body.strip_suffix(')') {
            return format!("hsla({}, {})", inner, alpha);
        }
    }
    color.to_string()
}

/// `hsl(h, s%, l%)` with the hue wrapped into [0, 360).
pub fn hsl(hue: f64, saturation: u8, lightness: u8) -> String {
    format!("hsl({}, {}%, {}%)", hue.rem_euclid(360.0), saturation, lightness)
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;
    match digits.as_slice() {
        [r1, r0, g1, g0, b1, b0] => Some([r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0]),
        [r, g, b] => Some([r * 17, g * 17, b * 17]),
        _ => None,
    }
}
