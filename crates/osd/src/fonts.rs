//! Built-in bitmap fonts and the name-to-font lookup table.
//!
//! Fonts are registered at compile time; there is no runtime mutation
//! API. Lookup is an exact string match and a miss returns `None`, which
//! downstream turns text rendering into a silent no-op.

use log::debug;

use emu_raster::BitmapFont;

/// 8x8 HUD glyph bitmaps, one byte per row, MSB = leftmost column.
///
/// Covers digits, basic punctuation and both letter cases; anything else
/// renders as a blank cell.
fn hud_glyph(c: char) -> Option<&'static [u8]> {
    match c {
        ' ' => Some(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
        '!' => Some(&[0x18, 0x18, 0x18, 0x18, 0x00, 0x00, 0x18, 0x00]),
        '(' => Some(&[0x0C, 0x18, 0x30, 0x30, 0x30, 0x18, 0x0C, 0x00]),
        ')' => Some(&[0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x18, 0x30, 0x00]),
        '+' => Some(&[0x00, 0x18, 0x18, 0x7E, 0x18, 0x18, 0x00, 0x00]),
        ',' => Some(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x30]),
        '-' => Some(&[0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00]),
        '.' => Some(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00]),
        '/' => Some(&[0x00, 0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x00]),
        '0' => Some(&[0x3C, 0x66, 0x6E, 0x7E, 0x76, 0x66, 0x3C, 0x00]),
        '1' => Some(&[0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00]),
        '2' => Some(&[0x3C, 0x66, 0x06, 0x0C, 0x18, 0x30, 0x7E, 0x00]),
        '3' => Some(&[0x3C, 0x66, 0x06, 0x1C, 0x06, 0x66, 0x3C, 0x00]),
        '4' => Some(&[0x0C, 0x1C, 0x3C, 0x6C, 0x7E, 0x0C, 0x0C, 0x00]),
        '5' => Some(&[0x7E, 0x60, 0x7C, 0x06, 0x06, 0x66, 0x3C, 0x00]),
        '6' => Some(&[0x1C, 0x30, 0x60, 0x7C, 0x66, 0x66, 0x3C, 0x00]),
        '7' => Some(&[0x7E, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00]),
        '8' => Some(&[0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00]),
        '9' => Some(&[0x3C, 0x66, 0x66, 0x3E, 0x06, 0x0C, 0x38, 0x00]),
        ':' => Some(&[0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x00]),
        '<' => Some(&[0x06, 0x0C, 0x18, 0x30, 0x18, 0x0C, 0x06, 0x00]),
        '=' => Some(&[0x00, 0x00, 0x7E, 0x00, 0x7E, 0x00, 0x00, 0x00]),
        '>' => Some(&[0x60, 0x30, 0x18, 0x0C, 0x18, 0x30, 0x60, 0x00]),
        'A' => Some(&[0x3C, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x66, 0x00]),
        'B' => Some(&[0x7C, 0x66, 0x66, 0x7C, 0x66, 0x66, 0x7C, 0x00]),
        'C' => Some(&[0x3C, 0x66, 0x60, 0x60, 0x60, 0x66, 0x3C, 0x00]),
        'D' => Some(&[0x78, 0x6C, 0x66, 0x66, 0x66, 0x6C, 0x78, 0x00]),
        'E' => Some(&[0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x7E, 0x00]),
        'F' => Some(&[0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x60, 0x00]),
        'G' => Some(&[0x3C, 0x66, 0x60, 0x6E, 0x66, 0x66, 0x3C, 0x00]),
        'H' => Some(&[0x66, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x66, 0x00]),
        'I' => Some(&[0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00]),
        'J' => Some(&[0x3E, 0x0C, 0x0C, 0x0C, 0x0C, 0x6C, 0x38, 0x00]),
        'K' => Some(&[0x66, 0x6C, 0x78, 0x70, 0x78, 0x6C, 0x66, 0x00]),
        'L' => Some(&[0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7E, 0x00]),
        'M' => Some(&[0x63, 0x77, 0x7F, 0x6B, 0x63, 0x63, 0x63, 0x00]),
        'N' => Some(&[0x66, 0x76, 0x7E, 0x6E, 0x66, 0x66, 0x66, 0x00]),
        'O' => Some(&[0x3C, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00]),
        'P' => Some(&[0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60, 0x60, 0x00]),
        'Q' => Some(&[0x3C, 0x66, 0x66, 0x66, 0x6A, 0x6C, 0x36, 0x00]),
        'R' => Some(&[0x7C, 0x66, 0x66, 0x7C, 0x6C, 0x66, 0x66, 0x00]),
        'S' => Some(&[0x3C, 0x66, 0x60, 0x3C, 0x06, 0x66, 0x3C, 0x00]),
        'T' => Some(&[0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00]),
        'U' => Some(&[0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00]),
        'V' => Some(&[0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00]),
        'W' => Some(&[0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00]),
        'X' => Some(&[0x66, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x66, 0x00]),
        'Y' => Some(&[0x66, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x18, 0x00]),
        'Z' => Some(&[0x7E, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x7E, 0x00]),
        'a' => Some(&[0x00, 0x00, 0x3C, 0x06, 0x3E, 0x66, 0x3E, 0x00]),
        'b' => Some(&[0x60, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x7C, 0x00]),
        'c' => Some(&[0x00, 0x00, 0x3C, 0x66, 0x60, 0x66, 0x3C, 0x00]),
        'd' => Some(&[0x06, 0x06, 0x3E, 0x66, 0x66, 0x66, 0x3E, 0x00]),
        'e' => Some(&[0x00, 0x00, 0x3C, 0x66, 0x7E, 0x60, 0x3C, 0x00]),
        'f' => Some(&[0x1C, 0x30, 0x30, 0x7C, 0x30, 0x30, 0x30, 0x00]),
        'g' => Some(&[0x00, 0x00, 0x3E, 0x66, 0x66, 0x3E, 0x06, 0x3C]),
        'h' => Some(&[0x60, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x00]),
        'i' => Some(&[0x18, 0x00, 0x38, 0x18, 0x18, 0x18, 0x3C, 0x00]),
        'j' => Some(&[0x0C, 0x00, 0x1C, 0x0C, 0x0C, 0x0C, 0x6C, 0x38]),
        'k' => Some(&[0x60, 0x60, 0x66, 0x6C, 0x78, 0x6C, 0x66, 0x00]),
        'l' => Some(&[0x38, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00]),
        'm' => Some(&[0x00, 0x00, 0x66, 0x7F, 0x6B, 0x6B, 0x63, 0x00]),
        'n' => Some(&[0x00, 0x00, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x00]),
        'o' => Some(&[0x00, 0x00, 0x3C, 0x66, 0x66, 0x66, 0x3C, 0x00]),
        'p' => Some(&[0x00, 0x00, 0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60]),
        'q' => Some(&[0x00, 0x00, 0x3E, 0x66, 0x66, 0x3E, 0x06, 0x06]),
        'r' => Some(&[0x00, 0x00, 0x6C, 0x76, 0x60, 0x60, 0x60, 0x00]),
        's' => Some(&[0x00, 0x00, 0x3E, 0x60, 0x3C, 0x06, 0x7C, 0x00]),
        't' => Some(&[0x30, 0x30, 0x7C, 0x30, 0x30, 0x30, 0x1C, 0x00]),
        'u' => Some(&[0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3E, 0x00]),
        'v' => Some(&[0x00, 0x00, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00]),
        'w' => Some(&[0x00, 0x00, 0x63, 0x6B, 0x6B, 0x7F, 0x36, 0x00]),
        'x' => Some(&[0x00, 0x00, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x00]),
        'y' => Some(&[0x00, 0x00, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x3C]),
        'z' => Some(&[0x00, 0x00, 0x7E, 0x0C, 0x18, 0x30, 0x7E, 0x00]),
        _ => None,
    }
}

/// 8x8 HUD font at native size.
pub static HUD8: BitmapFont = BitmapFont {
    name: "hud8",
    cell_width: 8,
    cell_height: 8,
    scale: 1,
    glyph: hud_glyph,
};

/// The same glyph set magnified 2x, for status text on scaled output.
pub static HUD16: BitmapFont = BitmapFont {
    name: "hud16",
    cell_width: 8,
    cell_height: 8,
    scale: 2,
    glyph: hud_glyph,
};

/// Resolve a font name to its resource. Exact match only; `"default"`
/// aliases the native-size HUD font. Unknown names yield `None` (logged
/// at debug level), which downstream makes text rendering a no-op.
pub fn lookup(name: &str) -> Option<&'static BitmapFont> {
    match name {
        "hud8" | "default" => Some(&HUD8),
        "hud16" => Some(&HUD16),
        _ => {
            debug!("unknown font name '{name}'; text rendering will draw nothing");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_fonts() {
        assert_eq!(lookup("hud8").map(|f| f.name), Some("hud8"));
        assert_eq!(lookup("default").map(|f| f.name), Some("hud8"));
        assert_eq!(lookup("hud16").map(|f| f.name), Some("hud16"));
    }

    #[test]
    fn test_lookup_miss_is_none() {
        assert!(lookup("verdana14").is_none());
        assert!(lookup("").is_none());
        // Lookup is exact-match, not case-folded
        assert!(lookup("HUD8").is_none());
    }

    #[test]
    fn test_glyph_coverage() {
        for c in "0123456789 ABCXYZabcxyz.,:()+-/<=>!".chars() {
            let rows = hud_glyph(c).expect("covered glyph");
            assert_eq!(rows.len(), 8);
        }
        assert!(hud_glyph('\u{263A}').is_none());
        assert!(hud_glyph('\n').is_none());
    }

    #[test]
    fn test_hud16_is_magnified_hud8() {
        assert_eq!(HUD16.scale, 2);
        assert_eq!(HUD8.advance(), 8);
        assert_eq!(HUD16.advance(), 16);
    }
}
