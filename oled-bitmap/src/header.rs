//! C header generation for a packed bitmap.

use crate::error::ConvertError;
use crate::pack::PackedBitmap;

/// Symbol used when none is configured.
pub const DEFAULT_SYMBOL: &str = "augmental_logo";

/// Byte literals per output line.
pub const BYTES_PER_LINE: usize = 16;

/// Characters shown by [`preview`] in the CLI summary.
pub const PREVIEW_CHARS: usize = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    /// C identifier stem; the array is named `<symbol>_bitmap`.
    pub symbol: String,
    /// File name shown in the banner comment.
    pub source_name: Option<String>,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            source_name: None,
        }
    }
}

/// Check that `symbol` is a valid C identifier.
pub fn validate_symbol(symbol: &str) -> Result<(), ConvertError> {
    let mut chars = symbol.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ConvertError::InvalidSymbol(symbol.to_string()))
    }
}

/// Format bytes as `0xHH` literals, sixteen to a line.
///
/// Every line except the last carries a trailing comma.
pub fn format_byte_rows(bytes: &[u8]) -> Vec<String> {
    let nlines = bytes.len().div_ceil(BYTES_PER_LINE);
    bytes
        .chunks(BYTES_PER_LINE)
        .enumerate()
        .map(|(i, chunk)| {
            let mut line = chunk
                .iter()
                .map(|b| format!("0x{b:02X}"))
                .collect::<Vec<_>>()
                .join(", ");
            if i + 1 < nlines {
                line.push(',');
            }
            line
        })
        .collect()
}

/// Render the complete header text for `bitmap`.
pub fn render_header(bitmap: &PackedBitmap, opts: &HeaderOptions) -> Result<String, ConvertError> {
    validate_symbol(&opts.symbol)?;

    let upper = opts.symbol.to_ascii_uppercase();
    let guard = format!("{upper}_H_");
    let words: Vec<&str> = opts.symbol.split('_').filter(|w| !w.is_empty()).collect();

    let generated = match &opts.source_name {
        Some(source) => format!(" * Generated from {source}\n"),
        None => String::new(),
    };
    let rows: String = format_byte_rows(bitmap.as_bytes())
        .iter()
        .map(|line| format!("    {line}\n"))
        .collect();

    Ok(format!(
        "/*
 * {title} Bitmap
{generated} * For SSD1306 OLED Display (128x64)
 */

#ifndef {guard}
#define {guard}

/* {sentence} bitmap - {width}x{height} pixels */
#include <stdint.h>

#define {upper}_WIDTH  {width}
#define {upper}_HEIGHT {height}

static const uint8_t {symbol}_bitmap[] = {{
{rows}}};

#endif /* {guard} */
",
        title = title_case(&words),
        sentence = sentence_case(&words),
        width = bitmap.width(),
        height = bitmap.height(),
        symbol = opts.symbol,
    ))
}

/// First `limit` characters of `text`, with `...` appended when cut.
pub fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn title_case(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

fn sentence_case(words: &[&str]) -> String {
    let mut out = Vec::with_capacity(words.len());
    for (i, w) in words.iter().enumerate() {
        if i == 0 {
            out.push(capitalize(w));
        } else {
            out.push(w.to_string());
        }
    }
    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::grid::{PixelGrid, BLACK, WHITE};
    use crate::pack::pack;

    /// Two columns, eight rows: left column white, right column black.
    fn white_then_black() -> PackedBitmap {
        let samples = [WHITE, BLACK].repeat(8);
        pack(&PixelGrid::new(2, 8, samples).unwrap())
    }

    fn single_black_pixel() -> PackedBitmap {
        pack(&PixelGrid::filled(1, 1, BLACK).unwrap())
    }

    #[test]
    fn two_bytes_on_one_line_without_trailing_comma() {
        assert_eq!(format_byte_rows(&[0x00, 0xFF]), vec!["0x00, 0xFF"]);
    }

    #[test]
    fn literals_are_uppercase_hex() {
        assert_eq!(format_byte_rows(&[0x0a, 0xbc]), vec!["0x0A, 0xBC"]);
    }

    #[test]
    fn sixteen_literals_per_line() {
        let bytes: Vec<u8> = (0..40).collect();
        let rows = format_byte_rows(&bytes);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("0x00, 0x01"));
        assert!(rows[0].ends_with("0x0F,"));
        assert_eq!(rows[0].matches("0x").count(), 16);
        assert!(rows[1].ends_with("0x1F,"));
        assert_eq!(rows[2], "0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27");
    }

    #[test]
    fn exact_multiple_of_sixteen_has_no_trailing_comma() {
        let rows = format_byte_rows(&[0xFF; 32]);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].ends_with(','));
        assert!(!rows[1].ends_with(','));
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(format_byte_rows(&[]).is_empty());
    }

    #[test]
    fn full_header_layout() {
        let opts = HeaderOptions {
            symbol: "augmental_logo".to_string(),
            source_name: Some("augmental_logo.png".to_string()),
        };
        let text = render_header(&white_then_black(), &opts).unwrap();
        let expected = "\
/*
 * Augmental Logo Bitmap
 * Generated from augmental_logo.png
 * For SSD1306 OLED Display (128x64)
 */

#ifndef AUGMENTAL_LOGO_H_
#define AUGMENTAL_LOGO_H_

/* Augmental logo bitmap - 2x8 pixels */
#include <stdint.h>

#define AUGMENTAL_LOGO_WIDTH  2
#define AUGMENTAL_LOGO_HEIGHT 8

static const uint8_t augmental_logo_bitmap[] = {
    0x00, 0xFF
};

#endif /* AUGMENTAL_LOGO_H_ */
";
        assert_eq!(text, expected);
    }

    #[test]
    fn custom_symbol_names_everything() {
        let opts = HeaderOptions {
            symbol: "splash".to_string(),
            source_name: None,
        };
        let text = render_header(&single_black_pixel(), &opts).unwrap();
        assert!(text.contains(" * Splash Bitmap\n"));
        assert!(!text.contains("Generated from"));
        assert!(text.contains("#ifndef SPLASH_H_\n"));
        assert!(text.contains("#define SPLASH_WIDTH  1\n"));
        assert!(text.contains("#define SPLASH_HEIGHT 1\n"));
        assert!(text.contains("static const uint8_t splash_bitmap[] = {\n    0x01\n};\n"));
    }

    #[test]
    fn invalid_symbols_are_rejected() {
        for bad in ["", "1logo", "my-logo", "logo bitmap", "lógo"] {
            assert!(
                matches!(validate_symbol(bad), Err(ConvertError::InvalidSymbol(_))),
                "{bad:?} should be rejected"
            );
        }
        for good in ["logo", "_logo", "Logo2", "a_b_c"] {
            assert!(validate_symbol(good).is_ok(), "{good:?} should be accepted");
        }
    }

    #[test]
    fn render_refuses_invalid_symbol() {
        let opts = HeaderOptions {
            symbol: "bad-name".to_string(),
            source_name: None,
        };
        assert!(render_header(&single_black_pixel(), &opts).is_err());
    }

    #[test]
    fn preview_truncates_long_text() {
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("abc", 3), "abc");
        assert_eq!(preview("ab", 3), "ab");
    }
}
