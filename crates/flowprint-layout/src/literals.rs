//! Lexical utilities: string escaping, quote selection, and numeric
//! formatting.

use std::fmt::Write;

/// Pick the quote character producing the fewest escapes for `s`: the quote
/// that occurs in the string no more often than the other. Ties go to `"`.
pub fn better_quote(s: &str) -> char {
    let mut double = 0usize;
    let mut single = 0usize;
    for ch in s.chars() {
        match ch {
            '"' => double += 1,
            '\'' => single += 1,
            _ => {}
        }
    }
    if double > single { '\'' } else { '"' }
}

/// Escape `s` for a string literal delimited by `quote`.
///
/// Control characters use their named escapes, the rest of the 0x00–0xFF
/// range uses `\xNN`, BMP code points use `\uNNNN`, and astral code points
/// are split into a UTF-16 surrogate pair (`\uHHHH\uLLLL`, never `\u{…}`).
/// Input arrives as a Rust string, so malformed byte sequences have already
/// been dropped upstream.
pub fn escape_string(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for ch in s.chars() {
        match ch {
            '\0' => out.push_str("\\0"),
            '\u{0008}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{000B}' => out.push_str("\\v"),
            '\u{000C}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (' '..='\u{007E}').contains(&c) => out.push(c),
            c => {
                let cp = c as u32;
                if cp < 0x100 {
                    let _ = write!(out, "\\x{cp:02x}");
                } else if cp <= 0xFFFF {
                    let _ = write!(out, "\\u{cp:04x}");
                } else {
                    let adjusted = cp - 0x10000;
                    let high = 0xD800 + (adjusted >> 10);
                    let low = 0xDC00 + (adjusted & 0x03FF);
                    let _ = write!(out, "\\u{high:04x}\\u{low:04x}");
                }
            }
        }
    }
    out
}

/// Quote and escape `s` with whichever quote needs fewer escapes.
pub fn quote_string(s: &str) -> String {
    let quote = better_quote(s);
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    out.push_str(&escape_string(s, quote));
    out.push(quote);
    out
}

/// Format an f64 as the shortest decimal that parses back to the same
/// value. Plain notation is preferred; exponent notation is used when it is
/// strictly shorter (and always at 1e21 and above, where JavaScript itself
/// switches over).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rust's Display already produces the shortest round-tripping digits,
    // but never uses exponent notation.
    let plain = format!("{value}");
    let exponent = exponent_form(value);
    if value.abs() >= 1e21 || exponent.len() < plain.len() {
        exponent
    } else {
        plain
    }
}

fn exponent_form(value: f64) -> String {
    // `{:e}` renders e.g. `1.5e-7` and `1e21`; both are valid literals, so
    // no sign fix-up is needed for the shortest form.
    format!("{value:e}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_better_quote() {
        assert_eq!(better_quote("plain"), '"');
        assert_eq!(better_quote("it's"), '"');
        assert_eq!(better_quote("a \"b\" c"), '\'');
        assert_eq!(better_quote("'x' vs \"y\""), '"');
        // More doubles than singles: single quote wins.
        assert_eq!(better_quote("it's a \"test\""), '\'');
    }

    #[test]
    fn test_escape_named() {
        assert_eq!(escape_string("a\tb\nc", '"'), "a\\tb\\nc");
        assert_eq!(escape_string("\0\u{8}\u{b}\u{c}\r", '"'), "\\0\\b\\v\\f\\r");
        assert_eq!(escape_string("back\\slash", '"'), "back\\\\slash");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_string("say \"hi\"", '"'), "say \\\"hi\\\"");
        assert_eq!(escape_string("say \"hi\"", '\''), "say \"hi\"");
        assert_eq!(escape_string("it's", '\''), "it\\'s");
    }

    #[test]
    fn test_escape_hex_ranges() {
        assert_eq!(escape_string("\u{1}", '"'), "\\x01");
        assert_eq!(escape_string("\u{7f}", '"'), "\\x7f");
        assert_eq!(escape_string("\u{e9}", '"'), "\\xe9");
        assert_eq!(escape_string("\u{2603}", '"'), "\\u2603");
    }

    #[test]
    fn test_escape_surrogate_pair() {
        // Astral code points split into surrogate pairs, not \u{...}.
        assert_eq!(escape_string("\u{1F4A9}", '"'), "\\ud83d\\udca9");
    }

    #[test]
    fn test_quote_string_picks_fewer_escapes() {
        assert_eq!(quote_string("it's"), "\"it's\"");
        assert_eq!(quote_string("a \"b\""), "'a \"b\"'");
    }

    #[test]
    fn test_format_number_integers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "-0");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(255.0), "255");
        assert_eq!(format_number(-42.0), "-42");
    }

    #[test]
    fn test_format_number_fractions() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(3.14), "3.14");
        assert_eq!(format_number(0.1), "0.1");
    }

    #[test]
    fn test_format_number_exponents() {
        assert_eq!(format_number(1e21), "1e21");
        assert_eq!(format_number(1e-7), "1e-7");
        // 0.000001 is longer than 1e-6.
        assert_eq!(format_number(1e-6), "1e-6");
        // Exponent form only wins when strictly shorter.
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(1000.0), "1e3");
        assert_eq!(format_number(1234.0), "1234");
    }

    #[test]
    fn test_format_number_round_trips() {
        for &v in &[0.1, 1e-7, 1e21, 3.141592653589793, 255.0, 1.5e300] {
            let s = format_number(v);
            assert_eq!(s.parse::<f64>().expect("parses"), v, "{s}");
        }
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
