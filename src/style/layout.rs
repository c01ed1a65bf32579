//! Blank-space margins for aligned console output.
//!
//! Margins are emitted directly as spaces and newlines, so text that already
//! carries ANSI escape sequences pads exactly like its visible glyphs would.

/// Prefix `text` with `|left|` blank characters.
pub fn pad_left(text: &str, left: i32) -> String {
    let left = left.unsigned_abs() as usize;
    format!("{}{}", " ".repeat(left), text)
}

/// [`pad_left`], preceded by `|top|` blank lines.
pub fn pad_left_top(text: &str, left: i32, top: i32) -> String {
    let top = top.unsigned_abs() as usize;
    format!("{}{}", "\n".repeat(top), pad_left(text, left))
}

/// [`pad_left_top`], followed by `|bottom|` blank lines.
pub fn pad_left_top_bottom(text: &str, left: i32, top: i32, bottom: i32) -> String {
    let bottom = bottom.unsigned_abs() as usize;
    format!("{}{}", pad_left_top(text, left, top), "\n".repeat(bottom))
}

/// Count of rendered glyphs, skipping ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    strip_escapes(text).chars().count()
}

/// Drop every ANSI CSI sequence (`ESC [ ... <final byte>`) from `text`.
pub fn strip_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'[') {
            chars.next();
            // Parameter and intermediate bytes run up to the final byte
            // in 0x40..=0x7e.
            for c in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&c) {
                    break;
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Formatter;

    #[test]
    fn zero_left_margin_is_a_noop() {
        assert_eq!(pad_left("x", 0), "x");
    }

    #[test]
    fn pad_left_prefixes_blanks() {
        let padded = pad_left("ab", 3);
        assert_eq!(padded, "   ab");
        assert_eq!(padded.len(), 5);
    }

    #[test]
    fn negative_margins_use_their_absolute_value() {
        assert_eq!(pad_left("ab", -3), pad_left("ab", 3));
        assert_eq!(pad_left_top("ab", 1, -2), pad_left_top("ab", 1, 2));
    }

    #[test]
    fn top_and_bottom_margins_are_blank_lines() {
        assert_eq!(pad_left_top_bottom("s", 2, 1, 1), "\n  s\n");
        assert_eq!(pad_left_top("s", 0, 2), "\n\ns");
        assert_eq!(pad_left_top_bottom("s", 0, 0, 0), "s");
    }

    #[test]
    fn styled_text_pads_like_plain_text() {
        let styled = Formatter::new().bold().red().render("ab");
        let padded = pad_left(&styled, 3);
        assert!(padded.starts_with("   \x1b["));
        assert_eq!(visible_width(&padded), 5);
    }

    #[test]
    fn strip_escapes_removes_all_sgr_codes() {
        assert_eq!(strip_escapes("\x1b[31;1mhi\x1b[0m"), "hi");
        assert_eq!(strip_escapes("\x1b[K\x1b[1A\x1b[2K\x1b[Gline"), "line");
        assert_eq!(strip_escapes("plain"), "plain");
    }

    #[test]
    fn visible_width_ignores_escapes() {
        let styled = Formatter::new().cyan().underline().render("abc");
        assert_eq!(visible_width(&styled), 3);
        assert_eq!(visible_width("abc"), 3);
    }
}
