use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::shared::constants::ERASE_PREV_LINE;

const RESET: &str = "\x1b[0m";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("unknown color name: '{0}'")]
    UnknownColor(String),
}

/// The named terminal palette supported by the [`Formatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// ANSI SGR foreground code (30-base).
    fn fg_code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
        }
    }

    /// ANSI SGR background code (40-base).
    fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "yellow" => Ok(Color::Yellow),
            "magenta" => Ok(Color::Magenta),
            "cyan" => Ok(Color::Cyan),
            "white" => Ok(Color::White),
            _ => Err(StyleError::UnknownColor(name.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        };
        f.write_str(name)
    }
}

/// Builder that accumulates terminal style attributes and renders styled text.
///
/// Setters take and return `self` so chains read naturally; [`Formatter::render`]
/// borrows, so a configured formatter can stamp out any number of strings.
/// Each rendered string is self-contained: it always ends with a full SGR
/// reset, so concatenating outputs of differently-styled formatters never
/// leaks style from one into the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
    italic: bool,
    underline: bool,
    erase_line: bool,
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Clear the previous terminal line before the rendered text is shown.
    pub fn erase(mut self) -> Self {
        self.erase_line = true;
        self
    }

    /// Set the foreground color. Last write wins.
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set or clear the background color; `None` means "no background".
    pub fn bg(mut self, color: Option<Color>) -> Self {
        self.bg = color;
        self
    }

    /// Set the background from a palette name, `"none"` clearing it.
    /// An unrecognized name is a usage error, never a silent fallback.
    pub fn background(self, name: &str) -> Result<Self, StyleError> {
        if name.eq_ignore_ascii_case("none") {
            return Ok(self.bg(None));
        }
        Ok(self.bg(Some(name.parse()?)))
    }

    pub fn red(self) -> Self {
        self.fg(Color::Red)
    }

    pub fn green(self) -> Self {
        self.fg(Color::Green)
    }

    pub fn blue(self) -> Self {
        self.fg(Color::Blue)
    }

    pub fn yellow(self) -> Self {
        self.fg(Color::Yellow)
    }

    pub fn magenta(self) -> Self {
        self.fg(Color::Magenta)
    }

    pub fn cyan(self) -> Self {
        self.fg(Color::Cyan)
    }

    pub fn white(self) -> Self {
        self.fg(Color::White)
    }

    fn has_attributes(&self) -> bool {
        self.fg.is_some() || self.bg.is_some() || self.bold || self.italic || self.underline
    }

    /// SGR codes for the active attributes, in the fixed order
    /// foreground, background, bold, italic, underline.
    fn escape_prefix(&self) -> String {
        let mut codes: Vec<u8> = Vec::new();
        if let Some(fg) = self.fg {
            codes.push(fg.fg_code());
        }
        if let Some(bg) = self.bg {
            codes.push(bg.bg_code());
        }
        if self.bold {
            codes.push(1);
        }
        if self.italic {
            codes.push(3);
        }
        if self.underline {
            codes.push(4);
        }

        let codes: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        format!("\x1b[{}m", codes.join(";"))
    }

    /// Render `text` wrapped in the accumulated escape codes.
    ///
    /// With no attributes set the text comes back untouched, without a single
    /// escape byte.
    pub fn render(&self, text: &str) -> String {
        let mut out = String::new();

        if self.erase_line {
            out.push_str(ERASE_PREV_LINE);
        }

        if !self.has_attributes() {
            out.push_str(text);
            return out;
        }

        out.push_str(&self.escape_prefix());
        out.push_str(text);
        out.push_str(RESET);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::layout::strip_escapes;

    #[test]
    fn no_attributes_is_a_noop() {
        assert_eq!(Formatter::new().render(""), "");
        assert_eq!(Formatter::new().render("plain"), "plain");
        assert!(!Formatter::new().render("plain").contains('\x1b'));
    }

    #[test]
    fn renders_foreground_and_reset() {
        let out = Formatter::new().red().render("stop");
        assert_eq!(out, "\x1b[31mstop\x1b[0m");
    }

    #[test]
    fn attribute_order_is_fixed() {
        let out = Formatter::new()
            .underline()
            .bold()
            .bg(Some(Color::White))
            .cyan()
            .render("x");
        assert_eq!(out, "\x1b[36;47;1;4mx\x1b[0m");
    }

    #[test]
    fn setters_are_idempotent() {
        let once = Formatter::new().bold().render("b");
        let twice = Formatter::new().bold().bold().render("b");
        assert_eq!(once, twice);

        let recolored = Formatter::new().red().red().render("r");
        assert_eq!(recolored, Formatter::new().red().render("r"));
    }

    #[test]
    fn last_color_wins() {
        let out = Formatter::new().red().green().render("go");
        assert_eq!(out, "\x1b[32mgo\x1b[0m");
    }

    #[test]
    fn style_does_not_leak_between_renders() {
        let bold = Formatter::new().bold().render("A");
        let plain = Formatter::new().render("B");
        let joined = format!("{}{}", bold, plain);
        assert!(joined.ends_with("\x1b[0mB"));
        assert!(!plain.contains("\x1b[1m"));
    }

    #[test]
    fn formatter_is_reusable_after_render() {
        let f = Formatter::new().bold().magenta();
        assert_eq!(f.render("one"), f.render("one"));
        assert_eq!(f.render("two"), "\x1b[35;1mtwo\x1b[0m");
    }

    #[test]
    fn stripping_escapes_round_trips_the_text() {
        let combos = [
            Formatter::new(),
            Formatter::new().bold(),
            Formatter::new().italic().underline(),
            Formatter::new().red().bg(Some(Color::White)),
            Formatter::new().erase().yellow().bold(),
            Formatter::new()
                .cyan()
                .bg(Some(Color::Magenta))
                .bold()
                .italic()
                .underline(),
        ];
        for f in combos {
            assert_eq!(strip_escapes(&f.render("frame 12 at 00:01:02")), "frame 12 at 00:01:02");
        }
    }

    #[test]
    fn erase_prefixes_the_line_erase_sequence() {
        let out = Formatter::new().erase().render("redrawn");
        assert!(out.starts_with(ERASE_PREV_LINE));
        assert!(out.ends_with("redrawn"));
    }

    #[test]
    fn unknown_color_name_is_a_usage_error() {
        let err = Formatter::new().background("chartreuse").unwrap_err();
        assert_eq!(err, StyleError::UnknownColor("chartreuse".to_string()));

        assert!("blurple".parse::<Color>().is_err());
        assert_eq!("MAGENTA".parse::<Color>(), Ok(Color::Magenta));
    }

    #[test]
    fn background_accepts_the_none_sentinel() {
        let f = Formatter::new()
            .bg(Some(Color::Red))
            .background("none")
            .unwrap();
        assert_eq!(f.render("t"), "t");
    }
}
