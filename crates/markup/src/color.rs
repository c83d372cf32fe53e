//! The fixed named color palette.
//!
//! Colors are resolved from property tokens through a static alias table
//! (canonical names, legacy single-character codes and their `&`-prefixed
//! forms) plus unambiguous-prefix matching over the canonical names.

use phf::phf_map;

/// A color from the fixed named palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

/// Canonical names, in palette order. Prefix matching resolves against these.
const NAMES: [(&str, Color); 16] = [
    ("black", Color::Black),
    ("dark_blue", Color::DarkBlue),
    ("dark_green", Color::DarkGreen),
    ("dark_aqua", Color::DarkAqua),
    ("dark_red", Color::DarkRed),
    ("dark_purple", Color::DarkPurple),
    ("gold", Color::Gold),
    ("gray", Color::Gray),
    ("dark_gray", Color::DarkGray),
    ("blue", Color::Blue),
    ("green", Color::Green),
    ("aqua", Color::Aqua),
    ("red", Color::Red),
    ("light_purple", Color::LightPurple),
    ("yellow", Color::Yellow),
    ("white", Color::White),
];

/// Exact aliases: canonical names, spelling variants, and the legacy
/// code table (`0`-`9`/`a`-`f`, with and without the `&` prefix).
static ALIASES: phf::Map<&'static str, Color> = phf_map! {
    "black" => Color::Black,
    "dark_blue" => Color::DarkBlue,
    "dark_green" => Color::DarkGreen,
    "dark_aqua" => Color::DarkAqua,
    "dark_red" => Color::DarkRed,
    "dark_purple" => Color::DarkPurple,
    "gold" => Color::Gold,
    "gray" => Color::Gray,
    "grey" => Color::Gray,
    "dark_gray" => Color::DarkGray,
    "dark_grey" => Color::DarkGray,
    "blue" => Color::Blue,
    "green" => Color::Green,
    "aqua" => Color::Aqua,
    "red" => Color::Red,
    "light_purple" => Color::LightPurple,
    "purple" => Color::LightPurple,
    "yellow" => Color::Yellow,
    "white" => Color::White,
    "0" => Color::Black,
    "1" => Color::DarkBlue,
    "2" => Color::DarkGreen,
    "3" => Color::DarkAqua,
    "4" => Color::DarkRed,
    "5" => Color::DarkPurple,
    "6" => Color::Gold,
    "7" => Color::Gray,
    "8" => Color::DarkGray,
    "9" => Color::Blue,
    "a" => Color::Green,
    "b" => Color::Aqua,
    "c" => Color::Red,
    "d" => Color::LightPurple,
    "e" => Color::Yellow,
    "f" => Color::White,
    "&0" => Color::Black,
    "&1" => Color::DarkBlue,
    "&2" => Color::DarkGreen,
    "&3" => Color::DarkAqua,
    "&4" => Color::DarkRed,
    "&5" => Color::DarkPurple,
    "&6" => Color::Gold,
    "&7" => Color::Gray,
    "&8" => Color::DarkGray,
    "&9" => Color::Blue,
    "&a" => Color::Green,
    "&b" => Color::Aqua,
    "&c" => Color::Red,
    "&d" => Color::LightPurple,
    "&e" => Color::Yellow,
    "&f" => Color::White,
};

impl Color {
    /// The canonical lowercase name, as emitted by the writer.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::DarkBlue => "dark_blue",
            Color::DarkGreen => "dark_green",
            Color::DarkAqua => "dark_aqua",
            Color::DarkRed => "dark_red",
            Color::DarkPurple => "dark_purple",
            Color::Gold => "gold",
            Color::Gray => "gray",
            Color::DarkGray => "dark_gray",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Aqua => "aqua",
            Color::Red => "red",
            Color::LightPurple => "light_purple",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }

    /// Resolve a property token to a color.
    ///
    /// Matching is case-insensitive. Exact aliases win; otherwise a token of
    /// at least two characters matching exactly one canonical name as a
    /// prefix resolves to that color. Ambiguous prefixes resolve to `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use markup::Color;
    ///
    /// assert_eq!(Color::resolve("red"), Some(Color::Red));
    /// assert_eq!(Color::resolve("yel"), Some(Color::Yellow));
    /// assert_eq!(Color::resolve("&c"), Some(Color::Red));
    /// assert_eq!(Color::resolve("da"), None); // dark_* is ambiguous
    /// ```
    pub fn resolve(token: &str) -> Option<Color> {
        let token = token.trim().to_ascii_lowercase();
        if let Some(color) = ALIASES.get(token.as_str()) {
            return Some(*color);
        }
        // Single characters are reserved for the exact code table.
        if token.len() < 2 {
            return None;
        }
        let mut matched = None;
        for (name, color) in NAMES {
            if name.starts_with(&token) {
                if matched.is_some() {
                    return None;
                }
                matched = Some(color);
            }
        }
        matched
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
