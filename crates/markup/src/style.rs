//! Style flag sets.
//!
//! A node carries a set of style flags rather than a single decoration, so
//! `bold,underline` folds into one value. `RESET` is part of the set: it
//! marks a span that clears inherited formatting before applying its own.

use bitflags::bitflags;
use phf::phf_map;

bitflags! {
    /// Text decoration flags applied to a span.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Style: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const OBFUSCATED = 1 << 4;
        const RESET = 1 << 5;
    }
}

/// The outcome of resolving a token against the style table.
///
/// `Ambiguous` is distinct from `None`: a token that prefix-matches more
/// than one style name is rejected outright instead of falling through to
/// the hover-text interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleMatch {
    Flag(Style),
    Ambiguous,
    None,
}

/// Canonical style names in writer emission order, `reset` last.
const NAMES: [(&str, Style); 6] = [
    ("bold", Style::BOLD),
    ("italic", Style::ITALIC),
    ("obfuscated", Style::OBFUSCATED),
    ("underline", Style::UNDERLINE),
    ("strikethrough", Style::STRIKETHROUGH),
    ("reset", Style::RESET),
];

/// Exact aliases: canonical names, abbreviations, and the legacy code
/// table (`k`/`l`/`m`/`n`/`o`, with and without the `&` prefix).
static ALIASES: phf::Map<&'static str, Style> = phf_map! {
    "bold" => Style::BOLD,
    "bld" => Style::BOLD,
    "l" => Style::BOLD,
    "&l" => Style::BOLD,
    "italic" => Style::ITALIC,
    "ita" => Style::ITALIC,
    "o" => Style::ITALIC,
    "&o" => Style::ITALIC,
    "underline" => Style::UNDERLINE,
    "underlined" => Style::UNDERLINE,
    "und" => Style::UNDERLINE,
    "n" => Style::UNDERLINE,
    "&n" => Style::UNDERLINE,
    "strikethrough" => Style::STRIKETHROUGH,
    "strike" => Style::STRIKETHROUGH,
    "m" => Style::STRIKETHROUGH,
    "&m" => Style::STRIKETHROUGH,
    "obfuscated" => Style::OBFUSCATED,
    "obfuscate" => Style::OBFUSCATED,
    "obf" => Style::OBFUSCATED,
    "k" => Style::OBFUSCATED,
    "&k" => Style::OBFUSCATED,
};

impl Style {
    /// Resolve a property token to a single style flag.
    ///
    /// Matching is case-insensitive. Exact aliases win; otherwise a token of
    /// at least two characters is prefix-matched against the canonical names
    /// (`reset` excluded, it has its own property). More than one prefix
    /// match yields [`StyleMatch::Ambiguous`].
    pub fn resolve(token: &str) -> StyleMatch {
        let token = token.trim().to_ascii_lowercase();
        if let Some(flag) = ALIASES.get(token.as_str()) {
            return StyleMatch::Flag(*flag);
        }
        if token.len() < 2 {
            return StyleMatch::None;
        }
        let mut matched = StyleMatch::None;
        for (name, flag) in NAMES {
            if flag != Style::RESET && name.starts_with(&token) {
                if matched != StyleMatch::None {
                    return StyleMatch::Ambiguous;
                }
                matched = StyleMatch::Flag(flag);
            }
        }
        matched
    }

    /// Whether this token means `reset`.
    pub fn is_reset_token(token: &str) -> bool {
        matches!(
            token.trim().to_ascii_lowercase().as_str(),
            "reset" | "rst" | "r" | "&r"
        )
    }

    /// The active flags paired with their writer tokens, in emission order.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        NAMES
            .into_iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| name)
    }
}
