//! Property classification.
//!
//! Each `(...)` segment of a bracket is split into tokens, and each token is
//! classified into a [`Property`]. Token vocabulary is ambiguous, so the
//! order of checks matters and mirrors the grammar exactly: command
//! suggestions before commands, URLs before colors, colors before styles,
//! and anything unrecognized becomes hover text.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::color::Color;
use crate::node::Node;
use crate::style::{Style, StyleMatch};

/// Matches bare hosts (`example.com`, `host:8080`), paths, and
/// scheme-prefixed or `www.` forms. Deliberately loose: a match is only a
/// candidate, real validation happens in [`Url::parse`].
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:(?:https?|ftp)://|www\.)?[\da-z-]+(?:\.[\da-z-]+)*(?:(?:\.[a-z]{2,6})+|:\d+)(?:/\S*)?$",
    )
    .expect("URL pattern is valid")
});

static SCHEME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:https?|ftp)://").expect("scheme pattern is valid"));

/// A classified formatting or action directive.
///
/// Produced transiently while parsing a property list and folded into the
/// bracket's [`Node`]. There is no "none" variant: classification returns
/// `Option<Property>` so an absent property cannot be mistaken for a parse
/// failure.
#[derive(Clone, Debug, PartialEq)]
pub enum Property {
    Color(Color),
    Style(Style),
    Reset,
    RunCommand(String),
    SuggestCommand(String),
    OpenUrl(Url),
    /// Shift-click insert text. Never produced by the classifier; exists for
    /// host-constructed trees.
    InsertText(String),
    ShowText(Node),
}

/// The capability check gating every classified property.
///
/// Supplied by the caller per parse; the parser re-evaluates it for each
/// property. Implementations must be pure. Closures implement it directly:
///
/// ```
/// use markup::{parse, Property};
///
/// let no_commands = |p: &Property| !matches!(p, Property::RunCommand(_));
/// let node = parse("[spawn](/spawn,green)", &no_commands);
/// assert!(node.click().is_none());
/// assert!(node.color().is_some());
/// ```
pub trait Permissions {
    fn allow(&self, property: &Property) -> bool;
}

impl<F> Permissions for F
where
    F: Fn(&Property) -> bool,
{
    fn allow(&self, property: &Property) -> bool {
        self(property)
    }
}

/// Permits every property. The default for trusted input.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl Permissions for AllowAll {
    fn allow(&self, _: &Property) -> bool {
        true
    }
}

/// Rejects every property; parsing strips all formatting.
#[derive(Clone, Copy, Debug, Default)]
pub struct DenyAll;

impl Permissions for DenyAll {
    fn allow(&self, _: &Property) -> bool {
        false
    }
}

impl Property {
    /// Classify one trimmed property token.
    ///
    /// Returns `None` for empty tokens, ambiguous style prefixes, malformed
    /// URLs, and properties rejected by `perms`. Unrecognized tokens are
    /// parsed as nested markup and become [`Property::ShowText`].
    pub fn classify(token: &str, perms: &dyn Permissions) -> Option<Property> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        if let Some(rest) = token.strip_prefix("//") {
            return Self::gate(Property::SuggestCommand(format!("/{rest}")), perms);
        }
        if token.starts_with('/') {
            return Self::gate(Property::RunCommand(token.to_string()), perms);
        }
        if URL_PATTERN.is_match(token) {
            return match parse_url(token) {
                Some(url) => Self::gate(Property::OpenUrl(url), perms),
                None => {
                    log::trace!("token matched the URL heuristic but failed to parse: {token}");
                    None
                }
            };
        }
        if let Some(color) = Color::resolve(token) {
            return Self::gate(Property::Color(color), perms);
        }
        match Style::resolve(token) {
            StyleMatch::Flag(flag) => return Self::gate(Property::Style(flag), perms),
            StyleMatch::Ambiguous => {
                log::trace!("ambiguous style token rejected: {token}");
                return None;
            }
            StyleMatch::None => {}
        }
        if Style::is_reset_token(token) {
            return Self::gate(Property::Reset, perms);
        }
        let hover = crate::parser::parse(token, perms);
        Self::gate(Property::ShowText(hover), perms)
    }

    fn gate(property: Property, perms: &dyn Permissions) -> Option<Property> {
        if perms.allow(&property) {
            Some(property)
        } else {
            log::trace!("property dropped by permissions: {property:?}");
            None
        }
    }

    /// Fold this property into a node's attributes.
    pub(crate) fn apply(self, node: &mut Node) {
        match self {
            Property::Color(color) => node.set_color(color),
            Property::Style(flag) => node.add_style(flag),
            Property::Reset => node.add_style(Style::RESET),
            Property::RunCommand(cmd) => node.set_click(crate::node::ClickAction::RunCommand(cmd)),
            Property::SuggestCommand(cmd) => {
                node.set_click(crate::node::ClickAction::SuggestCommand(cmd))
            }
            Property::OpenUrl(url) => node.set_click(crate::node::ClickAction::OpenUrl(url)),
            Property::InsertText(text) => node.set_insertion(text),
            Property::ShowText(text) => node.set_hover(text),
        }
    }
}

/// Validate and normalize a URL candidate; scheme-less hosts get `http://`.
fn parse_url(token: &str) -> Option<Url> {
    if SCHEME_PATTERN.is_match(token) {
        Url::parse(token).ok()
    } else {
        Url::parse(&format!("http://{token}")).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(token: &str) -> Option<Property> {
        Property::classify(token, &AllowAll)
    }

    #[test]
    fn empty_token() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
    }

    #[test]
    fn run_command() {
        assert_eq!(
            classify("/spawn home"),
            Some(Property::RunCommand("/spawn home".into()))
        );
    }

    #[test]
    fn suggest_command_keeps_one_slash() {
        assert_eq!(
            classify("//msg admin hi"),
            Some(Property::SuggestCommand("/msg admin hi".into()))
        );
    }

    #[test]
    fn url_with_scheme() {
        let property = classify("https://google.com").unwrap();
        match property {
            Property::OpenUrl(url) => assert_eq!(url.as_str(), "https://google.com/"),
            other => panic!("expected OpenUrl, got {other:?}"),
        }
    }

    #[test]
    fn url_without_scheme_gets_http() {
        let property = classify("example.com/path").unwrap();
        match property {
            Property::OpenUrl(url) => assert_eq!(url.as_str(), "http://example.com/path"),
            other => panic!("expected OpenUrl, got {other:?}"),
        }
    }

    #[test]
    fn www_prefix_is_a_url() {
        assert!(matches!(classify("www.example.com"), Some(Property::OpenUrl(_))));
    }

    #[test]
    fn plain_words_are_not_urls() {
        // No dot-TLD or port, so these fall through to color/style/hover.
        assert_eq!(classify("red"), Some(Property::Color(Color::Red)));
        assert_eq!(classify("bold"), Some(Property::Style(Style::BOLD)));
    }

    #[test]
    fn color_before_style() {
        // "a" is a legacy color code, not a prefix of any style.
        assert_eq!(classify("a"), Some(Property::Color(Color::Green)));
    }

    #[test]
    fn reset_token() {
        assert_eq!(classify("reset"), Some(Property::Reset));
        assert_eq!(classify("r"), Some(Property::Reset));
    }

    #[test]
    fn unknown_token_becomes_hover_text() {
        match classify("click me!").unwrap() {
            Property::ShowText(node) => assert_eq!(node.to_plain(), "click me!"),
            other => panic!("expected ShowText, got {other:?}"),
        }
    }

    #[test]
    fn hover_content_is_parsed_as_markup() {
        match classify("[hint](gold)").unwrap() {
            Property::ShowText(node) => {
                assert_eq!(node.to_plain(), "hint");
                assert_eq!(node.color(), Some(Color::Gold));
            }
            other => panic!("expected ShowText, got {other:?}"),
        }
    }

    #[test]
    fn deny_all_drops_everything() {
        assert_eq!(Property::classify("red", &DenyAll), None);
        assert_eq!(Property::classify("/spawn", &DenyAll), None);
        assert_eq!(Property::classify("hover text", &DenyAll), None);
    }

    #[test]
    fn selective_permissions() {
        let colors_only = |p: &Property| matches!(p, Property::Color(_));
        assert_eq!(
            Property::classify("red", &colors_only),
            Some(Property::Color(Color::Red))
        );
        assert_eq!(Property::classify("bold", &colors_only), None);
    }
}
