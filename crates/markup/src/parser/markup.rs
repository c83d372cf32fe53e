//! The recursive-descent markup parser.
//!
//! Grammar, informally: text with backslash escapes and backtick-quoted
//! runs; `[` opens a nested span, which must be followed by `](list)` where
//! `list` is a comma-separated property list. Anything malformed (a `]` with
//! no `(`, an unterminated bracket or property list) is not an error: the
//! original characters come back out as literal text.

use crate::node::Node;
use crate::property::{Permissions, Property};

use super::builder::NodeBuilder;
use super::cursor::Cursor;

/// Bracket nesting bound. Nesting past this depth is treated as literal
/// text so pathological input cannot exhaust the stack.
const MAX_DEPTH: usize = 64;

/// What ended a text run.
enum TextEnd {
    Open,
    Close,
    Eof,
}

/// Parse markup source into a styled span tree.
///
/// This is a total function: any string yields a tree, with malformed
/// constructs preserved as literal text. Every classified property is gated
/// by `perms` before it is applied.
///
/// # Examples
///
/// ```
/// use markup::{parse, AllowAll, Color, Style};
///
/// let node = parse("[world](green,underline)", &AllowAll);
/// assert_eq!(node.content(), "world");
/// assert_eq!(node.color(), Some(Color::Green));
/// assert!(node.style().contains(Style::UNDERLINE));
/// ```
pub fn parse(input: &str, perms: &dyn Permissions) -> Node {
    let mut cursor = Cursor::new(input);
    let mut root = NodeBuilder::new();
    loop {
        match read_text(&mut cursor, &mut root) {
            TextEnd::Open => {
                let child = parse_bracket(&mut cursor, perms, 1);
                root.append(child);
            }
            // A stray `]` at the top level is ordinary text.
            TextEnd::Close => root.push_char(']'),
            TextEnd::Eof => break,
        }
    }
    root.build()
}

/// Parse the body of a `[`, up to and including its property list.
fn parse_bracket(cursor: &mut Cursor<'_>, perms: &dyn Permissions, depth: usize) -> NodeBuilder {
    let mut builder = NodeBuilder::new();
    loop {
        match read_text(cursor, &mut builder) {
            TextEnd::Close => {
                return match cursor.peek() {
                    Some('(') => {
                        cursor.next();
                        parse_properties(cursor, builder, perms)
                    }
                    // `]` not followed by `(` is not markup.
                    _ => builder.fail(Some(']')),
                };
            }
            TextEnd::Open => {
                if depth < MAX_DEPTH {
                    let child = parse_bracket(cursor, perms, depth + 1);
                    builder.append(child);
                } else {
                    log::debug!("bracket nesting deeper than {MAX_DEPTH}, treating as text");
                    builder.push_char('[');
                }
            }
            TextEnd::Eof => return builder.fail(None),
        }
    }
}

/// Read the comma-separated property list after `](`.
fn parse_properties(
    cursor: &mut Cursor<'_>,
    mut builder: NodeBuilder,
    perms: &dyn Permissions,
) -> NodeBuilder {
    // Everything consumed, kept verbatim in case the list never terminates.
    let mut raw = String::from("](");
    let mut buffer = String::new();
    loop {
        match read_property(cursor, &mut buffer, &mut raw) {
            Some(end) => {
                if let Some(property) = Property::classify(buffer.trim(), perms) {
                    builder.push_property(property);
                }
                if end == ')' {
                    return builder;
                }
                buffer.clear();
            }
            None => break,
        }
    }
    builder.clear_properties();
    builder.push_str(&raw);
    builder.fail(None)
}

/// Copy text into `builder` until an unescaped `[` or `]`.
///
/// A backslash escapes the next character; a backtick toggles a quoted run
/// in which only a backslash escape or a closing backtick is special.
fn read_text(cursor: &mut Cursor<'_>, builder: &mut NodeBuilder) -> TextEnd {
    let mut quoted = false;
    let mut escaped = false;
    while let Some(c) = cursor.next() {
        if escaped {
            builder.push_char(c);
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }
        if quoted {
            if c == '`' {
                quoted = false;
            } else {
                builder.push_char(c);
            }
            continue;
        }
        match c {
            '[' => return TextEnd::Open,
            ']' => return TextEnd::Close,
            '`' => quoted = true,
            _ => builder.push_char(c),
        }
    }
    TextEnd::Eof
}

/// Read one property token into `buffer`, mirroring every consumed
/// character into `raw`.
///
/// Commas and the closing `)` only terminate at parenthesis depth zero, so
/// a parenthesized hover body inside a token stays whole. Returns the
/// terminator, or `None` at end of input.
fn read_property(cursor: &mut Cursor<'_>, buffer: &mut String, raw: &mut String) -> Option<char> {
    let mut depth = 0usize;
    let mut quoted = false;
    let mut escaped = false;
    while let Some(c) = cursor.next() {
        raw.push(c);
        if escaped {
            buffer.push(c);
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }
        if quoted {
            if c == '`' {
                quoted = false;
            } else {
                buffer.push(c);
            }
            continue;
        }
        match c {
            '`' => quoted = true,
            ',' if depth == 0 => return Some(','),
            ')' if depth == 0 => return Some(')'),
            ')' => {
                depth -= 1;
                buffer.push(c);
            }
            '(' => {
                depth += 1;
                buffer.push(c);
            }
            _ => buffer.push(c),
        }
    }
    None
}
