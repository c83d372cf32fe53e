//! Bracket markup for styled, interactive text spans.
//!
//! This crate parses a small markup notation into a tree of styled spans
//! ([`Node`]) and serializes such trees back to markup source.
//!
//! # Overview
//!
//! The notation wraps text in square brackets and attaches a property list
//! in parentheses:
//!
//! - `[text](red)` - color the span
//! - `[text](blue,bold,underline)` - combine color and style flags
//! - `[text](/spawn)` - run a command on click
//! - `[text](//msg)` - suggest a command on click
//! - `[text](https://example.com)` - open a URL on click
//! - `[text](anything else)` - show the token as hover text
//! - `[outer [inner](green)](blue)` - spans nest
//! - `` `[not markup]` `` - backticks quote a literal run
//! - `\[` - a backslash escapes one character
//!
//! Malformed markup is never an error: a bracket without a property list,
//! or an unterminated one, comes back as literal text. Every property is
//! gated by a caller-supplied [`Permissions`] check before it is applied,
//! which makes it safe to feed untrusted input through the parser.
//!
//! # Usage
//!
//! ```
//! use markup::{parse, AllowAll, Color, Style};
//!
//! let node = parse("[Hello [world](green,underline)](blue)", &AllowAll);
//! assert_eq!(node.color(), Some(Color::Blue));
//! assert_eq!(node.to_plain(), "Hello world");
//!
//! let child = &node.children()[0];
//! assert_eq!(child.color(), Some(Color::Green));
//! assert!(child.style().contains(Style::UNDERLINE));
//!
//! // Serialization round-trips.
//! assert_eq!(node.to_markup(false), "[Hello [world](green,underline)](blue)");
//! ```

pub mod color;
pub mod node;
pub mod parser;
pub mod property;
pub mod style;
pub mod writer;

// Re-export main types at crate root
pub use color::Color;
pub use node::{ClickAction, HoverAction, Node};
pub use parser::parse;
pub use property::{AllowAll, DenyAll, Permissions, Property};
pub use style::{Style, StyleMatch};
pub use writer::Writer;
