//! Markup parsing.
//!
//! This module contains the character cursor, the node accumulator, and the
//! recursive-descent parser itself.

mod builder;
mod cursor;
mod markup;

pub use markup::parse;
