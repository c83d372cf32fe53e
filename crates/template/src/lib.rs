//! Argument-interpolating templates that expand to markup source.
//!
//! Template source is ordinary markup with `{...}` arguments mixed in:
//!
//! - `{name}` - the textual form of the value bound to `name`
//! - `{key:template}` - render the nested template once per element of
//!   the bound collection (once for a scalar, with `.` bound to it)
//! - `{key:template:separator}` - as above, separator between renders
//!
//! Backslash escapes and backtick quoting behave exactly as they do in
//! markup: an escaped or quoted `{` is plain text. Compilation and
//! evaluation are both total; malformed constructs and unbound names
//! degrade rather than fail.
//!
//! # Usage
//!
//! ```
//! use template::{Arguments, Template, Value};
//!
//! let template = Template::compile("[Users: {users:{.}:, }](gold)");
//! let args = Arguments::new().with("users", vec!["steve", "alex"]);
//! assert_eq!(template.apply(&args), "[Users: steve, alex](gold)");
//!
//! // Or go straight to a span tree.
//! let node = template.render(&args, &markup::AllowAll);
//! assert_eq!(node.to_plain(), "Users: steve, alex");
//! ```

pub mod component;
pub mod error;
pub mod value;

mod compile;
mod eval;

pub use component::{Component, Template};
pub use error::Error;
pub use value::{Arguments, Value};
