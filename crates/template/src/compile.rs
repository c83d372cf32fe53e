//! The template compiler.
//!
//! A single left-to-right scan over the source. Backslash escapes and
//! backtick-quoted runs suppress the special meaning of `{`, `}` and `:`
//! but stay in the output verbatim; the markup parser consumes them in the
//! second pipeline stage.

use crate::component::Component;

/// Walks the source yielding only syntactically significant characters.
struct Scanner<'a> {
    iter: std::str::CharIndices<'a>,
    /// Byte offset one past the last significant character.
    after: usize,
    quoted: bool,
    escaped: bool,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            iter: input.char_indices(),
            after: 0,
            quoted: false,
            escaped: false,
        }
    }

    /// The next character that can carry syntax, with its byte offset.
    /// Escaped characters and quoted runs are passed over; the characters
    /// themselves remain in the source slices.
    fn next(&mut self) -> Option<(usize, char)> {
        for (i, c) in self.iter.by_ref() {
            if self.escaped {
                self.escaped = false;
                continue;
            }
            if self.quoted {
                if c == '`' {
                    self.quoted = false;
                }
                continue;
            }
            match c {
                '\\' => self.escaped = true,
                '`' => self.quoted = true,
                _ => {
                    self.after = i + c.len_utf8();
                    return Some((i, c));
                }
            }
        }
        None
    }
}

/// Compile template source into a component list. Total: malformed
/// arguments degrade to plain text.
pub(crate) fn compile(input: &str) -> Vec<Component> {
    let mut scanner = Scanner::new(input);
    parse_list(input, &mut scanner, false).0
}

/// Parse components until end of input or, inside an argument, until an
/// unconsumed `}` or `:`. Returns the terminator.
fn parse_list<'a>(
    input: &'a str,
    scanner: &mut Scanner<'a>,
    in_arg: bool,
) -> (Vec<Component>, Option<char>) {
    let mut list = Vec::new();
    let mut start = scanner.after;
    while let Some((i, c)) = scanner.next() {
        match c {
            '{' => {
                push_plain(&mut list, &input[start..i]);
                parse_arg(input, scanner, &mut list);
                start = scanner.after;
            }
            '}' | ':' if in_arg => {
                push_plain(&mut list, &input[start..i]);
                return (list, Some(c));
            }
            _ => {}
        }
    }
    push_plain(&mut list, &input[start..]);
    (list, None)
}

/// Parse one `{...}` argument. The opening `{` is already consumed.
fn parse_arg<'a>(input: &'a str, scanner: &mut Scanner<'a>, list: &mut Vec<Component>) {
    let body_start = scanner.after;

    // Key runs to the first `:` or `}`.
    let key = loop {
        match scanner.next() {
            Some((i, ':')) => break &input[body_start..i],
            Some((i, '}')) => {
                list.push(Component::Arg(input[body_start..i].to_string()));
                return;
            }
            Some(_) => continue,
            None => {
                // Unterminated argument: everything after `{` is plain.
                push_plain(list, &input[body_start..]);
                return;
            }
        }
    };

    // Children run to the matching `}`, or to a second top-depth `:`
    // which starts the separator.
    let (children, terminator) = parse_list(input, scanner, true);
    let separator = match terminator {
        Some('}') => String::new(),
        Some(_) => {
            let sep_start = scanner.after;
            loop {
                match scanner.next() {
                    Some((i, '}')) => break input[sep_start..i].to_string(),
                    Some(_) => continue,
                    None => {
                        push_plain(list, &input[body_start..]);
                        return;
                    }
                }
            }
        }
        None => {
            push_plain(list, &input[body_start..]);
            return;
        }
    };

    list.push(Component::Block {
        key: key.to_string(),
        separator,
        children,
    });
}

fn push_plain(list: &mut Vec<Component>, text: &str) {
    if !text.is_empty() {
        list.push(Component::Plain(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Component {
        Component::Plain(text.to_string())
    }

    fn arg(key: &str) -> Component {
        Component::Arg(key.to_string())
    }

    fn block(key: &str, separator: &str, children: Vec<Component>) -> Component {
        Component::Block {
            key: key.to_string(),
            separator: separator.to_string(),
            children,
        }
    }

    #[test]
    fn plain_source() {
        assert_eq!(compile("hello world"), vec![plain("hello world")]);
    }

    #[test]
    fn empty_source() {
        assert_eq!(compile(""), Vec::<Component>::new());
    }

    #[test]
    fn single_arg() {
        assert_eq!(compile("{name}"), vec![arg("name")]);
    }

    #[test]
    fn arg_between_text() {
        assert_eq!(
            compile("Hello {name}!"),
            vec![plain("Hello "), arg("name"), plain("!")]
        );
    }

    #[test]
    fn block_without_separator() {
        assert_eq!(
            compile("{users:{name}}"),
            vec![block("users", "", vec![arg("name")])]
        );
    }

    #[test]
    fn block_with_separator() {
        assert_eq!(
            compile("{users:[{name}](green):, }"),
            vec![block("users", ", ", vec![plain("["), arg("name"), plain("](green)")])]
        );
    }

    #[test]
    fn separator_may_contain_colons() {
        assert_eq!(
            compile("{k:{.}: - }"),
            vec![block("k", " - ", vec![arg(".")])]
        );
    }

    #[test]
    fn empty_key_groups() {
        assert_eq!(compile("{:a{x}b}"), vec![block("", "", vec![plain("a"), arg("x"), plain("b")])]);
    }

    #[test]
    fn nested_blocks() {
        assert_eq!(
            compile("{outer:{inner:{.}}}"),
            vec![block("outer", "", vec![block("inner", "", vec![arg(".")])])]
        );
    }

    #[test]
    fn escaped_brace_is_plain() {
        assert_eq!(compile(r"a \{b} c"), vec![plain(r"a \{b} c")]);
    }

    #[test]
    fn quoted_run_is_plain() {
        assert_eq!(compile("`{not an arg}`"), vec![plain("`{not an arg}`")]);
    }

    #[test]
    fn escapes_inside_arg_stay_verbatim() {
        assert_eq!(
            compile(r"{users:\[{name}\]:, }"),
            vec![block("users", ", ", vec![plain(r"\["), arg("name"), plain(r"\]")])]
        );
    }

    #[test]
    fn unterminated_arg_degrades_to_plain() {
        assert_eq!(compile("a {name"), vec![plain("a "), plain("name")]);
        assert_eq!(compile("a {k:{x}"), vec![plain("a "), plain("k:{x}")]);
    }

    #[test]
    fn multibyte_text() {
        assert_eq!(
            compile("日本{name}語"),
            vec![plain("日本"), arg("name"), plain("語")]
        );
    }
}
