//! The markup serializer.
//!
//! Walks a [`Node`] tree and re-emits markup source. The writer and the
//! property classifier agree on token vocabulary and escaping, so parsing a
//! written tree reproduces an equivalent tree.

use std::fmt;

use crate::node::{ClickAction, HoverAction, Node};

/// Characters that give a token or leaf special meaning when re-parsed.
const SPECIAL: [char; 7] = ['[', ']', '(', ')', ',', '`', '\\'];

/// Serializes span trees to markup source.
pub struct Writer<W: fmt::Write> {
    out: W,
}

impl<W: fmt::Write> Writer<W> {
    pub fn new(out: W) -> Self {
        Writer { out }
    }

    /// Write one tree.
    ///
    /// With `escape` set, leaf text containing markup-significant characters
    /// is backtick-quoted; this is required when the output is embedded in
    /// another markup document (hover content always is).
    pub fn write(&mut self, node: &Node, escape: bool) -> fmt::Result {
        if node.is_plain() {
            return self.write_content(node, escape);
        }
        self.out.write_char('[')?;
        self.write_content(node, escape)?;
        self.out.write_str("](")?;
        let mut comma = self.write_click(node, false)?;
        comma = self.write_hover(node, comma)?;
        comma = self.write_color(node, comma)?;
        self.write_styles(node, comma)?;
        self.out.write_char(')')
    }

    fn write_content(&mut self, node: &Node, escape: bool) -> fmt::Result {
        let text = node.content();
        self.write_text(text, escape && text.contains(&SPECIAL[..]))?;
        for child in node.children() {
            self.write(child, escape)?;
        }
        Ok(())
    }

    fn write_click(&mut self, node: &Node, comma: bool) -> Result<bool, fmt::Error> {
        match node.click() {
            Some(ClickAction::RunCommand(cmd)) => self.write_token(cmd, comma),
            // Re-parsed as `//cmd` -> suggest `/cmd`.
            Some(ClickAction::SuggestCommand(cmd)) => self.write_token(&format!("/{cmd}"), comma),
            Some(ClickAction::OpenUrl(url)) => self.write_token(url.as_str(), comma),
            None => Ok(comma),
        }
    }

    fn write_hover(&mut self, node: &Node, comma: bool) -> Result<bool, fmt::Error> {
        match node.hover() {
            Some(HoverAction::ShowText(text)) => {
                if comma {
                    self.out.write_char(',')?;
                }
                self.write(text, true)?;
                Ok(true)
            }
            None => Ok(comma),
        }
    }

    fn write_color(&mut self, node: &Node, comma: bool) -> Result<bool, fmt::Error> {
        match node.color() {
            Some(color) => self.write_token(color.name(), comma),
            None => Ok(comma),
        }
    }

    fn write_styles(&mut self, node: &Node, mut comma: bool) -> Result<bool, fmt::Error> {
        for token in node.style().tokens() {
            comma = self.write_token(token, comma)?;
        }
        Ok(comma)
    }

    fn write_token(&mut self, token: &str, comma: bool) -> Result<bool, fmt::Error> {
        if comma {
            self.out.write_char(',')?;
        }
        self.write_text(token, token.contains(&SPECIAL[..]))?;
        Ok(true)
    }

    /// Emit text, backtick-quoting it when it would otherwise be read as
    /// markup. Backticks and backslashes inside a quoted run are
    /// backslash-escaped.
    fn write_text(&mut self, text: &str, quote: bool) -> fmt::Result {
        if !quote {
            return self.out.write_str(text);
        }
        self.out.write_char('`')?;
        for c in text.chars() {
            if c == '`' || c == '\\' {
                self.out.write_char('\\')?;
            }
            self.out.write_char(c)?;
        }
        self.out.write_char('`')
    }
}

impl Node {
    /// Serialize this tree to markup source.
    ///
    /// # Examples
    ///
    /// ```
    /// use markup::{parse, AllowAll};
    ///
    /// let node = parse("[Hello](blue,bold)", &AllowAll);
    /// assert_eq!(node.to_markup(false), "[Hello](blue,bold)");
    /// ```
    pub fn to_markup(&self, escape: bool) -> String {
        let mut out = String::new();
        Writer::new(&mut out)
            .write(self, escape)
            .expect("writing to a String cannot fail");
        out
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Writer::new(f).write(self, false)
    }
}
