//! The styled span tree produced by parsing.

use url::Url;

use crate::color::Color;
use crate::style::Style;

/// Action taken when a span is clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Execute a command (the string includes the leading `/`).
    RunCommand(String),
    /// Place a command in the caller's input, ready to send.
    SuggestCommand(String),
    /// Open a URL.
    OpenUrl(Url),
}

/// Action taken when a span is hovered.
#[derive(Clone, Debug, PartialEq)]
pub enum HoverAction {
    /// Display another span tree as hover text.
    ShowText(Box<Node>),
}

/// An immutable styled text span.
///
/// A node owns a text run, an ordered list of child nodes, and the
/// formatting and actions applied to the whole subtree. A node with no
/// color, no style flags, and no actions is *plain* and serializes without
/// surrounding brackets.
///
/// Nodes are built bottom-up by the parser and never mutated afterwards;
/// the writer only reads them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    text: String,
    children: Vec<Node>,
    color: Option<Color>,
    style: Style,
    click: Option<ClickAction>,
    hover: Option<HoverAction>,
    insertion: Option<String>,
}

impl Node {
    /// Create a plain leaf node.
    pub fn text(text: impl Into<String>) -> Self {
        Node {
            text: text.into(),
            ..Node::default()
        }
    }

    /// This node's own text run (empty for pure container nodes).
    pub fn content(&self) -> &str {
        &self.text
    }

    /// Child nodes, in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn click(&self) -> Option<&ClickAction> {
        self.click.as_ref()
    }

    pub fn hover(&self) -> Option<&HoverAction> {
        self.hover.as_ref()
    }

    /// Text inserted into the caller's input on shift-click.
    pub fn insertion(&self) -> Option<&str> {
        self.insertion.as_deref()
    }

    /// True if this node carries no formatting and no actions.
    pub fn is_plain(&self) -> bool {
        self.color.is_none()
            && self.style.is_empty()
            && self.click.is_none()
            && self.hover.is_none()
            && self.insertion.is_none()
    }

    /// True if this node renders no text at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.children.iter().all(Node::is_empty)
    }

    /// The concatenated text of this node and its children, unstyled.
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        self.collect_plain(&mut out);
        out
    }

    fn collect_plain(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.collect_plain(out);
        }
    }

    // Host-side construction, for trees not produced by the parser.

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style |= style;
        self
    }

    pub fn with_click(mut self, action: ClickAction) -> Self {
        self.click = Some(action);
        self
    }

    pub fn with_hover(mut self, text: Node) -> Self {
        self.hover = Some(HoverAction::ShowText(Box::new(text)));
        self
    }

    pub fn with_insertion(mut self, text: impl Into<String>) -> Self {
        self.insertion = Some(text.into());
        self
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    pub(crate) fn add_style(&mut self, style: Style) {
        self.style |= style;
    }

    pub(crate) fn set_click(&mut self, action: ClickAction) {
        self.click = Some(action);
    }

    pub(crate) fn set_hover(&mut self, text: Node) {
        self.hover = Some(HoverAction::ShowText(Box::new(text)));
    }

    pub(crate) fn set_insertion(&mut self, text: String) {
        self.insertion = Some(text);
    }

    pub(crate) fn from_parts(text: String, children: Vec<Node>) -> Self {
        Node {
            text,
            children,
            ..Node::default()
        }
    }
}
