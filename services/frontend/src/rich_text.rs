//! Rich-text documents
//!
//! Descriptions and recipe steps are serialized editor states: a `root` node
//! whose children are block nodes (paragraphs, headings, quotes, lists) that
//! in turn hold text nodes. Only the text and the block structure are kept.

use serde::Deserialize;

use crate::views::escape;

#[derive(Debug, Deserialize)]
struct EditorState {
    root: Node,
}

#[derive(Debug, Deserialize)]
struct Node {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    children: Vec<Node>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default, rename = "listType")]
    list_type: Option<String>,
}

impl Node {
    fn text_content(&self) -> String {
        if let Some(text) = &self.text {
            return text.clone();
        }

        if self.kind == "linebreak" {
            return "\n".to_string();
        }

        self.children.iter().map(Node::text_content).collect()
    }
}

/// Bullet or numbered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Number,
}

impl ListKind {
    fn from_list_type(list_type: Option<&str>) -> Self {
        match list_type {
            Some("number") => Self::Number,
            _ => Self::Bullet,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Bullet => "ul",
            Self::Number => "ol",
        }
    }
}

/// A top-level block of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(String),
    Heading(u8, String),
    Quote(String),
    ListItem(ListKind, String),
}

/// Flattened rich-text document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    blocks: Vec<Block>,
}

impl RichText {
    /// Parse a serialized editor state
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let state: EditorState = serde_json::from_str(raw)?;
        let mut blocks = Vec::new();
        collect_blocks(&state.root, &mut blocks);
        Ok(Self { blocks })
    }

    /// Parse a serialized editor state, treating anything else as plain text
    pub fn parse_or_plain(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|_| Self::plain(raw))
    }

    fn plain(raw: &str) -> Self {
        let text = raw.trim();
        if text.is_empty() {
            return Self::default();
        }

        Self {
            blocks: vec![Block::Paragraph(text.to_string())],
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Render the document as HTML, escaping all text
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let mut open_list: Option<ListKind> = None;

        for block in self.blocks() {
            let list = match block {
                Block::ListItem(kind, _) => Some(*kind),
                _ => None,
            };
            if list != open_list {
                if let Some(kind) = open_list {
                    html.push_str(&format!("</{}>", kind.tag()));
                }
                if let Some(kind) = list {
                    html.push_str(&format!("<{}>", kind.tag()));
                }
                open_list = list;
            }

            match block {
                Block::Paragraph(text) => {
                    html.push_str(&format!("<p>{}</p>", with_breaks(text)));
                }
                Block::Heading(level, text) => {
                    html.push_str(&format!("<h{level}>{}</h{level}>", with_breaks(text)));
                }
                Block::Quote(text) => {
                    html.push_str(&format!("<blockquote>{}</blockquote>", with_breaks(text)));
                }
                Block::ListItem(_, text) => {
                    html.push_str(&format!("<li>{}</li>", with_breaks(text)));
                }
            }
        }

        if let Some(kind) = open_list {
            html.push_str(&format!("</{}>", kind.tag()));
        }

        html
    }
}

fn with_breaks(text: &str) -> String {
    escape(text).replace('\n', "<br>")
}

fn heading_level(tag: Option<&str>) -> u8 {
    tag.and_then(|tag| tag.strip_prefix('h'))
        .and_then(|level| level.parse().ok())
        .filter(|level| (1..=6).contains(level))
        .unwrap_or(1)
}

fn collect_blocks(node: &Node, blocks: &mut Vec<Block>) {
    for child in &node.children {
        match child.kind.as_str() {
            "paragraph" => blocks.push(Block::Paragraph(child.text_content())),
            "heading" => blocks.push(Block::Heading(
                heading_level(child.tag.as_deref()),
                child.text_content(),
            )),
            "quote" => blocks.push(Block::Quote(child.text_content())),
            "list" => {
                let kind = ListKind::from_list_type(child.list_type.as_deref());
                blocks.extend(
                    child
                        .children
                        .iter()
                        .map(|item| Block::ListItem(kind, item.text_content())),
                );
            }
            _ if child.text.is_some() => blocks.push(Block::Paragraph(child.text_content())),
            _ => collect_blocks(child, blocks),
        }
    }
}
