//! Domain entities: blocks, rich text runs, pagination envelope, manifest
//!
//! `Block` mirrors the wire shape `{id, type, has_children, <type>: {..}}`
//! where the payload sits under a key named after the block type. An
//! intermediate raw struct captures that shape; `TryFrom` folds it into a
//! tagged sum type with an explicit catch-all so unrecognized block types
//! degrade instead of failing the export.

use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::error::DomainError;

/// One unit of the source content tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawBlock")]
pub struct Block {
    pub id: String,
    pub has_children: bool,
    pub kind: BlockKind,
}

/// Typed block content, one variant per recognized type.
#[derive(Debug, Clone)]
pub enum BlockKind {
    /// `heading_1` / `heading_2` / `heading_3`, level is 1..=3
    Heading { level: u8, text: Vec<RichText> },
    Paragraph { text: Vec<RichText> },
    BulletedItem { text: Vec<RichText> },
    NumberedItem { text: Vec<RichText> },
    ToDo { text: Vec<RichText>, checked: bool },
    Quote { text: Vec<RichText> },
    Code { text: Vec<RichText>, language: String },
    /// Reference to a sub-page; carries the plain title only
    ChildPage { title: String },
    /// Any unrecognized type, reduced to its rich text runs when present
    Other { text: Option<Vec<RichText>> },
}

impl BlockKind {
    pub fn is_child_page(&self) -> bool {
        matches!(self, BlockKind::ChildPage { .. })
    }
}

/// A styled fragment of inline text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RichText {
    pub plain_text: String,
    pub annotations: Annotations,
    pub href: Option<String>,
}

/// Independent style flags; any combination is valid.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub code: bool,
}

/// One page of a children listing.
///
/// The cursor lives only for the duration of a single fetch-all-children
/// loop; it is never persisted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChildrenPage {
    pub results: Vec<Block>,
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

/// Wire shape of a block before folding into `BlockKind`.
#[derive(Debug, Deserialize)]
struct RawBlock {
    #[serde(default)]
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    has_children: bool,
    #[serde(flatten)]
    payload: serde_json::Map<String, Value>,
}

/// Payload carrying only rich text runs (paragraph, headings, lists, quote).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct TextPayload {
    rich_text: Vec<RichText>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ToDoPayload {
    rich_text: Vec<RichText>,
    checked: bool,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CodePayload {
    rich_text: Vec<RichText>,
    language: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ChildPagePayload {
    title: String,
}

impl TryFrom<RawBlock> for Block {
    type Error = DomainError;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        let payload = raw.payload.get(&raw.kind);
        let kind = BlockKind::from_wire(&raw.kind, payload)?;
        Ok(Block {
            id: raw.id,
            has_children: raw.has_children,
            kind,
        })
    }
}

impl BlockKind {
    /// Fold a type discriminant plus its type-keyed payload into a variant.
    ///
    /// Recognized types require a parseable payload; unknown types are
    /// reduced to their `rich_text` field (if any) and never fail.
    fn from_wire(kind: &str, payload: Option<&Value>) -> Result<Self, DomainError> {
        fn parse<T>(kind: &str, payload: Option<&Value>) -> Result<T, DomainError>
        where
            T: serde::de::DeserializeOwned,
        {
            let value = payload.ok_or_else(|| DomainError::MalformedBlock {
                kind: kind.to_string(),
                message: "missing payload".to_string(),
            })?;
            serde_json::from_value(value.clone()).map_err(|e| DomainError::MalformedBlock {
                kind: kind.to_string(),
                message: e.to_string(),
            })
        }

        Ok(match kind {
            "heading_1" | "heading_2" | "heading_3" => {
                let p: TextPayload = parse(kind, payload)?;
                // suffix is 1, 2 or 3 by the match arm above
                let level = kind.as_bytes()[kind.len() - 1] - b'0';
                BlockKind::Heading {
                    level,
                    text: p.rich_text,
                }
            }
            "paragraph" => {
                let p: TextPayload = parse(kind, payload)?;
                BlockKind::Paragraph { text: p.rich_text }
            }
            "bulleted_list_item" => {
                let p: TextPayload = parse(kind, payload)?;
                BlockKind::BulletedItem { text: p.rich_text }
            }
            "numbered_list_item" => {
                let p: TextPayload = parse(kind, payload)?;
                BlockKind::NumberedItem { text: p.rich_text }
            }
            "to_do" => {
                let p: ToDoPayload = parse(kind, payload)?;
                BlockKind::ToDo {
                    text: p.rich_text,
                    checked: p.checked,
                }
            }
            "quote" => {
                let p: TextPayload = parse(kind, payload)?;
                BlockKind::Quote { text: p.rich_text }
            }
            "code" => {
                let p: CodePayload = parse(kind, payload)?;
                BlockKind::Code {
                    text: p.rich_text,
                    language: p.language,
                }
            }
            "child_page" => {
                let p: ChildPagePayload = parse(kind, payload)?;
                BlockKind::ChildPage { title: p.title }
            }
            _ => {
                let text = match payload.and_then(|v| v.get("rich_text")) {
                    Some(runs) => Some(serde_json::from_value(runs.clone()).map_err(|e| {
                        DomainError::MalformedBlock {
                            kind: kind.to_string(),
                            message: e.to_string(),
                        }
                    })?),
                    None => None,
                };
                BlockKind::Other { text }
            }
        })
    }
}

/// One manifest entry: where a page goes and under which title.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageRef {
    pub title: String,
    pub path: PathBuf,
}

/// The caller-supplied work list, in manifest order.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub pages: Vec<(String, PageRef)>,
}

impl Manifest {
    /// Parse a JSON object `page_id -> {title, path}`.
    ///
    /// Entry order is the JSON object order; exports run strictly in this
    /// order.
    pub fn from_reader(reader: impl Read) -> Result<Self, DomainError> {
        let map: serde_json::Map<String, Value> =
            serde_json::from_reader(reader).map_err(|e| DomainError::InvalidManifest {
                message: e.to_string(),
            })?;

        let mut pages = Vec::with_capacity(map.len());
        for (page_id, value) in map {
            let page: PageRef = serde_json::from_value(value).map_err(|e| {
                DomainError::InvalidManifestEntry {
                    page_id: page_id.clone(),
                    message: e.to_string(),
                }
            })?;
            pages.push((page_id, page));
        }
        Ok(Manifest { pages })
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }
}
