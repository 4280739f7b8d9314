use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A block forest: the body of a note is an ordered sequence of root blocks.
///
/// Blocks are held behind `Arc` so that trees produced by the editor share
/// every untouched subtree with their predecessor. Two snapshots can be
/// compared with `Arc::ptr_eq` to find what actually changed.
pub type BlockTree = Vec<Arc<Block>>;

/// Rendering/semantic kind of a block.
///
/// The tree engine never inspects this; it exists for the renderer and is
/// carried through every structural operation unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Text,
    Heading,
    Todo,
    Image,
    Bullet,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Sans,
    Serif,
    Mono,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontSize {
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

/// Inline text styling carried by a block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_underline: Option<bool>,
}

/// A node in the block tree.
///
/// `id` is assigned by the caller at creation time and must be unique across
/// the entire tree; the engine relies on it for addressing and never rewrites
/// it. `content` and `props` are opaque payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub content: String,
    /// Completion state for todo blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// ISO-8601 date string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<String>,
    /// Open attribute bag (heading level, table data, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BlockStyle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Arc<Block>>,
}

impl Block {
    /// Create a leaf block with the given identity, kind, and content.
    pub fn new(id: impl Into<String>, kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            content: content.into(),
            completed: None,
            reminder: None,
            props: None,
            style: None,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Shallow-merge a patch into this block, producing the replacement value.
    ///
    /// Only the fields the patch names change; `id` and `children` are always
    /// carried over (children by reference, so descendants keep identity).
    pub fn with_patch(&self, patch: &BlockPatch) -> Block {
        let mut next = self.clone();
        if let Some(kind) = patch.kind {
            next.kind = kind;
        }
        if let Some(content) = &patch.content {
            next.content = content.clone();
        }
        patch.completed.apply_to(&mut next.completed);
        patch.reminder.apply_to(&mut next.reminder);
        patch.style.apply_to(&mut next.style);
        patch.props.apply_to(&mut next.props);
        next
    }
}

/// Three-way field patch: leave the field alone, set it, or clear it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Patch<T> {
    #[default]
    Keep,
    Set(T),
    Clear,
}

impl<T: Clone> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    fn apply_to(&self, field: &mut Option<T>) {
        match self {
            Patch::Keep => {}
            Patch::Set(value) => *field = Some(value.clone()),
            Patch::Clear => *field = None,
        }
    }
}

/// Partial update for a single block: a shallow merge of named fields.
///
/// Required fields (`kind`, `content`) can only be replaced, never cleared;
/// optional fields use [`Patch`] so callers can distinguish "leave alone"
/// from "clear". Identity and children are deliberately not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<BlockKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub completed: Patch<bool>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub reminder: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub style: Patch<BlockStyle>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub props: Patch<serde_json::Map<String, serde_json::Value>>,
}

impl BlockPatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
}
