//! # Notedown Editor
//!
//! Structural editing engine for notedown block trees.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Block types + read-only queries      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: structural mutations                │
//! │  - Copy-on-write tree operations            │
//! │  - Semantic Mutation enum with validation   │
//! │  - Document handle (snapshot + version)     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Trees are values**: no operation mutates its input; callers replace
//!    their held snapshot with the returned one.
//! 2. **Structural sharing**: only the spine from the forest root to the
//!    edited block is reallocated — untouched subtrees keep `Arc` identity,
//!    so consumers can diff snapshots by pointer comparison.
//! 3. **All-or-nothing**: an operation either fully applies or hands back the
//!    original tree. There is no partially-mutated state.
//! 4. **The caller owns identity**: block ids are minted outside the engine
//!    and assumed unique; the engine addresses by id and never rewrites one.
//!
//! ## Usage
//!
//! ```rust
//! use notedown_editor::{Document, Mutation};
//! use notedown_model::BlockPatch;
//!
//! let mut doc = Document::from_json(r#"[{"id":"1","type":"text","content":"hi"}]"#)?;
//!
//! doc.apply(&Mutation::Update {
//!     block_id: "1".to_string(),
//!     patch: BlockPatch::content("hello"),
//! })?;
//!
//! assert_eq!(doc.blocks()[0].content, "hello");
//! # Ok::<(), notedown_editor::EditorError>(())
//! ```

mod document;
mod errors;
mod mutations;
pub mod tree;

pub use document::Document;
pub use errors::EditorError;
pub use mutations::{Mutation, MutationError};
pub use tree::TreeUpdate;
