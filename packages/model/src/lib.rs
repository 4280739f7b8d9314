//! # Notedown Model
//!
//! Data model for notedown block trees.
//!
//! A note's body is a forest of [`Block`]s: ordered root blocks, each with
//! ordered children. Blocks are immutable values shared via `Arc`; the editor
//! crate produces new trees that reuse untouched subtrees by reference, so
//! consumers can detect change with pointer identity instead of deep
//! comparison.
//!
//! This crate holds the types plus the read-only queries (path lookup and
//! ancestor chains). All structural edits live in `notedown-editor`.

mod block;
mod id_generator;
mod path;

pub use block::{
    Block, BlockKind, BlockPatch, BlockStyle, BlockTree, FontFamily, FontSize, Patch, TextAlign,
};
pub use id_generator::IdGenerator;
pub use path::{block_chain, contains_block, find_block_path, BlockLocation};
