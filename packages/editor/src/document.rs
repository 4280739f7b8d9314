//! # Document Handle
//!
//! Owns the current tree snapshot for one note body and applies mutations to
//! it. Each successful mutation swaps in the new snapshot and bumps the
//! version, so consumers can cheaply ask "did anything change since v?".
//!
//! Snapshots are plain values: cloning a [`Document`]'s blocks is a handful
//! of `Arc` bumps, and older snapshots stay valid after later edits — useful
//! for change detection or keeping a history outside this crate.
//!
//! Persistence stays with the caller; the only serialization here is the
//! JSON array-of-blocks form the surrounding application stores note bodies
//! in.

use notedown_model::{block_chain, find_block_path, Block, BlockLocation, BlockTree};
use std::sync::Arc;
use tracing::debug;

use crate::{EditorError, Mutation, MutationError};

/// An editable note body: the current block tree plus a version counter.
#[derive(Debug, Clone, Default)]
pub struct Document {
    blocks: BlockTree,
    version: u64,
}

impl Document {
    /// Wrap an existing tree snapshot.
    pub fn new(blocks: BlockTree) -> Self {
        Self { blocks, version: 0 }
    }

    /// Deserialize from the stored JSON form (an array of blocks).
    pub fn from_json(source: &str) -> Result<Self, EditorError> {
        let blocks: BlockTree = serde_json::from_str(source)?;
        Ok(Self::new(blocks))
    }

    /// Serialize the current snapshot back to the stored JSON form.
    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string(&self.blocks)?)
    }

    /// Current tree snapshot.
    pub fn blocks(&self) -> &BlockTree {
        &self.blocks
    }

    /// Version counter; increments once per successfully applied mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a mutation, replacing the held snapshot on success.
    ///
    /// On error the document is untouched: same snapshot, same version.
    pub fn apply(&mut self, mutation: &Mutation) -> Result<(), MutationError> {
        let next = mutation.apply(&self.blocks)?;
        self.blocks = next;
        self.version += 1;
        debug!(
            mutation = mutation.name(),
            version = self.version,
            "applied mutation"
        );
        Ok(())
    }

    /// Locate a block in the current snapshot.
    pub fn find(&self, id: &str) -> Option<BlockLocation> {
        find_block_path(&self.blocks, id)
    }

    /// Ancestor chain from a forest root down to the block.
    pub fn chain(&self, id: &str) -> Option<Vec<Arc<Block>>> {
        block_chain(&self.blocks, id)
    }
}
