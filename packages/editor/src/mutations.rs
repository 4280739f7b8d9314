//! # Block Mutations
//!
//! High-level semantic operations on block trees.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation names a semantic edit, not a splice
//! 2. **Validated**: structural constraints are checked before anything runs
//! 3. **All-or-nothing**: a rejected mutation leaves the snapshot untouched
//!
//! ## Mutation Semantics
//!
//! ### Move
//! - Relocates a block (with its subtree) to the target block's slot
//! - Fails on self-move and on moves into the block's own descendants
//!
//! ### Update
//! - Shallow merge of a [`BlockPatch`] into the target block
//! - Missing target is a no-op, matching the low-level contract
//!
//! ### Remove
//! - Removes the block and all descendants
//! - Idempotent: removing an absent id is a no-op, not an error

use notedown_model::{contains_block, find_block_path, Block, BlockPatch, BlockTree};
use serde::{Deserialize, Serialize};
use std::slice;
use thiserror::Error;

use crate::tree;

/// Semantic mutations over a block tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Make the block the last child of its preceding sibling
    Indent { block_id: String },

    /// Move the block out of its parent, placing it right after the parent
    Outdent { block_id: String },

    /// Relocate a block to another block's slot (cross-level allowed)
    Move { active_id: String, over_id: String },

    /// Insert a fully-formed block immediately after the reference block
    InsertSibling {
        reference_id: String,
        block: Block,
    },

    /// Shallow-merge a patch into the target block
    Update {
        block_id: String,
        patch: BlockPatch,
    },

    /// Remove a block and its subtree
    Remove { block_id: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    #[error("Block has no preceding sibling: {0}")]
    NoPrecedingSibling(String),

    #[error("Block is already at the root level: {0}")]
    AtRootLevel(String),

    #[error("Cannot move a block onto itself")]
    SelfMove,

    #[error("Would create cycle")]
    CycleDetected,
}

impl Mutation {
    /// Apply the mutation to a tree snapshot, returning the new snapshot.
    ///
    /// Validates first; on any error the caller's snapshot is still the
    /// current one. Never partially applies.
    pub fn apply(&self, blocks: &BlockTree) -> Result<BlockTree, MutationError> {
        self.validate(blocks)?;

        let next = match self {
            Mutation::Indent { block_id } => tree::indent_block(blocks, block_id).tree,
            Mutation::Outdent { block_id } => tree::outdent_block(blocks, block_id).tree,
            Mutation::Move { active_id, over_id } => {
                tree::move_block(blocks, active_id, over_id).tree
            }
            Mutation::InsertSibling {
                reference_id,
                block,
            } => tree::add_sibling(blocks, reference_id, block.clone()).tree,
            Mutation::Update { block_id, patch } => tree::update_block(blocks, block_id, patch),
            Mutation::Remove { block_id } => tree::delete_block(blocks, block_id),
        };
        Ok(next)
    }

    /// Validate without applying.
    ///
    /// `Update` and `Remove` are deliberately lenient — a missing id makes
    /// them no-ops rather than errors, so repeated removes are idempotent.
    /// `InsertSibling` checks the reference block only: uniqueness of the new
    /// block's id is the caller's obligation and is not verified here.
    pub fn validate(&self, blocks: &BlockTree) -> Result<(), MutationError> {
        match self {
            Mutation::Indent { block_id } => {
                let found = find_block_path(blocks, block_id)
                    .ok_or_else(|| MutationError::BlockNotFound(block_id.clone()))?;
                if found.index == 0 {
                    return Err(MutationError::NoPrecedingSibling(block_id.clone()));
                }
                Ok(())
            }

            Mutation::Outdent { block_id } => {
                let found = find_block_path(blocks, block_id)
                    .ok_or_else(|| MutationError::BlockNotFound(block_id.clone()))?;
                if found.parent.is_none() {
                    return Err(MutationError::AtRootLevel(block_id.clone()));
                }
                Ok(())
            }

            Mutation::Move { active_id, over_id } => {
                let source = find_block_path(blocks, active_id)
                    .ok_or_else(|| MutationError::BlockNotFound(active_id.clone()))?;
                find_block_path(blocks, over_id)
                    .ok_or_else(|| MutationError::BlockNotFound(over_id.clone()))?;

                if active_id == over_id {
                    return Err(MutationError::SelfMove);
                }
                if contains_block(slice::from_ref(&source.node), over_id) {
                    return Err(MutationError::CycleDetected);
                }
                Ok(())
            }

            Mutation::InsertSibling { reference_id, .. } => {
                find_block_path(blocks, reference_id)
                    .ok_or_else(|| MutationError::BlockNotFound(reference_id.clone()))?;
                Ok(())
            }

            Mutation::Update { .. } | Mutation::Remove { .. } => Ok(()),
        }
    }

    /// Debug name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Indent { .. } => "indent",
            Mutation::Outdent { .. } => "outdent",
            Mutation::Move { .. } => "move",
            Mutation::InsertSibling { .. } => "insert_sibling",
            Mutation::Update { .. } => "update",
            Mutation::Remove { .. } => "remove",
        }
    }
}
