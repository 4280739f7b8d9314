//! Read-only tree queries: locating a block by id and walking ancestor chains.
//!
//! Paths are sequences of sibling indices from the forest root. They are only
//! valid for the exact snapshot they were derived from — every structural
//! edit shifts indices, so callers re-derive rather than cache.

use crate::block::Block;
use std::sync::Arc;

/// Where a block sits in a tree snapshot.
#[derive(Debug, Clone)]
pub struct BlockLocation {
    /// The located block.
    pub node: Arc<Block>,
    /// Direct parent, or `None` for a root-level block.
    pub parent: Option<Arc<Block>>,
    /// Index among its siblings.
    pub index: usize,
    /// Sibling indices from the forest root down to the block.
    pub path: Vec<usize>,
}

/// Find a block by id, returning its value, parent, sibling index, and path.
///
/// Pre-order depth-first, siblings left to right. Ids are unique by
/// invariant; with duplicates the result is unspecified. O(n), no mutation.
pub fn find_block_path(tree: &[Arc<Block>], id: &str) -> Option<BlockLocation> {
    locate(tree, id, None, &mut Vec::new())
}

fn locate(
    level: &[Arc<Block>],
    id: &str,
    parent: Option<&Arc<Block>>,
    prefix: &mut Vec<usize>,
) -> Option<BlockLocation> {
    for (index, block) in level.iter().enumerate() {
        if block.id == id {
            let mut path = prefix.clone();
            path.push(index);
            return Some(BlockLocation {
                node: Arc::clone(block),
                parent: parent.map(Arc::clone),
                index,
                path,
            });
        }
        if !block.children.is_empty() {
            prefix.push(index);
            if let Some(found) = locate(&block.children, id, Some(block), prefix) {
                prefix.pop();
                return Some(found);
            }
            prefix.pop();
        }
    }
    None
}

/// Whether the forest contains a block with the given id, at any depth.
pub fn contains_block(tree: &[Arc<Block>], id: &str) -> bool {
    tree.iter()
        .any(|block| block.id == id || contains_block(&block.children, id))
}

/// Ordered chain of blocks from the forest-root ancestor down to and
/// including the target, or `None` if the id is absent.
pub fn block_chain(tree: &[Arc<Block>], id: &str) -> Option<Vec<Arc<Block>>> {
    for block in tree {
        if block.id == id {
            return Some(vec![Arc::clone(block)]);
        }
        if let Some(mut chain) = block_chain(&block.children, id) {
            chain.insert(0, Arc::clone(block));
            return Some(chain);
        }
    }
    None
}
