//! Copy-on-write structural operations on block trees.
//!
//! Every function takes a tree snapshot and returns a fresh one. The returned
//! tree shares every untouched subtree with the input by `Arc` identity; only
//! the spine from the forest root down to the edited sibling list is newly
//! allocated. On any rejection the returned tree holds the input's blocks
//! unchanged, identity included.
//!
//! Paths are re-derived on the working tree before every edit — indices shift
//! after each structural change, so a path computed earlier is never reused
//! across a mutation (see `outdent_block` and `move_block`, which each locate
//! a second block on the already-mutated tree).

use notedown_model::{contains_block, find_block_path, Block, BlockPatch, BlockTree};
use std::slice;
use std::sync::Arc;

/// Outcome of a structural edit: the resulting tree plus a success flag.
///
/// On failure the tree holds the original blocks (same `Arc`s) and the caller
/// can keep using its previous snapshot interchangeably.
#[derive(Debug, Clone)]
pub struct TreeUpdate {
    pub tree: BlockTree,
    pub success: bool,
}

impl TreeUpdate {
    fn rejected(tree: &[Arc<Block>]) -> Self {
        Self {
            tree: tree.to_vec(),
            success: false,
        }
    }
}

/// Rebuild the spine down to the sibling list owned by the block at `path`
/// (empty path addresses the forest root) and apply `edit` to a fresh copy
/// of that list. Blocks on the spine are shallow-cloned into new `Arc`s;
/// everything off the spine is shared with the input.
fn edit_level(
    tree: &[Arc<Block>],
    path: &[usize],
    edit: impl FnOnce(&mut Vec<Arc<Block>>),
) -> BlockTree {
    let mut level: BlockTree = tree.to_vec();
    match path.split_first() {
        None => edit(&mut level),
        Some((&index, rest)) => {
            let mut owner = (*level[index]).clone();
            let children = edit_level(&owner.children, rest, edit);
            owner.children = children;
            level[index] = Arc::new(owner);
        }
    }
    level
}

/// Merge a partial update into the block with the given id.
///
/// The target is replaced by a new value with the patch shallow-merged in
/// (children kept by reference); every block on the path to it is newly
/// allocated; every sibling off that path keeps its identity. A missing id
/// is a silent no-op — the input blocks come back unchanged.
pub fn update_block(tree: &[Arc<Block>], id: &str, patch: &BlockPatch) -> BlockTree {
    let Some(found) = find_block_path(tree, id) else {
        return tree.to_vec();
    };
    let parent_path = &found.path[..found.path.len() - 1];
    let index = found.index;
    edit_level(tree, parent_path, |level| {
        level[index] = Arc::new(found.node.with_patch(patch));
    })
}

/// Make the block the last child of its immediately preceding sibling.
///
/// Fails (no-op) when the id is missing or the block is first in its sibling
/// list — there is nothing to indent under.
pub fn indent_block(tree: &[Arc<Block>], id: &str) -> TreeUpdate {
    let Some(found) = find_block_path(tree, id) else {
        return TreeUpdate::rejected(tree);
    };
    if found.index == 0 {
        return TreeUpdate::rejected(tree);
    }

    let parent_path = &found.path[..found.path.len() - 1];
    let index = found.index;
    let tree = edit_level(tree, parent_path, |level| {
        let node = level.remove(index);
        let mut new_parent = (*level[index - 1]).clone();
        new_parent.children.push(node);
        level[index - 1] = Arc::new(new_parent);
    });
    TreeUpdate {
        tree,
        success: true,
    }
}

/// Move the block out of its parent's child list, placing it immediately
/// after the parent at the parent's own level.
///
/// Fails (no-op) when the id is missing or the block already sits at the
/// forest root. The parent's position is looked up again on the tree that
/// already had the block removed, since the removal shifts indices.
pub fn outdent_block(tree: &[Arc<Block>], id: &str) -> TreeUpdate {
    let Some(found) = find_block_path(tree, id) else {
        return TreeUpdate::rejected(tree);
    };
    let Some(parent) = &found.parent else {
        return TreeUpdate::rejected(tree);
    };

    let parent_path = &found.path[..found.path.len() - 1];
    let index = found.index;
    let node = Arc::clone(&found.node);
    let removed = edit_level(tree, parent_path, |level| {
        level.remove(index);
    });

    let Some(parent_loc) = find_block_path(&removed, &parent.id) else {
        // Unreachable with unique ids: the parent survives its child's removal.
        return TreeUpdate::rejected(tree);
    };
    let grandparent_path = &parent_loc.path[..parent_loc.path.len() - 1];
    let insert_at = parent_loc.index + 1;
    let tree = edit_level(&removed, grandparent_path, |level| {
        level.insert(insert_at, node);
    });
    TreeUpdate {
        tree,
        success: true,
    }
}

/// Remove the block (and its whole subtree) from wherever it occurs.
///
/// Idempotent: a missing id returns the tree unchanged, with no distinct
/// signal. Callers that need to tell the cases apart check existence first
/// via `find_block_path`.
pub fn delete_block(tree: &[Arc<Block>], id: &str) -> BlockTree {
    let Some(found) = find_block_path(tree, id) else {
        return tree.to_vec();
    };
    let parent_path = &found.path[..found.path.len() - 1];
    let index = found.index;
    edit_level(tree, parent_path, |level| {
        level.remove(index);
    })
}

/// Insert a caller-built block immediately after the reference block, at the
/// same level.
///
/// Fails (no-op) when the reference id is missing. The new block's id must be
/// fresh and globally unique — that is the caller's obligation and is not
/// checked here; a duplicate breaks lookup for both blocks.
pub fn add_sibling(tree: &[Arc<Block>], reference_id: &str, block: Block) -> TreeUpdate {
    let Some(found) = find_block_path(tree, reference_id) else {
        return TreeUpdate::rejected(tree);
    };
    let parent_path = &found.path[..found.path.len() - 1];
    let insert_at = found.index + 1;
    let tree = edit_level(tree, parent_path, |level| {
        level.insert(insert_at, Arc::new(block));
    });
    TreeUpdate {
        tree,
        success: true,
    }
}

/// Relocate the block `active_id` to the slot of `over_id`, possibly across
/// nesting levels.
///
/// Rejections (no-op, failure flag): either id missing, a self-move, or
/// `over_id` lying inside `active_id`'s own subtree — re-parenting a block
/// under its own descendant would create a cycle.
///
/// Placement: the moved block takes the target's slot and the target shifts
/// down by one. When source and target share a sibling list and the target's
/// original index is greater than the source's, the index is decremented by
/// one to compensate for the slot freed by the removal. So at the root level
/// `[1, 2, 3]`, moving `1` over `3` yields `[2, 1, 3]`.
pub fn move_block(tree: &[Arc<Block>], active_id: &str, over_id: &str) -> TreeUpdate {
    let Some(source) = find_block_path(tree, active_id) else {
        return TreeUpdate::rejected(tree);
    };
    let Some(target) = find_block_path(tree, over_id) else {
        return TreeUpdate::rejected(tree);
    };

    if source.node.id == target.node.id {
        return TreeUpdate::rejected(tree);
    }
    // Cycle guard: the target slot must not live inside the moving subtree.
    if contains_block(slice::from_ref(&source.node), over_id) {
        return TreeUpdate::rejected(tree);
    }

    let same_list = match (&source.parent, &target.parent) {
        (None, None) => true,
        (Some(a), Some(b)) => a.id == b.id,
        _ => false,
    };
    let insert_at = if same_list && target.index > source.index {
        target.index - 1
    } else {
        target.index
    };

    let node = Arc::clone(&source.node);
    let source_parent_path = &source.path[..source.path.len() - 1];
    let removed = edit_level(tree, source_parent_path, |level| {
        level.remove(source.index);
    });

    let tree = match &target.parent {
        None => edit_level(&removed, &[], |level| level.insert(insert_at, node)),
        Some(parent) => {
            let Some(parent_loc) = find_block_path(&removed, &parent.id) else {
                // Unreachable: the cycle guard keeps the target's parent
                // outside the removed subtree.
                return TreeUpdate::rejected(tree);
            };
            edit_level(&removed, &parent_loc.path, |level| {
                level.insert(insert_at, node)
            })
        }
    };
    TreeUpdate {
        tree,
        success: true,
    }
}
