//! Comprehensive mutation tests over the semantic `Mutation` layer.

use notedown_editor::{Document, Mutation, MutationError};
use notedown_model::{Block, BlockKind, BlockPatch, Patch};
use std::sync::Arc;

fn doc(json: &str) -> Document {
    Document::from_json(json).unwrap()
}

fn ids(blocks: &[Arc<Block>]) -> Vec<&str> {
    blocks.iter().map(|b| b.id.as_str()).collect()
}

#[test]
fn update_merges_patch_into_target() {
    let mut doc = doc(r#"[{"id":"t","type":"todo","content":"Buy milk","completed":false}]"#);

    doc.apply(&Mutation::Update {
        block_id: "t".to_string(),
        patch: BlockPatch {
            completed: Patch::Set(true),
            ..BlockPatch::default()
        },
    })
    .unwrap();

    let block = &doc.blocks()[0];
    assert_eq!(block.completed, Some(true));
    // Fields the patch does not name are untouched.
    assert_eq!(block.content, "Buy milk");
    assert_eq!(block.kind, BlockKind::Todo);
}

#[test]
fn indent_nests_under_previous_sibling() {
    let mut doc = doc(
        r#"[{"id":"root","type":"text","content":"","children":[
            {"id":"c1","type":"text","content":""},
            {"id":"c2","type":"text","content":""}
        ]}]"#,
    );

    doc.apply(&Mutation::Indent {
        block_id: "c2".to_string(),
    })
    .unwrap();

    let root = &doc.blocks()[0];
    assert_eq!(ids(&root.children), vec!["c1"]);
    assert_eq!(ids(&root.children[0].children), vec!["c2"]);
}

#[test]
fn indent_of_first_child_fails_and_leaves_tree_alone() {
    let mut doc = doc(
        r#"[{"id":"root","type":"text","content":"","children":[
            {"id":"c1","type":"text","content":""}
        ]}]"#,
    );
    let before = doc.blocks().clone();

    let err = doc
        .apply(&Mutation::Indent {
            block_id: "c1".to_string(),
        })
        .unwrap_err();

    assert_eq!(err, MutationError::NoPrecedingSibling("c1".to_string()));
    assert!(Arc::ptr_eq(&doc.blocks()[0], &before[0]));
}

#[test]
fn outdent_of_root_block_fails() {
    let mut doc = doc(r#"[{"id":"a","type":"text","content":""}]"#);
    let err = doc
        .apply(&Mutation::Outdent {
            block_id: "a".to_string(),
        })
        .unwrap_err();
    assert_eq!(err, MutationError::AtRootLevel("a".to_string()));
}

#[test]
fn move_into_own_descendant_is_rejected_unchanged() {
    let mut doc = doc(
        r#"[{"id":"a","type":"text","content":"","children":[
            {"id":"a1","type":"text","content":"","children":[
                {"id":"a1x","type":"text","content":""}
            ]}
        ]}]"#,
    );
    let before = doc.blocks().clone();

    let err = doc
        .apply(&Mutation::Move {
            active_id: "a".to_string(),
            over_id: "a1x".to_string(),
        })
        .unwrap_err();

    assert_eq!(err, MutationError::CycleDetected);
    assert!(Arc::ptr_eq(&doc.blocks()[0], &before[0]));
    assert_eq!(doc.version(), 0);
}

#[test]
fn move_onto_self_is_rejected() {
    let mut doc = doc(r#"[{"id":"x","type":"text","content":""}]"#);
    let err = doc
        .apply(&Mutation::Move {
            active_id: "x".to_string(),
            over_id: "x".to_string(),
        })
        .unwrap_err();
    assert_eq!(err, MutationError::SelfMove);
}

#[test]
fn move_down_within_one_list_compensates_for_removal() {
    let mut doc = doc(
        r#"[{"id":"1","type":"text","content":""},
            {"id":"2","type":"text","content":""},
            {"id":"3","type":"text","content":""}]"#,
    );

    doc.apply(&Mutation::Move {
        active_id: "1".to_string(),
        over_id: "3".to_string(),
    })
    .unwrap();

    // Target index 2 minus the freed slot gives 1, not the "natural" tail.
    assert_eq!(ids(doc.blocks()), vec!["2", "1", "3"]);
}

#[test]
fn remove_drops_block_and_descendants() {
    let mut doc = doc(
        r#"[{"id":"p","type":"text","content":"","children":[
            {"id":"c","type":"text","content":""}
        ]},
        {"id":"q","type":"text","content":""}]"#,
    );

    doc.apply(&Mutation::Remove {
        block_id: "p".to_string(),
    })
    .unwrap();

    assert_eq!(ids(doc.blocks()), vec!["q"]);
    assert!(doc.find("c").is_none());
    assert!(doc.chain("c").is_none());
}

#[test]
fn insert_sibling_lands_right_after_reference() {
    let mut doc = doc(
        r#"[{"id":"a","type":"text","content":""},
            {"id":"b","type":"text","content":""}]"#,
    );

    doc.apply(&Mutation::InsertSibling {
        reference_id: "a".to_string(),
        block: Block::new("new", BlockKind::Bullet, "item"),
    })
    .unwrap();

    assert_eq!(ids(doc.blocks()), vec!["a", "new", "b"]);
}

#[test]
fn insert_sibling_with_missing_reference_fails() {
    let mut doc = doc(r#"[{"id":"a","type":"text","content":""}]"#);
    let err = doc
        .apply(&Mutation::InsertSibling {
            reference_id: "ghost".to_string(),
            block: Block::new("new", BlockKind::Text, ""),
        })
        .unwrap_err();
    assert_eq!(err, MutationError::BlockNotFound("ghost".to_string()));
}

#[test]
fn missing_ids_surface_as_block_not_found() {
    let mut doc = doc(r#"[{"id":"a","type":"text","content":""}]"#);
    for mutation in [
        Mutation::Indent {
            block_id: "ghost".to_string(),
        },
        Mutation::Outdent {
            block_id: "ghost".to_string(),
        },
        Mutation::Move {
            active_id: "ghost".to_string(),
            over_id: "a".to_string(),
        },
    ] {
        let err = doc.apply(&mutation).unwrap_err();
        assert_eq!(err, MutationError::BlockNotFound("ghost".to_string()));
    }
}
