//! Common test utilities for building workflow documents and node lists.
use flowdoc::prelude::*;
use serde_json::{Value, json};

/// The three-node branching document: `n1` checks, then goes to `n2` or `n3`.
#[allow(dead_code)]
pub fn condition_document() -> Value {
    json!({
        "node_counter": 3,
        "nodes": [
            {
                "uniq_id": "n1", "type": "CONDITION", "name": "check",
                "nexts": [], "true_next": "n2", "false_next": "n3", "ext": {}
            },
            { "uniq_id": "n2", "type": "STEP", "name": "ok", "tool": "noop", "nexts": [], "ext": {} },
            { "uniq_id": "n3", "type": "STEP", "name": "fail", "tool": "noop", "nexts": [], "ext": {} }
        ]
    })
}

/// A linear pipeline with a question and a branch.
///
/// Logic: `1 (START) -> 2 (STEP) -> 3 (INFO) -> 4 (CONDITION) -[true]-> 5, -[false]-> 2`
#[allow(dead_code)]
pub fn create_pipeline() -> Vec<NodeRecord> {
    vec![
        NodeRecord::new("1").with_nexts(["2"]),
        NodeRecord::new("2")
            .with_kind(NodeKind::Step)
            .with_name("collect")
            .with_tool("search")
            .with_nexts(["3"])
            .with_position(Position::new(260.0, 0.0)),
        NodeRecord::new("3")
            .with_kind(NodeKind::Info)
            .with_name("clarify")
            .with_info("Which sources are trusted?")
            .with_nexts(["4"])
            .with_position(Position::new(520.0, 0.0))
            .with_size(Size::new(300.0, 220.0)),
        NodeRecord::new("4")
            .with_kind(NodeKind::Condition)
            .with_name("enough data?")
            .with_true_next("5")
            .with_false_next("2")
            .with_position(Position::new(780.0, 0.0)),
        NodeRecord::new("5")
            .with_kind(NodeKind::Tool)
            .with_description("writes the report")
            .with_position(Position::new(1040.0, 0.0)),
    ]
}

/// A record with every field set to a non-default value.
#[allow(dead_code)]
pub fn create_full_record() -> NodeRecord {
    NodeRecord::new("42")
        .with_kind(NodeKind::Condition)
        .with_name("branch")
        .with_description("decides where to go")
        .with_tool("unused")
        .with_info("unused too")
        .with_nexts(["a", "b"])
        .with_true_next("t")
        .with_false_next("f")
        .with_position(Position::new(-15.5, 88.25))
        .with_size(Size::new(410.0, 230.0))
}
