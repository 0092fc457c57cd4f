//! Integration tests for flowdoc
//!
//! End-to-end tests that load, edit, validate and store documents.
//!
mod common;
use common::*;
use flowdoc::prelude::*;
use serde_json::json;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_store_then_load_rebuilds_graph() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("flow.json"));

        let graph = deserialize(condition_document()).expect("Failed to load scenario");
        store
            .save(&serialize(&graph.nodes, graph.node_counter))
            .expect("Failed to save");

        let document = store.load().expect("Failed to load").expect("Document exists");
        let reloaded = load_document(&document);
        assert_eq!(reloaded, graph);
    }

    #[test]
    fn test_editor_nodes_to_document_and_back() {
        let visual: Vec<VisualNode> = serde_json::from_value(json!([
            {
                "id": "1", "type": "textUpdater",
                "position": { "x": 10, "y": 20 }, "width": 240, "height": 210,
                "data": { "type": "START", "nexts": ["2"] }
            },
            {
                "id": "2", "type": "textUpdater",
                "position": { "x": 300, "y": 20 },
                "data": { "type": "CONDITION", "name": "ok?", "true_next": "1", "false_next": "" }
            }
        ]))
        .expect("Failed to parse editor nodes");

        let document = serialize_visual(&visual, 3);
        let (nodes, edges) = load_document(&document).into_visual();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].width, Some(240.0));
        assert_eq!(nodes[1].width, Some(200.0));
        assert_eq!(
            edges,
            vec![
                VisualEdge {
                    id: "1-a-2".to_string(),
                    source: "1".to_string(),
                    target: "2".to_string(),
                    source_handle: "a".to_string(),
                },
                VisualEdge {
                    id: "2-true-1".to_string(),
                    source: "2".to_string(),
                    target: "1".to_string(),
                    source_handle: "true".to_string(),
                },
            ]
        );
        assert_eq!(EdgeRecord::from(&edges[1]).handle, Handle::True);
    }

    #[test]
    fn test_validation_reports_but_does_not_block_loading() {
        let graph = deserialize(json!({
            "nodes": [
                { "uniq_id": "1", "type": "CONDITION", "name": "c", "nexts": ["2"] },
                { "uniq_id": "2", "type": "STEP", "true_next": "1" },
                { "uniq_id": "2", "type": "TOOL" }
            ]
        }))
        .expect("Convention violations must not fail the load");

        let violations = validate(&graph.nodes);
        assert_eq!(violations.len(), 4);
        assert!(violations.contains(&ConventionViolation::DuplicateId { id: "2".into() }));
        assert_eq!(graph.edges.len(), 2);
    }

    #[test]
    fn test_pipeline_is_clean() {
        assert!(validate(&create_pipeline()).is_empty());
    }
}
