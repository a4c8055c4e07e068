//! Integration tests for Kaisou
//!
//! End-to-end tests that verify the complete functionality works together.
//!
mod common;
use common::*;
use kaisou::prelude::*;
use std::collections::HashSet;

#[test]
fn test_import_resolve_export_round_trip() {
    // The dialog collaborator hands over JSON text...
    let document = FlowExport::from_json(SAMPLE_EXPORT_JSON).expect("Failed to parse sample");
    let mut graph = from_interchange(&document).expect("Failed to import sample");

    // ...the host recalculates levels after the structural mutation...
    let report = resolve_with_report(&graph.nodes, &graph.edges);
    graph.apply_levels(&report.levels);
    assert_eq!(report.dangling_edges, 0);
    assert_eq!(report.cycles_broken, 0);

    // ...and a later export must reproduce the same topology.
    let re_exported = to_interchange(&graph);
    let rebuilt = from_interchange(&re_exported).expect("Failed to re-import");

    let ids = |g: &FlowGraph| -> HashSet<String> { g.nodes.iter().map(|n| n.id.clone()).collect() };
    assert_eq!(ids(&graph), ids(&rebuilt));
    assert_eq!(graph.edges.len(), rebuilt.edges.len());

    for node in &graph.nodes {
        let twin = rebuilt.node(&node.id).expect("node lost in round trip");
        assert_eq!(node.data.label, twin.data.label);
        assert_eq!(node.data.category, twin.data.category);
        assert_eq!(node.data.code, twin.data.code);
        assert_eq!(node.data.is_active, twin.data.is_active);
        assert_eq!(node.data.description, twin.data.description);
    }
}

#[test]
fn test_failed_import_leaves_caller_state_untouched() {
    let mut graph = chain_graph();
    let levels = compute_levels(&graph.nodes, &graph.edges);
    graph.apply_levels(&levels);
    let before = graph.clone();

    // A rejected document produces no graph at all, so the host keeps its
    // current state.
    let result = FlowExport::from_json(r#"{ "structures": 42 }"#);
    assert!(result.is_err());
    assert_eq!(graph, before);
}

#[test]
fn test_into_graph_conversion_for_interchange_documents() {
    let document = FlowExport::from_json(SAMPLE_EXPORT_JSON).expect("Failed to parse sample");
    let graph = document.into_graph().expect("Conversion failed");

    assert_eq!(graph.nodes.len(), 4);
    assert_eq!(graph.edges.len(), 3);
}

#[test]
fn test_editor_save_format_round_trip() {
    let mut graph = diamond_graph();
    let levels = compute_levels(&graph.nodes, &graph.edges);
    graph.apply_levels(&levels);

    let saved = graph.to_json_pretty().expect("Failed to serialize");
    let loaded = FlowGraph::from_json(&saved).expect("Failed to reload");

    assert_eq!(graph, loaded);
}

#[test]
fn test_node_path_walks_to_root() {
    let graph = chain_graph();
    assert_eq!(graph.node_path("c"), "Root / Mid / Leaf");
    assert_eq!(graph.node_path("a"), "Root");
    assert_eq!(graph.node_path("missing"), "");
}

#[test]
fn test_node_path_terminates_on_cyclic_parents() {
    let graph = two_cycle_graph();
    let path = graph.node_path("a");
    // Bounded depth: the walk must stop even though the parent chain loops.
    assert!(!path.is_empty());
    assert!(path.split(" / ").count() <= 20);
}

#[test]
fn test_snapshot_round_trip_in_memory() {
    let graph = diamond_graph();
    let snapshot = FlowSnapshot::capture(graph);

    assert_eq!(snapshot.levels["d"], 2);
    assert_eq!(snapshot.graph.node("d").unwrap().data.level, 2);

    let restored = {
        let file = std::env::temp_dir().join("kaisou_snapshot_test.bin");
        let path = file.to_string_lossy().to_string();
        snapshot.save(&path).expect("Failed to save snapshot");
        let restored = FlowSnapshot::from_file(&path).expect("Failed to load snapshot");
        let _ = std::fs::remove_file(&path);
        restored
    };

    assert_eq!(restored.graph, snapshot.graph);
    assert_eq!(restored.levels, snapshot.levels);
}

#[test]
fn test_snapshot_rejects_garbage_bytes() {
    let result = FlowSnapshot::from_bytes(&[0xde, 0xad, 0xbe, 0xef]);
    assert!(matches!(result, Err(SnapshotError::Serialization(_))));
}

#[test]
fn test_generated_flow_document_resolves() {
    // A denser document exercising multi-parent fan-in under one pass.
    let mut structures: Vec<ExportedStructure> = (0..30)
        .map(|i| ExportedStructure {
            id: format!("n{}", i),
            name: format!("Entity {}", i),
            ..Default::default()
        })
        .collect();
    for child in 1..30usize {
        let parent = child / 2;
        structures[parent]
            .connections
            .push(Connection::new(format!("n{}", child)));
    }
    let document = FlowExport { structures };

    let graph = from_interchange(&document).expect("Failed to import generated flow");
    let levels = compute_levels(&graph.nodes, &graph.edges);

    assert_eq!(levels.len(), 30);
    assert_eq!(levels["n0"], 0);
    // Binary-heap wiring: n29 sits at the end of the chain 0-1-3-7-14-29.
    assert_eq!(levels["n29"], 5);
}

#[test]
fn test_prelude_import_completeness() {
    // Verify that the prelude exports work correctly
    let _graph: Option<FlowGraph> = None;
    let _node: Option<FlowNode> = None;
    let _edge: Option<FlowEdge> = None;
    let _content: Option<NodeContent> = None;
    let _style: Option<EdgeStyle> = None;
    let _document: Option<FlowExport> = None;
    let _structure: Option<ExportedStructure> = None;
    let _report: Option<ResolutionReport> = None;
    let _snapshot: Option<FlowSnapshot> = None;
    let _levels: AHashMap<String, u32> = AHashMap::new();

    // Test Result alias
    let _result: Result<String> = Ok("test".to_string());
}
