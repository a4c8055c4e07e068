//! Common test utilities for building flow graphs and interchange documents.
use kaisou::prelude::*;

/// Creates a node with the given id and label at the origin.
#[allow(dead_code)]
pub fn node(id: &str, label: &str) -> FlowNode {
    FlowNode::new(id, label, Position::default())
}

/// Creates an edge with the default arrow styling.
#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> FlowEdge {
    FlowEdge::new(id, source, target)
}

/// A simple chain: a -> b -> c.
#[allow(dead_code)]
pub fn chain_graph() -> FlowGraph {
    FlowGraph::new(
        vec![node("a", "Root"), node("b", "Mid"), node("c", "Leaf")],
        vec![edge("e1", "a", "b"), edge("e2", "b", "c")],
    )
}

/// A diamond: a -> b, a -> c, b -> d, c -> d.
#[allow(dead_code)]
pub fn diamond_graph() -> FlowGraph {
    FlowGraph::new(
        vec![
            node("a", "Top"),
            node("b", "Left"),
            node("c", "Right"),
            node("d", "Bottom"),
        ],
        vec![
            edge("e1", "a", "b"),
            edge("e2", "a", "c"),
            edge("e3", "b", "d"),
            edge("e4", "c", "d"),
        ],
    )
}

/// A two-node cycle: a -> b, b -> a.
#[allow(dead_code)]
pub fn two_cycle_graph() -> FlowGraph {
    FlowGraph::new(
        vec![node("a", "First"), node("b", "Second")],
        vec![edge("e1", "a", "b"), edge("e2", "b", "a")],
    )
}

/// A canonical interchange document: root with two children, one grandchild.
#[allow(dead_code)]
pub const SAMPLE_EXPORT_JSON: &str = r#"{
    "structures": [
        {
            "id": "org",
            "name": "Organization",
            "code": "ORG",
            "category": "input",
            "isActive": true,
            "connections": [
                { "targetId": "dept-a" },
                { "targetId": "dept-b" }
            ]
        },
        {
            "id": "dept-a",
            "name": "Department A",
            "code": "DPTA",
            "category": "default",
            "isActive": true,
            "connections": [ { "targetId": "team" } ]
        },
        {
            "id": "dept-b",
            "name": "Department B",
            "code": "DPTB",
            "category": "default",
            "isActive": false,
            "description": "Dormant branch",
            "connections": []
        },
        {
            "id": "team",
            "name": "Team",
            "code": "TEAM",
            "category": "action",
            "isActive": true,
            "connections": []
        }
    ]
}"#;

/// The same topology expressed in the legacy parent-pointer shape, with the
/// historical `tempId`/`parentTempId`/`type`/`levelRank` field names.
#[allow(dead_code)]
pub const LEGACY_PARENT_JSON: &str = r#"{
    "structures": [
        { "tempId": "org", "name": "Organization", "code": "ORG", "type": "input", "levelRank": 0, "parentTempId": null },
        { "tempId": "dept-a", "name": "Department A", "code": "DPTA", "type": "default", "levelRank": 1, "parentTempId": "org" },
        { "tempId": "dept-b", "name": "Department B", "code": "DPTB", "type": "default", "levelRank": 1, "parentTempId": "org" },
        { "tempId": "team", "name": "Team", "code": "TEAM", "type": "action", "levelRank": 2, "parentTempId": "dept-a" }
    ]
}"#;
