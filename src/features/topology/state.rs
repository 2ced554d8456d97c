use serde_json::Value;

use crate::core::models::{GraphConfig, GraphEdge, GraphNode, NodeKind};

fn node(id: &str, label: &str, sublabel: &str, x: f64, y: f64, kind: NodeKind) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        label: Some(label.to_string()),
        sublabel: Some(sublabel.to_string()),
        x: Some(x),
        y: Some(y),
        kind,
    }
}

fn edge(from: &str, to: &str) -> GraphEdge {
    GraphEdge::Pair(from.to_string(), to.to_string())
}

/// User Input → Router → {Coder, Reviewer} → Summary.
pub fn default_topology() -> GraphConfig {
    GraphConfig {
        nodes: vec![
            node("start", "User Input", "Entry Point", 400.0, 40.0, NodeKind::Start),
            node("router", "Router Agent", "Orchestrator", 400.0, 150.0, NodeKind::Agent),
            node("coder", "Coder Agent", "Code Gen", 220.0, 280.0, NodeKind::Agent),
            node("reviewer", "Reviewer Agent", "Code Review", 580.0, 280.0, NodeKind::Agent),
            node("summary", "Summary Agent", "Synthesis", 400.0, 400.0, NodeKind::End),
        ],
        edges: vec![
            edge("start", "router"),
            edge("router", "coder"),
            edge("router", "reviewer"),
            edge("coder", "summary"),
            edge("reviewer", "summary"),
        ],
    }
}

/// Reads a stored graph, which may be an object, a JSON-encoded string, or
/// nothing. Unreadable documents count as absent.
pub fn graph_from_value(value: Value) -> Option<GraphConfig> {
    let value = match value {
        Value::String(raw) => serde_json::from_str::<Value>(&raw).ok()?,
        other => other,
    };
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}

/// Falls back to the default topology when the graph is missing or has no
/// nodes or no edges.
pub fn resolve_graph(graph: Option<GraphConfig>) -> GraphConfig {
    match graph {
        Some(graph) if !graph.is_empty() => graph,
        _ => default_topology(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn labels(graph: &GraphConfig) -> Vec<String> {
        graph.nodes.iter().filter_map(|n| n.label.clone()).collect()
    }

    #[test]
    fn empty_graphs_resolve_to_default() {
        let no_edges = GraphConfig {
            nodes: vec![GraphNode { id: "a".into(), ..Default::default() }],
            edges: vec![],
        };
        for graph in [None, Some(GraphConfig::default()), Some(no_edges)] {
            let resolved = resolve_graph(graph);
            assert_eq!(resolved.nodes.len(), 5);
            assert_eq!(resolved.edges.len(), 5);
            assert_eq!(
                labels(&resolved),
                ["User Input", "Router Agent", "Coder Agent", "Reviewer Agent", "Summary Agent"]
            );
        }
    }

    #[test]
    fn stored_graph_is_kept() {
        let graph = graph_from_value(json!({
            "nodes": [{ "id": "a", "label": "Solo", "x": 100, "y": 40, "type": "start" },
                      { "id": "b", "label": "Critic", "x": 100, "y": 160 }],
            "edges": [["a", "b"]]
        }));
        let resolved = resolve_graph(graph);
        assert_eq!(labels(&resolved), ["Solo", "Critic"]);
    }

    #[test]
    fn string_encoded_graph_is_parsed() {
        let raw = r#"{"nodes":[{"id":"a"},{"id":"b"}],"edges":[{"from":"a","to":"b"}]}"#;
        let graph = graph_from_value(Value::String(raw.into())).unwrap();
        assert_eq!(graph.edges[0].to(), "b");
    }

    #[test]
    fn unreadable_graphs_are_absent() {
        assert_eq!(graph_from_value(Value::Null), None);
        assert_eq!(graph_from_value(Value::String("{broken".into())), None);
        assert_eq!(graph_from_value(json!([1, 2])), None);
        assert_eq!(graph_from_value(json!({ "nodes": "nope" })), None);
    }
}
