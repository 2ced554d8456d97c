use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GraphConfig {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl GraphConfig {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() || self.edges.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GraphNode {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub sublabel: Option<String>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default, rename = "type")]
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    End,
    #[default]
    #[serde(other)]
    Agent,
}

/// Edges arrive either as `["from", "to"]` pairs or `{"from", "to"}` objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GraphEdge {
    Pair(String, String),
    Link { from: String, to: String },
}

impl GraphEdge {
    pub fn from(&self) -> &str {
        match self {
            GraphEdge::Pair(from, _) => from,
            GraphEdge::Link { from, .. } => from,
        }
    }

    pub fn to(&self) -> &str {
        match self {
            GraphEdge::Pair(_, to) => to,
            GraphEdge::Link { to, .. } => to,
        }
    }
}
