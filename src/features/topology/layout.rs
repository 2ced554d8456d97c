// SVG geometry for the topology diagram. Node coordinates are the top-center
// of each box.
use crate::core::models::{GraphConfig, GraphNode, NodeKind};

pub const VIEW_BOX: &str = "0 0 800 480";
pub const NODE_WIDTH: f64 = 140.0;
pub const NODE_HEIGHT: f64 = 52.0;
pub const NODE_RADIUS: f64 = 8.0;
pub const DOT_RADIUS: f64 = 3.0;

// Column used for nodes stored without coordinates
const FALLBACK_X: f64 = 400.0;
const FALLBACK_TOP: f64 = 40.0;
const FALLBACK_STEP: f64 = 110.0;

#[derive(Debug, Clone, PartialEq)]
pub struct NodeBox {
    pub id: String,
    pub label: String,
    pub sublabel: String,
    pub x: f64,
    pub y: f64,
    pub accent: bool,
}

impl NodeBox {
    pub fn left(&self) -> f64 {
        self.x - NODE_WIDTH / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeShape {
    pub key: String,
    pub path: String,
    pub dot: (f64, f64),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Diagram {
    pub nodes: Vec<NodeBox>,
    pub edges: Vec<EdgeShape>,
}

fn node_box(node: &GraphNode, index: usize) -> NodeBox {
    NodeBox {
        id: node.id.clone(),
        label: node.label.clone().unwrap_or_else(|| node.id.clone()),
        sublabel: node.sublabel.clone().unwrap_or_default(),
        x: node.x.unwrap_or(FALLBACK_X),
        y: node.y.unwrap_or(FALLBACK_TOP + FALLBACK_STEP * index as f64),
        accent: matches!(node.kind, NodeKind::Start | NodeKind::End),
    }
}

/// Cubic Bezier from the bottom-center of `from` to the top-center of `to`.
/// Both control points sit at the midpoint between the two box centers.
pub fn edge_path(from: (f64, f64), to: (f64, f64)) -> String {
    let (fx, fy) = from;
    let (tx, ty) = to;
    let half = NODE_HEIGHT / 2.0;
    let mid = ((fy + half) + (ty + half)) / 2.0;
    format!("M {} {} C {} {}, {} {}, {} {}", fx, fy + NODE_HEIGHT, fx, mid, tx, mid, tx, ty)
}

/// Lays out every node and every edge whose endpoints both exist.
pub fn layout(graph: &GraphConfig) -> Diagram {
    let nodes: Vec<NodeBox> = graph.nodes.iter().enumerate().map(|(i, n)| node_box(n, i)).collect();
    let find = |id: &str| nodes.iter().find(|n| n.id == id);

    let edges = graph
        .edges
        .iter()
        .filter_map(|edge| {
            let from = find(edge.from())?;
            let to = find(edge.to())?;
            Some(EdgeShape {
                key: format!("{}-{}", from.id, to.id),
                path: edge_path((from.x, from.y), (to.x, to.y)),
                dot: (to.x, to.y),
            })
        })
        .collect();

    Diagram { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::GraphEdge;
    use crate::features::topology::state::default_topology;

    #[test]
    fn edge_runs_bottom_to_top_through_midpoint() {
        assert_eq!(edge_path((400.0, 150.0), (220.0, 280.0)), "M 400 202 C 400 241, 220 241, 220 280");
    }

    #[test]
    fn default_diagram_has_five_edges_and_accented_ends() {
        let diagram = layout(&default_topology());
        assert_eq!(diagram.nodes.len(), 5);
        assert_eq!(diagram.edges.len(), 5);
        let accented: Vec<_> = diagram.nodes.iter().filter(|n| n.accent).map(|n| n.id.as_str()).collect();
        assert_eq!(accented, ["start", "summary"]);
        assert_eq!(diagram.nodes[2].left(), 150.0);
        assert_eq!(diagram.edges[0].dot, (400.0, 150.0));
    }

    #[test]
    fn dangling_edges_are_skipped() {
        let mut graph = default_topology();
        graph.edges.push(GraphEdge::Pair("router".into(), "ghost".into()));
        graph.edges.push(GraphEdge::Link { from: "nobody".into(), to: "start".into() });
        assert_eq!(layout(&graph).edges.len(), 5);
    }

    #[test]
    fn nodes_without_coordinates_stack_vertically() {
        let graph = GraphConfig {
            nodes: vec![
                GraphNode { id: "a".into(), ..Default::default() },
                GraphNode { id: "b".into(), ..Default::default() },
            ],
            edges: vec![GraphEdge::Pair("a".into(), "b".into())],
        };
        let diagram = layout(&graph);
        assert_eq!((diagram.nodes[1].x, diagram.nodes[1].y), (400.0, 150.0));
        assert_eq!(diagram.nodes[0].label, "a");
    }
}
