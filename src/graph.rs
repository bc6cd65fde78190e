use serde::{Deserialize, Serialize};

use crate::concept::Concept;

/// A concept together with its upper neighbors, laid out for display.
///
/// The original concept sits at the origin and the neighbors are spread
/// symmetrically one level above it. Drawing is left to the consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Describes a vertex of a [`NeighborGraph`]; the rendered concept is its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Original,
    UpperNeighbor,
}

/// Layout coordinates; `y` grows towards more general concepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Relationship between two nodes of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// The target is an upper neighbor of the source.
    Generalizes,
}

impl NeighborGraph {
    /// Builds the graph for `original` and the neighbors computed for it.
    ///
    /// Node identity is the rendered label, so neighbors rendering like an
    /// earlier node collapse onto it and are not laid out twice.
    #[must_use]
    pub fn build(original: &Concept, neighbors: &[Concept]) -> Self {
        let root_id = original.to_string();
        let mut labels: Vec<String> = Vec::with_capacity(neighbors.len());
        for neighbor in neighbors {
            let label = neighbor.to_string();
            if label != root_id && !labels.contains(&label) {
                labels.push(label);
            }
        }

        let mut nodes = Vec::with_capacity(labels.len() + 1);
        nodes.push(GraphNode {
            id: root_id.clone(),
            kind: NodeKind::Original,
            position: Position { x: 0.0, y: 0.0 },
        });

        #[allow(clippy::cast_precision_loss)]
        let center = (labels.len() as f64 - 1.0) / 2.0;
        let mut edges = Vec::with_capacity(labels.len());
        for (index, label) in labels.into_iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let x = index as f64 - center;
            edges.push(GraphEdge {
                from: root_id.clone(),
                to: label.clone(),
                kind: EdgeKind::Generalizes,
            });
            nodes.push(GraphNode {
                id: label,
                kind: NodeKind::UpperNeighbor,
                position: Position { x, y: 1.0 },
            });
        }

        Self { nodes, edges }
    }

    /// Returns the node of the original concept.
    #[must_use]
    pub fn original(&self) -> Option<&GraphNode> {
        self.nodes
            .iter()
            .find(|node| node.kind == NodeKind::Original)
    }

    /// Returns the upper-neighbor nodes from left to right.
    pub fn neighbors(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes
            .iter()
            .filter(|node| node.kind == NodeKind::UpperNeighbor)
    }
}
