use dl_neighbors::{
    graph::{EdgeKind, GraphEdge, NodeKind},
    upper_neighbors, Concept, NeighborGraph,
};

fn build(text: &str) -> NeighborGraph {
    let concept: Concept = text.parse().expect("valid concept");
    let neighbors = upper_neighbors(&concept);
    NeighborGraph::build(&concept, &neighbors)
}

#[test]
fn original_sits_below_its_neighbors() {
    let graph = build("A ⊓ ∃r.(B ⊓ C)");

    let original = graph.original().expect("original node");
    assert_eq!(original.id, "A ⊓ ∃r.(B ⊓ C)");
    assert_eq!(original.kind, NodeKind::Original);

    let ids: Vec<&str> = graph.neighbors().map(|node| node.id.as_str()).collect();
    assert_eq!(ids, vec!["∃r.(B ⊓ C)", "A ⊓ ∃r.(C) ⊓ ∃r.(B)"]);
    assert!(graph
        .neighbors()
        .all(|node| node.position.y > original.position.y));

    for node in graph.neighbors() {
        let edge = GraphEdge {
            from: original.id.clone(),
            to: node.id.clone(),
            kind: EdgeKind::Generalizes,
        };
        assert!(graph.edges.contains(&edge), "missing edge to {}", node.id);
    }
}

#[test]
fn concept_without_neighbors_is_a_single_node() {
    let graph = build("∃r.A");
    assert_eq!(graph.nodes.len(), 1);
    assert!(graph.edges.is_empty());
}

#[test]
fn graph_serializes_for_consumers() {
    let graph = build("A ⊓ B");
    insta::assert_snapshot!(
        serde_json::to_string(&graph).expect("serialize graph"),
        @r#"{"nodes":[{"id":"A ⊓ B","kind":"original","position":{"x":0.0,"y":0.0}},{"id":"B","kind":"upper_neighbor","position":{"x":-0.5,"y":1.0}},{"id":"A","kind":"upper_neighbor","position":{"x":0.5,"y":1.0}}],"edges":[{"from":"A ⊓ B","to":"B","kind":"generalizes"},{"from":"A ⊓ B","to":"A","kind":"generalizes"}]}"#
    );
}
