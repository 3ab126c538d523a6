use crate::graph::model::GraphRequest;
use crate::graph::node::NetworkNode;

/// The three-node graph used when no payload file is given.
pub fn weighted_triangle() -> GraphRequest {
    GraphRequest::new(vec![
        NetworkNode::new("A").connect("B", 2).connect("C", 3),
        NetworkNode::new("B").connect("C", 5),
        NetworkNode::new("C"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_matches_documented_graph() {
        let value = serde_json::to_value(weighted_triangle()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "networkNodes": [
                    { "name": "A", "parameters": [2, 3], "connectedNodes": ["B", "C"] },
                    { "name": "B", "parameters": [5], "connectedNodes": ["C"] },
                    { "name": "C", "parameters": [], "connectedNodes": [] }
                ]
            })
        );
    }

    #[test]
    fn fixture_nodes_are_consistent() {
        assert!(weighted_triangle()
            .network_nodes
            .iter()
            .all(NetworkNode::has_matching_lengths));
    }
}
