//! Node-link artifact: the JSON shape downstream visualizations consume.
//!
//! Nodes carry `id` and `degree` always; the centrality and community
//! attributes exist only for members of the largest connected component,
//! and `name` only after enrichment. Absent attributes are omitted from
//! the JSON rather than serialized as null, matching the reference
//! artifact format.

use serde::{Deserialize, Serialize};

/// One node of the artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeEntry {
    pub id: String,
    /// Incident-edge count over the whole graph.
    pub degree: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub betweenness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eigenvector: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree_cent: Option<f64>,
    /// Community label within the largest component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modularity: Option<usize>,
    /// Display name attached by enrichment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NodeEntry {
    /// A node with only the whole-graph degree attribute.
    #[must_use]
    pub const fn bare(id: String, degree: usize) -> Self {
        Self {
            id,
            degree,
            betweenness: None,
            eigenvector: None,
            degree_cent: None,
            modularity: None,
            name: None,
        }
    }
}

/// One undirected link of the artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub source: String,
    pub target: String,
    pub weight: u64,
}

/// The full artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NodeLink {
    pub nodes: Vec<NodeEntry>,
    pub links: Vec<LinkEntry>,
    /// Set when no edge survived filtering, so the artifact explicitly
    /// records that no component analysis ran.
    #[serde(default, skip_serializing_if = "is_false")]
    pub no_component: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(flag: &bool) -> bool {
    !*flag
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_attributes_are_omitted_from_json() {
        let data = NodeLink {
            nodes: vec![NodeEntry::bare("a".to_string(), 2)],
            links: Vec::new(),
            no_component: false,
        };
        let json = serde_json::to_string(&data).expect("serialize");
        assert!(!json.contains("betweenness"));
        assert!(!json.contains("name"));
        assert!(!json.contains("no_component"));
    }

    #[test]
    fn present_attributes_survive_a_round_trip() {
        let data = NodeLink {
            nodes: vec![NodeEntry {
                id: "a".to_string(),
                degree: 3,
                betweenness: Some(0.25),
                eigenvector: Some(0.5),
                degree_cent: Some(1.0),
                modularity: Some(0),
                name: Some("John Doe".to_string()),
            }],
            links: vec![LinkEntry {
                source: "a".to_string(),
                target: "b".to_string(),
                weight: 4,
            }],
            no_component: false,
        };
        let json = serde_json::to_string(&data).expect("serialize");
        let back: NodeLink = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(data, back);
    }

    #[test]
    fn empty_marker_round_trips() {
        let data = NodeLink {
            no_component: true,
            ..NodeLink::default()
        };
        let json = serde_json::to_string(&data).expect("serialize");
        assert!(json.contains("no_component"));
        let back: NodeLink = serde_json::from_str(&json).expect("deserialize");
        assert!(back.no_component);
    }
}
