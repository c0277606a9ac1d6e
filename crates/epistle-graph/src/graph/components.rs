//! Connected components and the largest-component subgraph.
//!
//! # Overview
//!
//! Component enumeration order depends on node insertion order, so the
//! result is stabilized before the largest component is picked: components
//! sort by (size descending, smallest member identifier ascending). The
//! metric suite then runs on the induced subgraph of the winner only.
//!
//! Diameter is the longest shortest path within the component, computed by
//! a BFS sweep from every node. A single-node component has diameter 0.

use std::collections::{HashMap, VecDeque};

use fixedbitset::FixedBitSet;
use petgraph::graph::{NodeIndex, UnGraph};
use tracing::instrument;

use crate::graph::build::PersonGraph;

/// Induced subgraph of one connected component.
#[derive(Debug)]
pub struct ComponentGraph {
    /// Subgraph over the component's members, weights preserved.
    pub graph: UnGraph<String, u64>,
    /// Person identifier to subgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
    /// Member identifiers in subgraph index order.
    pub members: Vec<String>,
}

impl ComponentGraph {
    /// Number of persons in the component.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return `true` if `person` belongs to this component.
    #[must_use]
    pub fn contains(&self, person: &str) -> bool {
        self.node_map.contains_key(person)
    }
}

/// Enumerate connected components, sorted by (size desc, min member id asc).
///
/// Members within a component appear in BFS discovery order from the
/// lowest-index unvisited node, which is deterministic for a given graph.
#[must_use]
pub fn connected_components_sorted(pg: &PersonGraph) -> Vec<Vec<NodeIndex>> {
    let n = pg.node_count();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut components: Vec<Vec<NodeIndex>> = Vec::new();

    for start in pg.graph.node_indices() {
        if visited.contains(start.index()) {
            continue;
        }
        let mut members = Vec::new();
        let mut queue = VecDeque::new();
        visited.insert(start.index());
        queue.push_back(start);
        while let Some(v) = queue.pop_front() {
            members.push(v);
            for w in pg.graph.neighbors(v) {
                if !visited.contains(w.index()) {
                    visited.insert(w.index());
                    queue.push_back(w);
                }
            }
        }
        components.push(members);
    }

    components.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then_with(|| min_member_id(pg, a).cmp(&min_member_id(pg, b)))
    });
    components
}

fn min_member_id<'a>(pg: &'a PersonGraph, members: &[NodeIndex]) -> &'a str {
    members
        .iter()
        .filter_map(|&idx| pg.person(idx))
        .min()
        .unwrap_or_default()
}

/// Build the induced subgraph of the largest connected component.
///
/// Returns `None` for an empty graph.
#[must_use]
#[instrument(skip(pg), fields(nodes = pg.node_count()))]
pub fn largest_component(pg: &PersonGraph) -> Option<ComponentGraph> {
    let components = connected_components_sorted(pg);
    let largest = components.first()?;

    let mut graph = UnGraph::<String, u64>::new_undirected();
    let mut node_map: HashMap<String, NodeIndex> = HashMap::new();
    let mut members = Vec::with_capacity(largest.len());
    let mut parent_to_sub: HashMap<NodeIndex, NodeIndex> = HashMap::new();

    for &parent_idx in largest {
        if let Some(person) = pg.person(parent_idx) {
            let sub_idx = graph.add_node(person.to_string());
            node_map.insert(person.to_string(), sub_idx);
            members.push(person.to_string());
            parent_to_sub.insert(parent_idx, sub_idx);
        }
    }

    for edge_idx in pg.graph.edge_indices() {
        if let Some((a, b)) = pg.graph.edge_endpoints(edge_idx) {
            if let (Some(&sa), Some(&sb)) = (parent_to_sub.get(&a), parent_to_sub.get(&b)) {
                graph.add_edge(sa, sb, pg.graph[edge_idx]);
            }
        }
    }

    Some(ComponentGraph {
        graph,
        node_map,
        members,
    })
}

/// Longest shortest path between any two nodes of the component.
///
/// Defined as 0 for a single-node component.
#[must_use]
#[instrument(skip(cg), fields(nodes = cg.node_count()))]
pub fn diameter(cg: &ComponentGraph) -> usize {
    let n = cg.node_count();
    if n < 2 {
        return 0;
    }

    let mut longest = 0usize;
    let mut dist = vec![usize::MAX; n];
    for start in cg.graph.node_indices() {
        dist.fill(usize::MAX);
        dist[start.index()] = 0;
        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(v) = queue.pop_front() {
            for w in cg.graph.neighbors(v) {
                if dist[w.index()] == usize::MAX {
                    dist[w.index()] = dist[v.index()] + 1;
                    longest = longest.max(dist[w.index()]);
                    queue.push_back(w);
                }
            }
        }
    }
    longest
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::Edge;

    fn graph_of(edges: &[(&str, &str)]) -> PersonGraph {
        let edges: Vec<Edge> = edges
            .iter()
            .map(|(s, t)| Edge {
                source: (*s).to_string(),
                target: (*t).to_string(),
                weight: 4,
            })
            .collect();
        PersonGraph::from_edges(&edges)
    }

    #[test]
    fn empty_graph_has_no_component() {
        assert!(largest_component(&graph_of(&[])).is_none());
    }

    #[test]
    fn single_component_contains_all_nodes() {
        let cg = largest_component(&graph_of(&[("a", "b"), ("b", "c")])).expect("component");
        assert_eq!(cg.node_count(), 3);
        assert!(cg.contains("a") && cg.contains("b") && cg.contains("c"));
    }

    #[test]
    fn largest_component_wins_by_size() {
        // Component {a,b,c} (3 nodes) vs {x,y} (2 nodes).
        let cg = largest_component(&graph_of(&[("a", "b"), ("b", "c"), ("x", "y")]))
            .expect("component");
        assert_eq!(cg.node_count(), 3);
        assert!(!cg.contains("x"));
    }

    #[test]
    fn size_tie_breaks_on_smallest_member_id() {
        // Two 2-node components; {a,z} has the smaller min id than {b,c}.
        let cg = largest_component(&graph_of(&[("z", "a"), ("b", "c")])).expect("component");
        assert!(cg.contains("a"));
        assert!(!cg.contains("b"));
    }

    #[test]
    fn component_enumeration_is_stable() {
        let pg = graph_of(&[("a", "b"), ("c", "d"), ("c", "e")]);
        let first = connected_components_sorted(&pg);
        let second = connected_components_sorted(&pg);
        assert_eq!(first, second);
        assert_eq!(first[0].len(), 3, "largest sorted first");
    }

    #[test]
    fn induced_subgraph_keeps_weights() {
        let pg = graph_of(&[("a", "b")]);
        let cg = largest_component(&pg).expect("component");
        let a = cg.node_map["a"];
        let b = cg.node_map["b"];
        let e = cg.graph.find_edge(a, b).expect("edge");
        assert_eq!(cg.graph[e], 4);
    }

    #[test]
    fn triangle_diameter_is_one() {
        let cg =
            largest_component(&graph_of(&[("a", "b"), ("b", "c"), ("c", "a")])).expect("component");
        assert_eq!(diameter(&cg), 1);
    }

    #[test]
    fn path_diameter_is_its_length() {
        let cg = largest_component(&graph_of(&[("a", "b"), ("b", "c"), ("c", "d")]))
            .expect("component");
        assert_eq!(diameter(&cg), 3);
    }

    #[test]
    fn star_diameter_is_two() {
        let cg = largest_component(&graph_of(&[("hub", "a"), ("hub", "b"), ("hub", "c")]))
            .expect("component");
        assert_eq!(diameter(&cg), 2);
    }
}
