//! Adjacency-list graph with depth-first traversal.
//!
//! The secondary component of the system: it shares the input format shape
//! with [`DenseGraph`](super::graph::DenseGraph) (node count, labels, edge
//! records with a `0` sentinel) but represents edges as per-node ordered
//! lists and only answers traversal queries.

use std::io::BufRead;

use log::debug;

use super::error::{Error, Result};
use super::parse;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ListNode {
    label: String,
    /// Outgoing neighbors, most recently inserted first. The traversal
    /// order depends on this prepend-on-read ordering.
    edges: Vec<usize>,
}

/// Directed graph over per-node adjacency lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListGraph {
    nodes: Vec<ListNode>,
}

impl ListGraph {
    /// An empty graph. Call [`build`](Self::build) to populate it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate labels and adjacency lists from the text input format.
    /// Edge records are unweighted `(from, to)` pairs. Any prior graph
    /// state is discarded.
    pub fn build(&mut self, reader: &mut impl BufRead) -> Result<()> {
        let header = parse::read_header(reader)?;
        let n = header.node_count();

        self.nodes = header
            .labels
            .into_iter()
            .map(|label| ListNode {
                label,
                edges: Vec::new(),
            })
            .collect();

        for (from, to) in parse::read_pairs(reader)? {
            if !(1..=n).contains(&from) || !(1..=n).contains(&to) {
                return Err(Error::MalformedInput(format!(
                    "edge {from} -> {to} names a node outside 1..={n}"
                )));
            }
            self.nodes[from - 1].edges.insert(0, to);
        }

        debug!("built adjacency-list graph with {n} nodes");
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn label(&self, id: usize) -> Result<&str> {
        self.check_node(id)?;
        Ok(&self.nodes[id - 1].label)
    }

    /// Depth-first visitation order over the whole graph, starting from
    /// node 1 and restarting from the lowest unvisited node.
    ///
    /// Visited marks are per-call, so the traversal is repeatable on one
    /// built graph.
    pub fn depth_first_order(&self) -> Vec<usize> {
        let n = self.node_count();
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);

        for v in 1..=n {
            if !visited[v - 1] {
                self.visit(v, &mut visited, &mut order);
            }
        }
        order
    }

    fn visit(&self, v: usize, visited: &mut [bool], order: &mut Vec<usize>) {
        visited[v - 1] = true;
        order.push(v);
        for &adj in &self.nodes[v - 1].edges {
            if !visited[adj - 1] {
                self.visit(adj, visited, order);
            }
        }
    }

    /// One-line report of the depth-first visitation order.
    pub fn report_order(&self) -> String {
        let mut out = String::from("Depth-first ordering:");
        for id in self.depth_first_order() {
            out.push_str(&format!("{id:>3}"));
        }
        out.push('\n');
        out
    }

    /// Listing of every node with its label and outgoing edges.
    pub fn report_graph(&self) -> String {
        let mut out = String::from("Graph:\n");
        for (i, node) in self.nodes.iter().enumerate() {
            let id = i + 1;
            out.push_str(&format!("Node {id}      {}\n\n", node.label));
            for &adj in &node.edges {
                out.push_str(&format!("  edge {id}{adj:>3}\n"));
            }
        }
        out
    }

    fn check_node(&self, id: usize) -> Result<()> {
        let size = self.node_count();
        if !(1..=size).contains(&id) {
            return Err(Error::OutOfRange { node: id, size });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_graph() -> ListGraph {
        let mut graph = ListGraph::new();
        let mut input = Cursor::new("3\nAurora\nBasalt\nCedar\n1 2\n1 3\n3 2\n0 0\n");
        graph.build(&mut input).unwrap();
        graph
    }

    #[test]
    fn test_depth_first_order_follows_insertion_at_head() {
        // Node 1's edges were inserted as 2 then 3, so 3 is traversed
        // first; from 3 the walk reaches 2 before backtracking.
        let graph = sample_graph();
        assert_eq!(graph.depth_first_order(), vec![1, 3, 2]);
    }

    #[test]
    fn test_depth_first_order_restarts_at_unvisited_nodes() {
        let mut graph = ListGraph::new();
        let mut input = Cursor::new("4\nA\nB\nC\nD\n1 2\n3 4\n0 0\n");
        graph.build(&mut input).unwrap();
        assert_eq!(graph.depth_first_order(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_depth_first_order_is_repeatable() {
        let graph = sample_graph();
        assert_eq!(graph.depth_first_order(), graph.depth_first_order());
    }

    #[test]
    fn test_build_rejects_out_of_range_edge() {
        let mut graph = ListGraph::new();
        let mut input = Cursor::new("2\nA\nB\n1 7\n0 0\n");
        assert!(matches!(
            graph.build(&mut input),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_report_order() {
        let graph = sample_graph();
        assert_eq!(graph.report_order(), "Depth-first ordering:  1  3  2\n");
    }

    #[test]
    fn test_report_graph_lists_edges() {
        let graph = sample_graph();
        let report = graph.report_graph();
        assert!(report.starts_with("Graph:\n"));
        assert!(report.contains("Node 1      Aurora"));
        assert!(report.contains("  edge 1  3"));
        assert!(report.contains("  edge 1  2"));
        assert!(report.contains("  edge 3  2"));
    }

    #[test]
    fn test_label() {
        let graph = sample_graph();
        assert_eq!(graph.label(2).unwrap(), "Basalt");
        assert!(graph.label(0).is_err());
    }
}
