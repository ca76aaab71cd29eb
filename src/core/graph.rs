//! Matrix-represented directed graph with all-pairs shortest path solving.
//!
//! [`DenseGraph`] owns the node labels, the cost matrix, and the result
//! table, and exposes the whole operation surface: build, solve, edge
//! mutation, path reconstruction, and report formatting.
//!
//! The solver's selection rule is deliberate: among unvisited nodes it
//! picks the one with the smallest *direct* cost from the source, not the
//! smallest tentative distance as canonical Dijkstra would. Relaxation
//! only ever runs through nodes the rule has visited, so a run finalizes
//! exactly the routes reachable through the source's direct neighbors.
//! See DESIGN.md for the rationale.

use std::io::BufRead;

use log::debug;
use serde::Serialize;

use super::error::{Error, Result};
use super::matrix::{CostMatrix, NO_EDGE};
use super::parse;
use super::table::{PathTable, UNREACHABLE};

/// One pair's shortest path result in structured form.
///
/// `distance` is `None` for unreachable pairs, in which case `path` and
/// `labels` are empty.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PairReport {
    pub from: usize,
    pub to: usize,
    pub distance: Option<u32>,
    pub path: Vec<usize>,
    pub labels: Vec<String>,
}

/// Directed weighted graph over an adjacency matrix, with an all-pairs
/// shortest path table kept by full recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGraph {
    labels: Vec<String>,
    cost: CostMatrix,
    table: PathTable,
}

impl Default for DenseGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl DenseGraph {
    /// An empty graph. Call [`build`](Self::build) to populate it.
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            cost: CostMatrix::new(0),
            table: PathTable::new(0),
        }
    }

    /// Populate labels and cost matrix from the text input format.
    ///
    /// Any prior graph state is discarded completely before reading. Edge
    /// records naming nodes outside `[1, N]` are rejected as malformed
    /// rather than written out of bounds; beyond that, the input is
    /// trusted per the format contract. The result table is sized but not
    /// solved - call [`solve`](Self::solve) next.
    pub fn build(&mut self, reader: &mut impl BufRead) -> Result<()> {
        let header = parse::read_header(reader)?;
        let n = header.node_count();

        self.labels = header.labels;
        self.cost = CostMatrix::new(n);
        self.table = PathTable::new(n);

        for edge in parse::read_weighted_edges(reader)? {
            if !self.cost.contains(edge.from) || !self.cost.contains(edge.to) {
                return Err(Error::MalformedInput(format!(
                    "edge {} -> {} names a node outside 1..={n}",
                    edge.from, edge.to
                )));
            }
            self.cost.set(edge.from, edge.to, edge.weight);
        }

        debug!("built graph with {n} nodes");
        Ok(())
    }

    /// Number of nodes fixed at build time.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Label of a node.
    pub fn label(&self, id: usize) -> Result<&str> {
        self.check_node(id)?;
        Ok(&self.labels[id - 1])
    }

    /// Read access to the result table, mainly for tests and callers that
    /// want to compare solve outputs.
    pub fn table(&self) -> &PathTable {
        &self.table
    }

    /// Read access to the cost matrix.
    pub fn cost_matrix(&self) -> &CostMatrix {
        &self.cost
    }

    /// Recompute the entire result table from the current cost matrix,
    /// running the relaxation from every node as source.
    ///
    /// Idempotent: re-running against an unchanged matrix reproduces an
    /// identical table.
    pub fn solve(&mut self) {
        self.table.reset();
        let n = self.node_count();
        for source in 1..=n {
            self.solve_source(source);
        }
        debug!("solved shortest paths from {n} sources");
    }

    fn solve_source(&mut self, source: usize) {
        let n = self.node_count();

        {
            let entry = self.table.entry_mut(source, source);
            entry.dist = 0;
            entry.visited = true;
        }

        // Seed every direct neighbor of the source.
        for to in 1..=n {
            let cost = self.cost.cost(source, to);
            if cost != NO_EDGE {
                let entry = self.table.entry_mut(source, to);
                entry.dist = cost;
                entry.prev = Some(source);
            }
        }

        loop {
            // Selection rule: smallest direct cost from the source among
            // unvisited nodes, not smallest tentative distance.
            let mut min = NO_EDGE;
            let mut picked = None;
            for node in 1..=n {
                let direct = self.cost.cost(source, node);
                if !self.table.entry(source, node).visited && direct < min {
                    min = direct;
                    picked = Some(node);
                }
            }
            let Some(v) = picked else {
                break;
            };

            self.table.entry_mut(source, v).visited = true;
            let via = self.table.entry(source, v).dist;

            for w in 1..=n {
                if w == v || self.table.entry(source, w).visited {
                    continue;
                }
                let cost = self.cost.cost(v, w);
                if cost == NO_EDGE {
                    continue;
                }
                let candidate = via.saturating_add(cost);
                if candidate < self.table.entry(source, w).dist {
                    let entry = self.table.entry_mut(source, w);
                    entry.dist = candidate;
                    entry.prev = Some(v);
                }
            }
        }
    }

    /// Set `cost[from][to] = weight` and re-solve.
    ///
    /// Rejects out-of-range ids, negative weights, nonzero self-loop
    /// weights, and weights at or above the "no edge" sentinel. Validation
    /// runs strictly before any mutation: on failure nothing changes.
    pub fn insert_edge(&mut self, from: usize, to: usize, weight: i64) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        if from == to && weight != 0 {
            return Err(Error::InvalidEdgeWeight(weight));
        }
        if weight < 0 || weight >= i64::from(NO_EDGE) {
            return Err(Error::InvalidEdgeWeight(weight));
        }

        self.cost.set(from, to, weight as u32);
        self.solve();
        Ok(())
    }

    /// Clear `cost[from][to]` to the "no edge" sentinel and re-solve.
    ///
    /// Rejects out-of-range ids; removing an edge that does not exist is
    /// a no-op that still re-solves.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;

        self.cost.clear(from, to);
        self.solve();
        Ok(())
    }

    /// Shortest distance from `from` to `to`, or `None` if unreachable.
    pub fn distance(&self, from: usize, to: usize) -> Result<Option<u32>> {
        self.check_node(from)?;
        self.check_node(to)?;
        Ok(self.table.distance(from, to))
    }

    /// Ordered node ids on the shortest path from `from` to `to`, derived
    /// by walking predecessors backward from `to`. Empty if unreachable.
    pub fn path_ids(&self, from: usize, to: usize) -> Result<Vec<usize>> {
        self.check_node(from)?;
        self.check_node(to)?;
        Ok(self.walk_back(from, to))
    }

    /// Same traversal as [`path_ids`](Self::path_ids), emitting labels.
    pub fn path_labels(&self, from: usize, to: usize) -> Result<Vec<String>> {
        let ids = self.path_ids(from, to)?;
        Ok(ids.iter().map(|&id| self.labels[id - 1].clone()).collect())
    }

    fn walk_back(&self, from: usize, to: usize) -> Vec<usize> {
        if self.table.entry(from, to).dist == UNREACHABLE {
            return Vec::new();
        }

        let mut ids = vec![to];
        let mut current = to;
        while current != from {
            match self.table.entry(from, current).prev {
                Some(prev) => {
                    current = prev;
                    ids.push(current);
                }
                // A finite distance always carries a predecessor chain
                // back to the source; an entry without one is unsolved.
                None => return Vec::new(),
            }
        }
        ids.reverse();
        ids
    }

    /// Structured report for one pair.
    pub fn pair_report(&self, from: usize, to: usize) -> Result<PairReport> {
        Ok(PairReport {
            from,
            to,
            distance: self.distance(from, to)?,
            path: self.path_ids(from, to)?,
            labels: self.path_labels(from, to)?,
        })
    }

    /// Structured reports for every row the all-pairs table shows: each
    /// ordered pair whose distance entry is nonzero, including unreachable
    /// ones.
    pub fn all_reports(&self) -> Vec<PairReport> {
        let n = self.node_count();
        let mut reports = Vec::new();
        for from in 1..=n {
            for to in 1..=n {
                if self.table.entry(from, to).dist == 0 {
                    continue;
                }
                // Ids are in range by construction.
                if let Ok(report) = self.pair_report(from, to) {
                    reports.push(report);
                }
            }
        }
        reports
    }

    /// Formatted report for one pair: ids, distance (or the unreachable
    /// marker), the path id sequence, then the label sequence.
    pub fn report_pair(&self, from: usize, to: usize) -> Result<String> {
        self.check_node(from)?;
        self.check_node(to)?;

        let mut out = String::new();
        match self.table.distance(from, to) {
            Some(dist) => {
                let ids = self.walk_back(from, to);
                out.push_str(&format!(
                    "{:>7}{:>7}{:>12}      {}\n",
                    from,
                    to,
                    dist,
                    join_ids(&ids)
                ));
                for &id in &ids {
                    out.push_str(&self.labels[id - 1]);
                    out.push('\n');
                }
            }
            None => {
                out.push_str(&format!("{:>7}{:>7}{:>15}\n", from, to, "----"));
            }
        }
        Ok(out)
    }

    /// Formatted all-pairs table, grouped by source node with its label as
    /// section header. Zero-distance entries (the diagonal among them) are
    /// skipped; unreachable pairs print the `----` marker.
    pub fn report_all(&self) -> String {
        let n = self.node_count();
        let mut out = String::new();
        out.push_str(&format!(
            "Description{:>20}{:>10}{:>14}{:>7}\n",
            "From node", "To node", "Distance", "Path"
        ));

        for from in 1..=n {
            out.push_str(&format!("{}\n\n", self.labels[from - 1]));
            for to in 1..=n {
                let entry = self.table.entry(from, to);
                if entry.dist == 0 {
                    continue;
                }
                if entry.dist == UNREACHABLE {
                    out.push_str(&format!("{:>27}{:>10}{:>12}\n", from, to, "----"));
                } else {
                    let ids = self.walk_back(from, to);
                    out.push_str(&format!(
                        "{:>27}{:>10}{:>12}      {}\n",
                        from,
                        to,
                        entry.dist,
                        join_ids(&ids)
                    ));
                }
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

fn join_ids(ids: &[usize]) -> String {
    let mut out = String::new();
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&id.to_string());
    }
    out
}
