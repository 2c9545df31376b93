#[cfg(test)]
#[path = "../../tests/unit/solver/graph_test.rs"]
mod graph_test;

use crate::models::{Facility, Link, OptimizationWeights, PathResult};
use crate::utils::{Float, compare_floats};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A directed graph over visible facilities. Nodes are stored in an arena and addressed by
/// dense indices, every node keeps indices of its outgoing links.
pub struct NetworkGraph<'a> {
    facilities: Vec<&'a Facility>,
    index: FxHashMap<&'a str, usize>,
    links: Vec<GraphLink<'a>>,
    adjacency: Vec<Vec<usize>>,
}

struct GraphLink<'a> {
    to: usize,
    link: &'a Link,
}

impl<'a> NetworkGraph<'a> {
    /// Creates a graph from facilities and links. Hidden facilities and links which refer to
    /// unknown or hidden facilities are skipped.
    pub fn new(facilities: &'a [Facility], links: &'a [Link]) -> Self {
        let facilities = facilities.iter().filter(|facility| facility.visible).collect::<Vec<_>>();
        let index = facilities
            .iter()
            .enumerate()
            .map(|(idx, facility)| (facility.id.as_str(), idx))
            .collect::<FxHashMap<_, _>>();

        let mut adjacency = vec![Vec::default(); facilities.len()];
        let links = links
            .iter()
            .filter_map(|link| {
                let from = *index.get(link.from.as_str())?;
                let to = *index.get(link.to.as_str())?;

                Some((from, GraphLink { to, link }))
            })
            .enumerate()
            .map(|(link_idx, (from, link))| {
                adjacency[from].push(link_idx);
                link
            })
            .collect();

        Self { facilities, index, links, adjacency }
    }

    /// Returns amount of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.facilities.len()
    }

    /// Returns amount of links in the graph.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Returns facility index by its id.
    pub fn get_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Returns visible facilities in the arena order.
    pub fn facilities(&self) -> impl Iterator<Item = &'a Facility> + '_ {
        self.facilities.iter().copied()
    }

    /// Finds a path which minimizes the sum of composite link weights using Dijkstra algorithm.
    /// Returns `None` when the target cannot be reached from the source. Totals are not rounded.
    pub fn find_path(&self, source: &str, target: &str, weights: &OptimizationWeights) -> Option<PathResult> {
        let source_idx = self.get_index(source)?;
        let target_idx = self.get_index(target)?;

        let predecessors = self.search(source_idx, target_idx, weights);

        // NOTE the source never gets a predecessor, so a trivial path is reported as not found
        predecessors[target_idx]?;

        let mut link_indices = Vec::default();
        let mut current = target_idx;
        while let Some(link_idx) = predecessors[current] {
            link_indices.push(link_idx);
            current = self.get_index(self.links[link_idx].link.from.as_str())?;
        }
        link_indices.reverse();

        let links = link_indices.iter().map(|&link_idx| self.links[link_idx].link.clone()).collect::<Vec<_>>();
        let nodes = std::iter::once(source.to_string()).chain(links.iter().map(|link| link.to.clone())).collect();

        Some(PathResult::new(source, target, nodes, links))
    }

    /// Runs label setting search and returns a predecessor link per node.
    fn search(&self, source: usize, target: usize, weights: &OptimizationWeights) -> Vec<Option<usize>> {
        let mut distances = vec![Float::INFINITY; self.node_count()];
        let mut predecessors = vec![None; self.node_count()];
        let mut finalized = vec![false; self.node_count()];
        let mut queue = BinaryHeap::default();

        distances[source] = 0.;
        queue.push(QueueItem { weight: 0., node: source });

        while let Some(QueueItem { weight, node }) = queue.pop() {
            if finalized[node] {
                continue;
            }
            finalized[node] = true;

            if node == target {
                break;
            }

            for &link_idx in self.adjacency[node].iter() {
                let GraphLink { to, link } = &self.links[link_idx];
                if finalized[*to] {
                    continue;
                }

                let candidate = weight + weights.composite_weight(link);
                if candidate < distances[*to] {
                    distances[*to] = candidate;
                    predecessors[*to] = Some(link_idx);
                    queue.push(QueueItem { weight: candidate, node: *to });
                }
            }
        }

        predecessors
    }
}

/// A priority queue item: the ordering is reversed to turn max-heap into min-heap.
struct QueueItem {
    weight: Float,
    node: usize,
}

impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_floats(other.weight, self.weight).then_with(|| other.node.cmp(&self.node))
    }
}

/// Finds a path between two facilities over the given links. Hidden facilities are not part of
/// the graph. Totals of the result are rounded for presentation.
pub fn shortest_path(
    facilities: &[Facility],
    links: &[Link],
    source: &str,
    target: &str,
    weights: &OptimizationWeights,
) -> Option<PathResult> {
    NetworkGraph::new(facilities, links).find_path(source, target, weights).map(|path| path.rounded())
}
