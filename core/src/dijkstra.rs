use crate::{config::FrontierStrategy, graph::Graph, types::VertexID};
use rustc_hash::FxHashMap;
use std::{cmp::Reverse, collections::BinaryHeap};

/// A vertex together with its finalized shortest distance from the start vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DijkstraStep {
    pub vertex: VertexID,
    pub distance: f64,
}

/// Tentative distances of all vertices that have been reached, but are not finalized yet.
enum Frontier {
    LinearScan(FxHashMap<VertexID, f64>),
    BinaryHeap {
        tentative: FxHashMap<VertexID, f64>,
        // Non-negative floats have the same order as their bit pattern.
        queue: BinaryHeap<Reverse<(u64, VertexID)>>,
    },
}

impl Frontier {
    fn new(strategy: FrontierStrategy) -> Frontier {
        match strategy {
            FrontierStrategy::LinearScan => Frontier::LinearScan(FxHashMap::default()),
            FrontierStrategy::BinaryHeap => Frontier::BinaryHeap {
                tentative: FxHashMap::default(),
                queue: BinaryHeap::new(),
            },
        }
    }

    fn tentative(&self) -> &FxHashMap<VertexID, f64> {
        match self {
            Frontier::LinearScan(tentative) | Frontier::BinaryHeap { tentative, .. } => tentative,
        }
    }

    /// Set the tentative distance of `vertex` unless it already has a strictly smaller one.
    fn offer(&mut self, vertex: VertexID, candidate: f64) -> bool {
        if let Some(existing) = self.tentative().get(&vertex) {
            if *existing < candidate {
                return false;
            }
        }
        match self {
            Frontier::LinearScan(tentative) => {
                tentative.insert(vertex, candidate);
            }
            Frontier::BinaryHeap { tentative, queue } => {
                tentative.insert(vertex, candidate);
                queue.push(Reverse((candidate.to_bits(), vertex)));
            }
        }
        true
    }

    /// Remove the vertex with the smallest tentative distance.
    /// Equal distances are resolved in favor of the smaller vertex ID.
    fn pop_min(&mut self) -> Option<(VertexID, f64)> {
        match self {
            Frontier::LinearScan(tentative) => {
                let (vertex, distance) = tentative
                    .iter()
                    .map(|(v, d)| (*v, *d))
                    .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))?;
                tentative.remove(&vertex);
                Some((vertex, distance))
            }
            Frontier::BinaryHeap { tentative, queue } => {
                while let Some(Reverse((bits, vertex))) = queue.pop() {
                    // Entries are outdated when the vertex was already removed or got a smaller distance
                    if tentative.get(&vertex).map(|d| d.to_bits()) == Some(bits) {
                        tentative.remove(&vertex);
                        return Some((vertex, f64::from_bits(bits)));
                    }
                }
                None
            }
        }
    }
}

/// Dijkstra's algorithm as an iterator over all vertices reachable from a start vertex.
///
/// Each call to `next()` returns the vertex that has been finalized last, starting with the
/// start vertex itself at distance 0. The distances of the returned vertices never decrease.
/// A search from a vertex ID that is not part of the graph is empty.
pub struct DijkstraSearch<'a> {
    graph: &'a Graph,
    visited: FxHashMap<VertexID, f64>,
    frontier: Frontier,
    next_step: Option<DijkstraStep>,
}

impl<'a> DijkstraSearch<'a> {
    pub fn new(
        graph: &'a Graph,
        from: VertexID,
        strategy: FrontierStrategy,
    ) -> DijkstraSearch<'a> {
        let mut visited = FxHashMap::default();
        // A vertex ID that does not belong to the graph reaches nothing, not even itself
        let next_step = if from < graph.vertex_count() {
            visited.insert(from, 0.0);
            Some(DijkstraStep {
                vertex: from,
                distance: 0.0,
            })
        } else {
            None
        };
        DijkstraSearch {
            graph,
            visited,
            frontier: Frontier::new(strategy),
            next_step,
        }
    }

    /// The finalized distance of the vertex or `None` if it has not been finalized (yet).
    pub fn distance(&self, vertex: VertexID) -> Option<f64> {
        self.visited.get(&vertex).copied()
    }

    fn relax(&mut self, current: DijkstraStep) {
        let graph = self.graph;
        for edge in graph.outgoing_edges(current.vertex) {
            if self.visited.contains_key(&edge.target) {
                continue;
            }
            let candidate = current.distance + edge.weight;
            if self.frontier.offer(edge.target, candidate) {
                trace!(
                    "tentative distance of {} set to {} via {}",
                    edge.target,
                    candidate,
                    current.vertex
                );
            }
        }
    }
}

impl<'a> Iterator for DijkstraSearch<'a> {
    type Item = DijkstraStep;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next_step.take()?;

        self.relax(current);
        if let Some((vertex, distance)) = self.frontier.pop_min() {
            trace!("finalized {} with distance {}", vertex, distance);
            self.visited.insert(vertex, distance);
            self.next_step = Some(DijkstraStep { vertex, distance });
        }

        Some(current)
    }
}
