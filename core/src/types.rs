use smartstring::alias::String;

/// Stable handle of a vertex, which is its position in insertion order.
pub type VertexID = usize;

/// Position of an edge in the edge list of its graph.
pub type EdgeID = usize;

/// Directed, weighted edge between a source and target vertex which are identified by their ID.
///
/// Edges are never changed after they have been added to a graph.
#[derive(PartialEq, PartialOrd, Clone, Debug)]
pub struct Edge {
    pub source: VertexID,
    pub target: VertexID,
    /// Finite and non-negative weight of this edge.
    pub weight: f64,
}

impl Edge {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// A named vertex together with the IDs of its outgoing edges.
#[derive(Clone, Debug)]
pub struct Vertex {
    pub(crate) name: String,
    pub(crate) neighborhood: Vec<EdgeID>,
}

impl Vertex {
    pub(crate) fn new(name: &str) -> Vertex {
        Vertex {
            name: name.into(),
            neighborhood: Vec::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// IDs of all outgoing edges, in the order they have been added.
    pub fn neighborhood(&self) -> &[EdgeID] {
        &self.neighborhood
    }

    pub fn fan_out(&self) -> usize {
        self.neighborhood.len()
    }
}
