use crate::{
    config::SearchConfig,
    dijkstra::DijkstraSearch,
    errors::{GraphError, Result},
    types::{Edge, EdgeID, Vertex, VertexID},
};
use rustc_hash::FxHashMap;
use smartstring::alias::String as SmartString;

/// Some general statistical numbers of a graph
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GraphStatistic {
    /// Number of vertices in this graph.
    pub vertices: usize,
    /// Number of edges in this graph, including parallel edges.
    pub edges: usize,
    /// Average fan out.
    pub avg_fan_out: f64,
    /// Maximal number of outgoing edges of a vertex.
    pub max_fan_out: usize,
    /// Number of edges where source and target are the same vertex.
    pub self_loops: usize,
}

impl std::fmt::Display for GraphStatistic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "vertices={}, edges={}, avg_fan_out={:.2}, max_fan_out={}",
            self.vertices, self.edges, self.avg_fan_out, self.max_fan_out
        )?;
        if self.self_loops > 0 {
            write!(f, ", self_loops={}", self.self_loops)?;
        }
        Ok(())
    }
}

/// A directed graph with named vertices and non-negative edge weights.
///
/// Vertices and edges can only be added, never removed or changed.
/// Each edge is stored once in the edge list of the graph and referenced by its
/// [EdgeID] from the neighborhood of its source vertex.
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    names: FxHashMap<SmartString, VertexID>,
    config: SearchConfig,
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

impl Graph {
    /// Create a new and empty graph with the default search configuration.
    pub fn new() -> Graph {
        Graph::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Graph {
        Graph {
            vertices: Vec::default(),
            edges: Vec::default(),
            names: FxHashMap::default(),
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Add a new vertex with the given unique `name` and return its ID.
    ///
    /// Fails with [GraphError::DuplicateVertex] if there is already a vertex with this name.
    pub fn add_vertex(&mut self, name: &str) -> Result<VertexID> {
        if self.names.contains_key(name) {
            return Err(GraphError::DuplicateVertex(name.to_string()));
        }
        let id = self.vertices.len();
        self.vertices.push(Vertex::new(name));
        self.names.insert(name.into(), id);
        debug!("added vertex \"{}\" with ID {}", name, id);
        Ok(id)
    }

    /// Add a directed edge between the two vertices given by their name.
    ///
    /// The weight must be a non-negative finite number, otherwise [GraphError::InvalidWeight] is returned.
    /// Both vertices must already exist in the graph. The graph is not changed if an error occurs.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<EdgeID> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;

        let id = self.edges.len();
        self.edges.push(Edge {
            source,
            target,
            weight,
        });
        self.vertices[source].neighborhood.push(id);
        debug!(
            "added edge {} from \"{}\" to \"{}\" with weight {}",
            id, from, to, weight
        );
        Ok(id)
    }

    /// Get the ID of the vertex with the given name or `None` if there is no such vertex.
    pub fn get_vertex_id(&self, name: &str) -> Option<VertexID> {
        self.names.get(name).copied()
    }

    pub fn vertex(&self, id: VertexID) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn edge(&self, id: EdgeID) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All vertices with their ID in the order they have been added.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexID, &Vertex)> + '_ {
        self.vertices.iter().enumerate()
    }

    /// All edges in the order they have been added.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Get all outgoing edges of the given vertex.
    /// An unknown vertex ID has no outgoing edges.
    pub fn outgoing_edges(&self, vertex: VertexID) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices
            .get(vertex)
            .map(|v| v.neighborhood.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |e| self.edges.get(*e))
    }

    pub fn statistics(&self) -> GraphStatistic {
        let fan_outs: Vec<usize> = self.vertices.iter().map(Vertex::fan_out).collect();
        let avg_fan_out = if fan_outs.is_empty() {
            0.0
        } else {
            self.edges.len() as f64 / fan_outs.len() as f64
        };

        GraphStatistic {
            vertices: self.vertices.len(),
            edges: self.edges.len(),
            avg_fan_out,
            max_fan_out: fan_outs.iter().copied().max().unwrap_or(0),
            self_loops: self.edges.iter().filter(|e| e.is_self_loop()).count(),
        }
    }

    /// Returns the weight of the shortest path between the two vertices given by their name.
    ///
    /// Fails with [GraphError::UnknownVertex] if one of the vertices does not exist and with
    /// [GraphError::NoPathExists] if `to` can't be reached from `from`.
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<f64> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;

        debug!("searching shortest path from \"{}\" to \"{}\"", from, to);
        let weight = self.dijkstra(source, target);

        if weight.is_infinite() {
            Err(GraphError::NoPathExists {
                from: from.to_string(),
                to: to.to_string(),
            })
        } else {
            debug!(
                "shortest path from \"{}\" to \"{}\" has weight {}",
                from, to, weight
            );
            Ok(weight)
        }
    }

    /// Dijkstra's shortest path algorithm between two vertices given by their ID.
    ///
    /// Returns positive infinity if there is no path from `from` to `to`.
    pub fn dijkstra(&self, from: VertexID, to: VertexID) -> f64 {
        if from == to {
            return 0.0;
        }
        self.search(from)
            .find(|step| step.vertex == to)
            .map_or(f64::INFINITY, |step| step.distance)
    }

    /// Get all vertices reachable from the vertex with the given name together
    /// with their shortest distance, ordered by distance.
    pub fn distances_from(&self, from: &str) -> Result<Vec<(VertexID, f64)>> {
        let source = self.resolve(from)?;
        let result = self
            .search(source)
            .map(|step| (step.vertex, step.distance))
            .collect();
        Ok(result)
    }

    /// Start a search that finalizes all vertices reachable from `from` by increasing distance.
    pub fn search(&self, from: VertexID) -> DijkstraSearch<'_> {
        DijkstraSearch::new(self, from, self.config.frontier)
    }

    fn resolve(&self, name: &str) -> Result<VertexID> {
        self.get_vertex_id(name)
            .ok_or_else(|| GraphError::UnknownVertex(name.to_string()))
    }
}
