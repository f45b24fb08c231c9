use crate::{config::SearchConfig, errors::Result, graph::Graph};

/// Creates an example graph with nine vertices and the following edges:
///
/// ```plain
/// a -10-> b -5-> c -10-> d -10-> e -10-> f -10-> g -10-> i
/// b -20-> d
/// d -15-> b
/// a -50-> h -50-> i -70-> a
/// h -15-> d
/// d -15-> h
/// ```
pub(crate) fn create_weighted_network(config: SearchConfig) -> Result<Graph> {
    let mut g = Graph::with_config(config);

    for name in ["a", "b", "c", "d", "e", "f", "g", "h", "i"] {
        g.add_vertex(name)?;
    }

    g.add_edge("a", "b", 10.0)?;
    g.add_edge("b", "c", 5.0)?;
    g.add_edge("b", "d", 20.0)?;
    g.add_edge("c", "d", 10.0)?;
    g.add_edge("d", "e", 10.0)?;
    g.add_edge("e", "f", 10.0)?;
    g.add_edge("f", "g", 10.0)?;
    g.add_edge("g", "i", 10.0)?;
    g.add_edge("a", "h", 50.0)?;
    g.add_edge("h", "i", 50.0)?;
    g.add_edge("h", "d", 15.0)?;
    g.add_edge("d", "h", 15.0)?;
    g.add_edge("d", "b", 15.0)?;
    g.add_edge("i", "a", 70.0)?;

    Ok(g)
}

/// Creates two vertices `a` and `b` connected by three parallel edges in each direction.
pub(crate) fn create_parallel_edges(config: SearchConfig) -> Result<Graph> {
    let mut g = Graph::with_config(config);
    g.add_vertex("a")?;
    g.add_vertex("b")?;

    g.add_edge("a", "b", 100.0)?;
    g.add_edge("a", "b", 10.0)?;
    g.add_edge("a", "b", 1.0)?;
    g.add_edge("b", "a", 2.0)?;
    g.add_edge("b", "a", 20.0)?;
    g.add_edge("b", "a", 200.0)?;

    Ok(g)
}

/// Creates a graph with two components `a -> b` and `x`, `y` without any edges between them.
pub(crate) fn create_disconnected(config: SearchConfig) -> Result<Graph> {
    let mut g = Graph::with_config(config);
    for name in ["a", "b", "x", "y"] {
        g.add_vertex(name)?;
    }
    g.add_edge("a", "b", 10.0)?;

    Ok(g)
}

/// Configurations for all available frontier strategies.
pub(crate) fn all_configs() -> Vec<SearchConfig> {
    use crate::config::FrontierStrategy;

    vec![
        SearchConfig {
            frontier: FrontierStrategy::LinearScan,
        },
        SearchConfig {
            frontier: FrontierStrategy::BinaryHeap,
        },
    ]
}
