use ahash::{HashSet, HashSetExt};

use super::{Graph, Vertex};

/// Check if a graph is a well formed input graph: vertices in range, no
/// self loops, and every vertex with the same number of distinct targets.
pub fn validate_graph(graph: &Graph) -> Result<(), String> {
    let number_of_vertices = graph.number_of_vertices();
    if number_of_vertices < 2 {
        return Err("graph has fewer than two vertices".to_string());
    }

    let number_of_edges = graph.number_of_edges();
    if number_of_edges == 0 || number_of_edges % number_of_vertices != 0 {
        return Err(format!(
            "{} edges is not a positive multiple of {} vertices",
            number_of_edges, number_of_vertices
        ));
    }

    let out_degree = number_of_edges / number_of_vertices;
    if out_degree > number_of_vertices - 1 {
        return Err(format!(
            "out degree {} exceeds the {} possible targets per vertex",
            out_degree,
            number_of_vertices - 1
        ));
    }

    for edge in graph.edges() {
        if !(1..=number_of_vertices).contains(&edge.tail())
            || !(1..=number_of_vertices).contains(&edge.head())
        {
            return Err(format!(
                "edge {} {} leaves the vertex range",
                edge.tail(),
                edge.head()
            ));
        }
    }

    for tail in 1..=number_of_vertices {
        let heads = heads_of(graph, tail);
        if heads.len() as u32 != out_degree {
            return Err(format!(
                "vertex {} has {} distinct targets but should have {}",
                tail,
                heads.len(),
                out_degree
            ));
        }
    }

    Ok(())
}

pub fn heads_of(graph: &Graph, tail: Vertex) -> HashSet<Vertex> {
    let mut heads = HashSet::new();

    for out_edge in graph.out_edges(tail) {
        heads.insert(out_edge.head());
    }

    heads
}

pub fn out_degrees(graph: &Graph) -> Vec<u32> {
    (1..=graph.number_of_vertices())
        .map(|vertex| graph.out_edges(vertex).count() as u32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{out_degrees, validate_graph};
    use crate::graphs::{edge::Edge, Graph};

    fn graph_from_pairs(number_of_vertices: u32, pairs: &[(u32, u32)]) -> Graph {
        let edges = pairs
            .iter()
            .map(|&(tail, head)| Edge::new(tail, head).unwrap())
            .collect();
        Graph::new(number_of_vertices, edges)
    }

    #[test]
    fn accepts_uniform_out_degree() {
        let graph = graph_from_pairs(3, &[(1, 2), (2, 3), (3, 1)]);

        assert_eq!(validate_graph(&graph), Ok(()));
        assert_eq!(out_degrees(&graph), vec![1, 1, 1]);
    }

    #[test]
    fn rejects_duplicate_targets() {
        // vertex 1 hits vertex 2 twice, vertex 3 never
        let graph = graph_from_pairs(3, &[(1, 2), (1, 2), (2, 1), (2, 3), (3, 1), (3, 2)]);

        assert!(validate_graph(&graph).is_err());
    }

    #[test]
    fn rejects_uneven_edge_count() {
        let graph = graph_from_pairs(3, &[(1, 2), (2, 3)]);

        assert!(validate_graph(&graph).is_err());
    }

    #[test]
    fn rejects_out_of_range_vertices() {
        let graph = graph_from_pairs(2, &[(1, 2), (2, 3)]);

        assert!(validate_graph(&graph).is_err());
    }
}
