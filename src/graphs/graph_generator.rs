use itertools::Itertools;
use rand::Rng;

use super::{edge::Edge, Graph, MAX_VERTICES};

/// Parameters of one generated graph: the vertex count `n` and the out
/// degree `m` shared by every vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphParameters {
    pub number_of_vertices: u32,
    pub out_degree: u32,
}

impl GraphParameters {
    /// Draws `n` uniformly from `2..=MAX_VERTICES` and `m` uniformly from
    /// `1..=n-1`.
    pub fn random(rng: &mut impl Rng) -> GraphParameters {
        let number_of_vertices = rng.gen_range(2..=MAX_VERTICES);
        let out_degree = rng.gen_range(1..=(number_of_vertices - 1));

        GraphParameters {
            number_of_vertices,
            out_degree,
        }
    }

    pub fn number_of_edges(&self) -> u32 {
        self.out_degree * self.number_of_vertices
    }
}

pub fn random_graph(rng: &mut impl Rng) -> Graph {
    random_graph_with_parameters(GraphParameters::random(rng), rng)
}

/// Builds a graph where every vertex gets `parameters.out_degree` outgoing
/// edges, heads drawn uniformly without replacement from the other
/// vertices. Edges are ordered by tail, each tail's heads in draw order.
pub fn random_graph_with_parameters(parameters: GraphParameters, rng: &mut impl Rng) -> Graph {
    let number_of_vertices = parameters.number_of_vertices;
    let mut edges = Vec::with_capacity(parameters.number_of_edges() as usize);

    for tail in 1..=number_of_vertices {
        let mut candidates = (1..=number_of_vertices)
            .filter(|&vertex| vertex != tail)
            .collect_vec();

        for _ in 0..parameters.out_degree {
            let position = rng.gen_range(0..candidates.len());
            let head = candidates.remove(position);
            edges.push(Edge::new(tail, head).unwrap());
        }
    }

    Graph::new(number_of_vertices, edges)
}
