use super::Vertex;

/// A directed edge between two distinct vertices.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Edge {
    tail: Vertex,
    head: Vertex,
}

impl Edge {
    /// Returns `None` for a self loop.
    pub fn new(tail: Vertex, head: Vertex) -> Option<Edge> {
        if tail == head {
            return None;
        }

        Some(Edge { tail, head })
    }

    pub fn tail(&self) -> Vertex {
        self.tail
    }

    pub fn head(&self) -> Vertex {
        self.head
    }
}
