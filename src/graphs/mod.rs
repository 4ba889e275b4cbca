use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use rand::Rng;

use self::{edge::Edge, graph_generator::random_graph};
use crate::utility::get_progressbar;

pub mod edge;
pub mod graph_functions;
pub mod graph_generator;

pub type Vertex = u32;

/// Largest vertex count a generated graph may have. Vertex counts are drawn
/// from `2..=MAX_VERTICES`.
pub const MAX_VERTICES: Vertex = 10;

/// A directed multigraph with vertices `1..=number_of_vertices`, stored as
/// the ordered list of its edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    number_of_vertices: u32,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(number_of_vertices: u32, edges: Vec<Edge>) -> Graph {
        Graph {
            number_of_vertices,
            edges,
        }
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.number_of_vertices
    }

    pub fn number_of_edges(&self) -> u32 {
        self.edges.len() as u32
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn out_edges(&self, tail: Vertex) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |edge| edge.tail() == tail)
    }
}

/// Writes a graph in the input format:
/// ```text
/// n
/// m*n
/// tail head
/// ...
/// ```
/// with one line per edge, in edge order.
pub fn write_graph(graph: &Graph, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "{}", graph.number_of_vertices())?;
    writeln!(writer, "{}", graph.number_of_edges())?;

    for edge in graph.edges() {
        writeln!(writer, "{} {}", edge.tail(), edge.head())?;
    }

    Ok(())
}

/// Writes a graph to `path`, truncating any existing file.
pub fn write_graph_to_file(graph: &Graph, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_graph(graph, &mut writer)?;
    writer.flush()
}

pub fn input_file_name(index: u32) -> String {
    format!("input{}.txt", index)
}

/// Generates `number_of_graphs` random graphs and writes them to
/// `input1.txt`, `input2.txt`, ... inside `directory`. Each file is fully
/// written and closed before the next graph is generated; the first I/O
/// failure aborts the run.
pub fn create_input_files(
    directory: &Path,
    number_of_graphs: u32,
    rng: &mut impl Rng,
) -> io::Result<Vec<PathBuf>> {
    let bar = get_progressbar("Writing input files", number_of_graphs as u64);

    let mut paths = Vec::with_capacity(number_of_graphs as usize);
    for index in 1..=number_of_graphs {
        let graph = random_graph(rng);
        let path = directory.join(input_file_name(index));
        write_graph_to_file(&graph, &path)?;
        paths.push(path);
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(paths)
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

fn parse_count_line(line: Option<io::Result<String>>, what: &str) -> io::Result<u32> {
    let line = line.ok_or_else(|| invalid_data(format!("no {} line found", what)))??;
    line.trim()
        .parse()
        .map_err(|_| invalid_data(format!("unable to parse {} in line {}", what, line)))
}

/// Reads a graph back from the input format written by [`write_graph`].
pub fn read_graph_from_file(path: &Path) -> io::Result<Graph> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines();

    let number_of_vertices = parse_count_line(lines.next(), "vertex count")?;
    let number_of_edges = parse_count_line(lines.next(), "edge count")?;

    let mut edges = Vec::with_capacity(number_of_edges as usize);
    for line in lines {
        // tail head
        let line = line?;
        let mut values = line.split_whitespace();
        let tail: Vertex = values
            .next()
            .ok_or_else(|| invalid_data(format!("no tail found in line {}", line)))?
            .parse()
            .map_err(|_| invalid_data(format!("unable to parse tail in line {}", line)))?;
        let head: Vertex = values
            .next()
            .ok_or_else(|| invalid_data(format!("no head found in line {}", line)))?
            .parse()
            .map_err(|_| invalid_data(format!("unable to parse head in line {}", line)))?;

        let edge = Edge::new(tail, head)
            .ok_or_else(|| invalid_data(format!("self loop in line {}", line)))?;
        edges.push(edge);
    }

    if edges.len() as u32 != number_of_edges {
        return Err(invalid_data(format!(
            "declared {} edges but found {}",
            number_of_edges,
            edges.len()
        )));
    }

    Ok(Graph::new(number_of_vertices, edges))
}

#[cfg(test)]
mod tests {
    use super::{edge::Edge, write_graph, Graph};

    #[test]
    fn write_graph_format() {
        let graph = Graph::new(
            3,
            vec![
                Edge::new(1, 3).unwrap(),
                Edge::new(2, 1).unwrap(),
                Edge::new(3, 2).unwrap(),
            ],
        );

        let mut buffer = Vec::new();
        write_graph(&graph, &mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "3\n3\n1 3\n2 1\n3 2\n");
    }
}
