use std::path::PathBuf;

use clap::Parser;
use graph_inputs::graphs::create_input_files;
use rand::{rngs::StdRng, SeedableRng};

/// Generates `number_of_graphs` random directed graph input files named
/// `input1.txt`, `input2.txt`, ... inside `directory`. Every vertex of a
/// generated graph gets the same random out degree.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory where the input files will be written
    #[arg(short, long, default_value = ".")]
    directory: PathBuf,
    /// Number of input files to be generated
    #[arg(short, long, default_value = "100")]
    number_of_graphs: u32,
    /// Seed for the random number generator, for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    println!("Generating input files");
    let paths = match args.seed {
        Some(seed) => create_input_files(
            &args.directory,
            args.number_of_graphs,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => create_input_files(
            &args.directory,
            args.number_of_graphs,
            &mut rand::thread_rng(),
        ),
    }
    .unwrap();

    println!(
        "Wrote {} input files to {}",
        paths.len(),
        args.directory.display()
    );
}
