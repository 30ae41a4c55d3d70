use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use codeswitch_train_data::{run_batch, BatchOptions};

#[derive(Parser, Debug)]
#[command(author, version, about = "Synthesize code-switched sentences from a parallel corpus and a word alignment")]
struct Args {
    /// Parallel corpus, one "source ||| target" pair per line
    input: PathBuf,
    /// Moses-format alignment file, one "i-j ..." line per pair
    alignments: PathBuf,
    /// Output path, one synthesized target sentence per retained pair
    output: PathBuf,
    /// Substitution cap as a ratio of the target sentence length
    #[arg(long, default_value_t = 0.2)]
    fraction: f64,
    /// Skip pairs where either sentence has fewer tokens than this
    #[arg(long = "min-length", default_value_t = 4)]
    min_length: usize,
    /// Fix the random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();

    let input = BufReader::new(File::open(&args.input)?);
    let alignments = BufReader::new(File::open(&args.alignments)?);
    let mut output = BufWriter::new(File::create(&args.output)?);

    let options = BatchOptions {
        fraction: args.fraction,
        min_sentence_length: args.min_length,
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = run_batch(input, alignments, &mut output, &options, &mut rng)?;

    println!("{} lines written", report.written);
    Ok(())
}
