//! Assignment Solver Binary
//!
//! Reads a cost matrix (virtual row last) from a file or stdin,
//! as a json array of rows or as whitespace separated text,
//! and prints the optimal assignment.

use clap::Parser;
use diagonal_munkres::CostMatrix;
use diagonal_munkres::Munkres;
use std::io::Read;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Match real rows to columns and leftover columns to the diagonal",
    long_about = None
)]
struct Args {
    #[arg(short, long, help = "cost matrix file, stdin when omitted")]
    input: Option<std::path::PathBuf>,
    #[arg(long, help = "print the assignment as json")]
    json: bool,
    #[arg(short, long, help = "log warnings only")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    diagonal_munkres::log(match args.quiet {
        true => log::LevelFilter::Warn,
        false => log::LevelFilter::Info,
    });
    let text = match args.input {
        Some(ref path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let matrix = parse(&text)?;
    log::info!("{:<32}{}x{}", "loaded cost matrix", matrix.rows(), matrix.cols());
    let ref mut munkres = Munkres::from(matrix);
    munkres.run();
    let assignment = munkres.assignment();
    log::info!("{:<32}{:.6}", "optimal cost", assignment.cost(munkres.original()));
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&assignment)?),
        false => println!("{}", assignment),
    }
    Ok(())
}

fn parse(text: &str) -> anyhow::Result<CostMatrix> {
    match text.trim_start().starts_with('[') {
        true => Ok(serde_json::from_str::<CostMatrix>(text)?),
        false => text.parse::<CostMatrix>(),
    }
}
