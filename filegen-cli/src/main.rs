#![deny(missing_docs)]
//! A command-line interface for the random file generation tool.

use clap::Parser;
use filegen_core::generator;
use log::{error, info};
use std::io::Write;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Prompt for the file name and size\nfilegen-cli\n\n# Generate a 10MB file without prompting\nfilegen-cli --output ./random.bin --size 10\n\n# Bound peak memory by generating in 64KiB blocks\nfilegen-cli --output ./random.bin --size 10 --chunk-size 65536"
)]
struct Cli {
    /// The path to save the generated file. Prompted for when omitted.
    #[arg(short, long)]
    output: Option<String>,

    /// The size of the file in megabytes (MB). Prompted for when omitted.
    #[arg(short, long)]
    size: Option<usize>,

    /// Generate and write in blocks of this many bytes instead of a single buffer.
    #[arg(long, value_name = "BYTES")]
    chunk_size: Option<usize>,
}

/// Prints `label` on stdout and reads one trimmed line from stdin.
fn prompt(label: &str) -> std::io::Result<String> {
    print!("{label}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let path = cli.output.unwrap_or_else(|| {
        prompt("Output file name: ").unwrap_or_else(|e| {
            error!("Failed to read file name: {e}");
            std::process::exit(1);
        })
    });

    let size = cli.size.unwrap_or_else(|| {
        let line = prompt("Output file size (MB): ").unwrap_or_else(|e| {
            error!("Failed to read file size: {e}");
            std::process::exit(1);
        });
        line.parse::<usize>().unwrap_or_else(|e| {
            error!("Invalid file size '{line}': {e}");
            std::process::exit(1);
        })
    });

    info!("Generating file at '{path}' with size {size} MB.");
    let result = match cli.chunk_size {
        Some(chunk_size) => generator::generate_chunked(&path, size, chunk_size),
        None => generator::generate(&path, size),
    };

    match result {
        Ok(()) => {
            info!("Successfully generated file.");
            println!("Wrote {size} MB of random data to '{path}'");
        }
        Err(e) => {
            error!("Failed to generate file: {e}");
            std::process::exit(1);
        }
    }
}
