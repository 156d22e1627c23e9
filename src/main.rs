use clap::Parser;
use line_reservoir::{sample_lines, DigestAlgorithm, Result, SampleConfig, SampleError};
use std::fs::File;
use std::io::{self, BufWriter, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Select N random lines from a file or stdin using reservoir sampling
#[derive(Parser, Debug)]
#[command(name = "line-reservoir", version)]
#[command(
    after_help = "Examples:\n  \
    line-reservoir -n 1000 reads.tsv                      # 1000 random lines\n  \
    line-reservoir -n 10 -s 42 -p '#' calls.vcf           # Reproducible, keep '#' headers\n  \
    zcat big.txt.gz | line-reservoir -n 50 - > sample.txt # From stdin\n  \
    line-reservoir -n 100 --digest sha256 -o out.txt in.txt"
)]
struct Args {
    /// Input file (or - for stdin, the default)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Number of data lines to select
    #[arg(short = 'n', long = "num", allow_negative_numbers = true)]
    num: i64,

    /// Seed for reproducible sampling (any 64-bit integer)
    #[arg(short = 's', long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Lines starting with this prefix are headers: always kept, never sampled
    #[arg(short = 'p', long = "header_prefix", visible_alias = "header-prefix")]
    header_prefix: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Compute checksum of the sampled output (sha256, sha512)
    #[arg(long, value_name = "ALGORITHM")]
    digest: Option<DigestAlgorithm>,

    /// Log progress to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    // Validate everything before touching the input
    let config = SampleConfig::new(args.num)?
        .with_seed(args.seed.map(seed_bits))
        .with_header_prefix(args.header_prefix.as_deref().map(str::as_bytes));
    debug!(?config, "parsed arguments");

    let input = open_input(args.input.as_deref())?;
    let sample = sample_lines(input, &config)?;
    info!(
        "Sampled {} of {} data lines ({} header lines)",
        sample.samples.len(),
        sample.data_seen,
        sample.headers.len()
    );

    // The output file is only created once the input has been fully consumed
    let digest = if let Some(output_path) = &args.output {
        let file = File::create(output_path).map_err(|source| SampleError::CreateOutput {
            path: output_path.clone(),
            source,
        })?;
        let mut output = BufWriter::new(file);
        let digest = sample
            .emit(&mut output, args.digest)
            .map_err(SampleError::Write)?;
        info!("Written to {}", output_path.display());
        digest
    } else {
        let mut output = BufWriter::new(io::stdout().lock());
        sample
            .emit(&mut output, args.digest)
            .map_err(SampleError::Write)?
    };

    if let (Some(algorithm), Some(checksum)) = (args.digest, digest) {
        eprintln!("{}: {}", algorithm.name(), checksum);
    }

    Ok(())
}

/// Reinterpret a signed seed as the RNG's u64 seed, keeping all bits
fn seed_bits(seed: i64) -> u64 {
    seed as u64
}

/// Open the input path, treating `-` or no path as stdin
fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        None => Ok(Box::new(io::stdin())),
        Some(p) if p == Path::new("-") => Ok(Box::new(io::stdin())),
        Some(p) => {
            let file = File::open(p).map_err(|source| SampleError::OpenInput {
                path: p.to_path_buf(),
                source,
            })?;
            Ok(Box::new(file))
        }
    }
}
