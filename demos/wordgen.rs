//! Draw weighted records from a tab-separated corpus file.
//!
//! Each line is `weight<TAB>field<TAB>field...`; blank lines and lines
//! starting with `#` are skipped.
//!
//! ```text
//! cargo run --example wordgen -- demos/data/names.grig -n 5 --seed 7
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vose::{SharedSource, UniformSource, WeightedList};

/// Print records drawn from a weighted corpus.
#[derive(Parser)]
#[command(name = "wordgen")]
struct Args {
    /// Corpus file, one `weight<TAB>fields...` record per line
    corpus: PathBuf,

    /// Number of records to print
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Seed for a reproducible stream (entropy-seeded otherwise)
    #[arg(long)]
    seed: Option<u64>,

    /// Draw through a mutex-guarded shared generator
    #[arg(long)]
    shared: bool,
}

fn load_corpus(path: &Path) -> Result<WeightedList<Vec<String>>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let mut pairs = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split('\t');
        let raw = fields.next().unwrap_or_default();
        let weight: f64 = match raw.trim().parse() {
            Ok(w) => w,
            Err(e) => {
                warn!(line = lineno + 1, weight = raw, error = %e, "skipping record");
                continue;
            }
        };
        pairs.push((fields.map(str::to_owned).collect::<Vec<_>>(), weight));
    }

    let list = WeightedList::from_pairs(pairs)
        .with_context(|| format!("building sampler for {}", path.display()))?;
    info!(
        path = %path.display(),
        records = list.len(),
        total_weight = list.total_weight(),
        "corpus loaded"
    );
    Ok(list)
}

fn print_draws<S: UniformSource>(list: &WeightedList<Vec<String>>, source: &mut S, count: usize) {
    for _ in 0..count {
        println!("{}", list.sample(source).join("\t"));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let list = load_corpus(&args.corpus)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if args.shared {
        print_draws(&list, &mut SharedSource::new(rng), args.count);
    } else {
        print_draws(&list, &mut rng, args.count);
    }
    Ok(())
}
