//! Timed bulk-load runs over a real dataset file: fill a chosen trie
//! variant, then re-read the dataset and look every key up again.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::info;

use radix_dict::loader::{load_dataset, visit_records, DatasetFormat, LoadError};
use radix_dict::{CompressedTrie, Dictionary, SimpleTrie};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    Simple,
    Compressed,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// One word per line.
    WordList,
    /// `id,text` rows with a header line.
    KeyedCsv,
}

impl From<Format> for DatasetFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::WordList => DatasetFormat::WordList,
            Format::KeyedCsv => DatasetFormat::KeyedCsv,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Load a dataset into a trie dictionary and time the basic operations")]
struct Args {
    /// Dataset file to load.
    dataset: PathBuf,

    #[arg(long, value_enum, default_value_t = Variant::Compressed)]
    variant: Variant,

    #[arg(long, value_enum, default_value_t = Format::WordList)]
    format: Format,

    /// Maximum number of records to load.
    #[arg(long, default_value_t = u64::MAX)]
    limit: u64,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let result = match args.variant {
        Variant::Simple => run(&args, SimpleTrie::new()),
        Variant::Compressed => run(&args, CompressedTrie::new()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dictbench: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run<D: Dictionary<u64>>(args: &Args, mut dict: D) -> Result<(), LoadError> {
    info!(
        "dataset {}, variant {:?}, format {:?}",
        args.dataset.display(),
        args.variant,
        args.format
    );
    let format = DatasetFormat::from(args.format);

    let start = Instant::now();
    let loaded = load_dataset(&args.dataset, format, args.limit, &mut dict)?;
    println!(
        "put {} records in {:?} ({} words, {} nodes)",
        loaded,
        start.elapsed(),
        dict.size(),
        dict.node_count()
    );

    let start = Instant::now();
    let mut missing = 0u64;
    let checked = visit_records(&args.dataset, format, args.limit, |key, _| {
        if dict.get(key)?.is_none() {
            missing += 1;
        }
        Ok(())
    })?;
    println!(
        "got {} keys in {:?} ({} unresolved)",
        checked,
        start.elapsed(),
        missing
    );

    Ok(())
}
