use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use errata::{
    parse_records, verbalizer_for, BatchRunner, BatchThreads, Classifier, ClassifierConfig,
    ClassifierConfigOverride, Taxonomy,
};

#[derive(Args)]
pub struct BatchArgs {
    /// JSON array or JSON Lines file of records, `-` for stdin
    pub file: PathBuf,

    /// Label set to classify with (full, 2, 3, 4, 5 or 8)
    #[arg(short, long)]
    pub taxonomy: Option<Taxonomy>,

    /// Worker threads, 0 to classify sequentially
    #[arg(long)]
    pub threads: Option<usize>,
}

pub fn run(args: BatchArgs, config: ClassifierConfig) -> Result<()> {
    errata::console::init();

    let config = config.apply(ClassifierConfigOverride {
        taxonomy: args.taxonomy,
        batch_threads: args.threads.map(threads_from_arg),
        ..Default::default()
    });

    let input = read_input(&args.file)?;
    let records = parse_records(&input)
        .with_context(|| format!("failed to parse records from {}", args.file.display()))?;

    let classifier = Classifier::new(verbalizer_for(&config.language)?);
    let report = BatchRunner::from_config(&config).run(&classifier, &records)?;

    for outcome in &report.outcomes {
        println!("{}", serde_json::to_string(&outcome.to_line())?);
    }
    eprint!("{}", errata::console::render_summary(&report.summary));
    Ok(())
}

fn threads_from_arg(threads: usize) -> BatchThreads {
    match threads {
        0 => BatchThreads::None,
        n => BatchThreads::Count(n),
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threads_from_arg() {
        assert_eq!(threads_from_arg(0), BatchThreads::None);
        assert_eq!(threads_from_arg(4), BatchThreads::Count(4));
    }
}
