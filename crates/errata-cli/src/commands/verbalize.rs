use anyhow::Result;
use clap::Args;
use errata::variation::{has_variation, variation_of};
use errata::{verbalizer_for, ClassifierConfig, Verbalizer};

#[derive(Args)]
pub struct VerbalizeArgs {
    pub number: u64,
}

pub fn run(args: VerbalizeArgs, config: ClassifierConfig) -> Result<()> {
    let verbalizer = verbalizer_for(&config.language)?;
    println!("{}", verbalizer.verbalize(args.number)?);
    if has_variation(args.number) {
        println!("{}", variation_of(&verbalizer, args.number)?);
    }
    Ok(())
}
