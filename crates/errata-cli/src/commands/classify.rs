use anyhow::Result;
use clap::Args;
use errata::{
    verbalizer_for, Classification, Classifier, ClassifierConfig, ClassifierConfigOverride,
    ErrorLabel, Problem, Taxonomy,
};
use serde::Serialize;

#[derive(Args)]
#[command(allow_negative_numbers = true)]
pub struct ClassifyArgs {
    pub multiplier: i64,
    pub multiplicand: i64,
    pub correct: i64,
    /// Answer given, -1 when there was none
    pub given: i64,

    /// Label set to classify with (full, 2, 3, 4, 5 or 8)
    #[arg(short, long)]
    pub taxonomy: Option<Taxonomy>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the label only
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Serialize)]
struct ClassifyOutput {
    problem: Problem,
    taxonomy: Taxonomy,
    label: ErrorLabel,
    diagnostic: Option<&'static str>,
    rule: &'static str,
}

pub fn run(args: ClassifyArgs, config: ClassifierConfig) -> Result<()> {
    let config = config.apply(ClassifierConfigOverride {
        taxonomy: args.taxonomy,
        print_diagnostics: args.quiet.then_some(false),
        ..Default::default()
    });

    let problem = Problem::from_raw(args.multiplier, args.multiplicand, args.correct, args.given)?;
    let classifier = Classifier::new(verbalizer_for(&config.language)?);
    let classification = classifier.classify(&problem, config.taxonomy)?;

    if args.json {
        let output = ClassifyOutput {
            problem,
            taxonomy: config.taxonomy,
            label: classification.label,
            diagnostic: classification.diagnostic,
            rule: classification.rule,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        for line in render(&classification, config.print_diagnostics) {
            println!("{line}");
        }
    }
    Ok(())
}

// The diagnostic comes first, as it is what gets said to the child.
fn render(classification: &Classification, print_diagnostics: bool) -> Vec<&'static str> {
    let mut lines = Vec::with_capacity(2);
    if print_diagnostics {
        lines.extend(classification.diagnostic);
    }
    lines.push(classification.label.as_str());
    lines
}
