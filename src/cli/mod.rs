// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All processing is delegated to Layer 2 (application).
//
// Commands:
//   clean       — clean one text column of a CSV table
//   split       — clean + binarise + train/test split a CSV table
//   sentences   — sentence tokenisation of a text
//   words       — word tokenisation of a text
//   paras       — paragraph chunking of a text
//   embeddings  — load an embedding file, look up a word
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{
    CleanArgs, Commands, EmbeddingArgs, ParaArgs, SentenceArgs, SplitArgs, WordArgs,
};

#[derive(Parser, Debug)]
#[command(
    name = "text-preprocess",
    version,
    about = "Clean, split, tokenise and chunk text data for NLP classification."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes and prints.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Clean(args)      => run_clean(args),
            Commands::Split(args)      => run_split(args),
            Commands::Sentences(args)  => run_sentences(args),
            Commands::Words(args)      => run_words(args),
            Commands::Paras(args)      => run_paras(args),
            Commands::Embeddings(args) => run_embeddings(args),
        }
    }
}

fn run_clean(args: CleanArgs) -> Result<()> {
    use crate::application::clean_use_case::CleanUseCase;

    let print_rows = args.output.is_none();
    let cleaned    = CleanUseCase::new(args.into()).execute()?;

    // Without --output the cleaned text goes to stdout
    if print_rows {
        for line in &cleaned.clean {
            println!("{line}");
        }
    }
    Ok(())
}

fn run_split(args: SplitArgs) -> Result<()> {
    use crate::application::split_use_case::SplitUseCase;

    let config = args.into_config()?;
    tracing::info!("Splitting '{}' into '{}'", config.input, config.output_dir);

    let report = SplitUseCase::new(config).execute()?;

    println!(
        "Train: {} rows ({} positive), test: {} rows ({} positive), {:.1}% train, seed {}",
        report.train,
        report.train_positive,
        report.test,
        report.test_positive,
        report.train_fraction() * 100.0,
        report.seed,
    );
    Ok(())
}

fn run_sentences(args: SentenceArgs) -> Result<()> {
    use crate::application::segment_use_case::SegmentUseCase;

    let text = args.source.read()?;
    for sentence in SegmentUseCase::new(args.trailing.into()).sentences(&text)? {
        println!("{sentence}");
    }
    Ok(())
}

fn run_words(args: WordArgs) -> Result<()> {
    use crate::application::segment_use_case::SegmentUseCase;

    let text = args.source.read()?;
    for word in SegmentUseCase::new(Default::default()).words(&text) {
        println!("{word}");
    }
    Ok(())
}

fn run_paras(args: ParaArgs) -> Result<()> {
    use crate::application::segment_use_case::SegmentUseCase;

    let text       = args.source.read()?;
    let paragraphs = SegmentUseCase::new(args.trailing.into()).paragraphs(&text, args.para_len)?;

    // Blank line between paragraphs
    println!("{}", paragraphs.join("\n\n"));
    Ok(())
}

fn run_embeddings(args: EmbeddingArgs) -> Result<()> {
    use crate::application::embed_use_case::EmbedUseCase;

    let summary = EmbedUseCase::new(args.path).summarize(args.word.as_deref())?;

    match summary.dimension {
        Some(dim) => println!("{} words loaded, dimension {}", summary.words, dim),
        None      => println!("{} words loaded", summary.words),
    }

    match (&args.word, &summary.vector) {
        (Some(word), Some(vector)) => {
            let values: Vec<String> = vector.iter().map(f64::to_string).collect();
            println!("{word}: {}", values.join(" "));
        }
        (Some(word), None) if !summary.found => println!("'{word}' not found"),
        _ => {}
    }
    Ok(())
}
