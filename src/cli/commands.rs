// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use std::fs;

use crate::application::{clean_use_case::CleanConfig, split_use_case::SplitConfig};
use crate::data::{
    preprocessor::CleanOptions,
    splitter::SplitStrategy,
    tokenizer::TrailingSegment,
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lowercase a text column and strip stopwords, tags and punctuation
    Clean(CleanArgs),

    /// Clean a labelled table and split it into train/test CSV files
    Split(SplitArgs),

    /// Print the sentences of a text, one per line
    Sentences(SentenceArgs),

    /// Print the words of a text, one per line
    Words(WordArgs),

    /// Group the sentences of a text into paragraphs
    Paras(ParaArgs),

    /// Load a GloVe-style embedding file and look up a word
    Embeddings(EmbeddingArgs),
}

// ─── Shared argument groups ───────────────────────────────────────────────────

/// Which optional cleaning stages to skip
#[derive(Args, Debug, Clone, Copy)]
pub struct CleanFlags {
    /// Keep stopwords and angle-bracket fragments
    #[arg(long)]
    pub keep_stopwords: bool,

    /// Keep punctuation characters
    #[arg(long)]
    pub keep_punctuation: bool,
}

impl From<CleanFlags> for CleanOptions {
    fn from(f: CleanFlags) -> Self {
        CleanOptions {
            remove_stopwords:   !f.keep_stopwords,
            remove_punctuation: !f.keep_punctuation,
        }
    }
}

/// Where the text to segment comes from
#[derive(Args, Debug)]
pub struct TextInput {
    /// Text passed directly on the command line
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,

    /// File containing the text
    #[arg(long)]
    pub input: Option<String>,
}

impl TextInput {
    /// Resolve to the text itself
    pub fn read(&self) -> Result<String> {
        match (&self.text, &self.input) {
            (Some(text), _)    => Ok(text.clone()),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("Cannot read text from '{path}'")),
            (None, None)       => bail!("Provide the text with --text or --input"),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum TrailingArg {
    /// Always drop the last segment
    Always,
    /// Drop the last segment only if it is blank
    #[default]
    WhenBlank,
}

impl From<TrailingArg> for TrailingSegment {
    fn from(t: TrailingArg) -> Self {
        match t {
            TrailingArg::Always    => TrailingSegment::Always,
            TrailingArg::WhenBlank => TrailingSegment::WhenBlank,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum StrategyArg {
    /// Threshold random draws at their own percentile
    #[default]
    SamplePercentile,
    /// Exactly percentile% of rows go to training
    Proportional,
}

impl From<StrategyArg> for SplitStrategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::SamplePercentile => SplitStrategy::SamplePercentile,
            StrategyArg::Proportional     => SplitStrategy::Proportional,
        }
    }
}

// ─── clean ────────────────────────────────────────────────────────────────────

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// CSV file with a header row
    #[arg(long)]
    pub input: String,

    /// Column holding the free text
    #[arg(long)]
    pub text_column: String,

    /// Where to write the table with its derived columns
    #[arg(long)]
    pub output: Option<String>,

    #[command(flatten)]
    pub flags: CleanFlags,
}

impl From<CleanArgs> for CleanConfig {
    fn from(a: CleanArgs) -> Self {
        CleanConfig {
            input:       a.input,
            text_column: a.text_column,
            output:      a.output,
            options:     a.flags.into(),
        }
    }
}

// ─── split ────────────────────────────────────────────────────────────────────

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Replay a saved split_config.json instead of using the flags below
    #[arg(long)]
    pub from_config: Option<String>,

    /// CSV file with a header row
    #[arg(long, required_unless_present = "from_config")]
    pub input: Option<String>,

    /// Column holding the free text
    #[arg(long, default_value = "review")]
    pub text_column: String,

    /// Column holding the category label ("positive" → 1)
    #[arg(long, default_value = "sentiment")]
    pub label_column: String,

    /// Training share, 0-100
    #[arg(long, default_value_t = 80.0)]
    pub percentile: f64,

    /// How rows are assigned to training
    #[arg(long, value_enum, default_value_t = StrategyArg::default())]
    pub strategy: StrategyArg,

    /// RNG seed; a random one is drawn and recorded if omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for train.csv, test.csv and the run records
    #[arg(long, default_value = "splits")]
    pub output_dir: String,

    #[command(flatten)]
    pub flags: CleanFlags,
}

impl SplitArgs {
    /// Build the SplitConfig, either from the flags or a saved file
    pub fn into_config(self) -> Result<SplitConfig> {
        use crate::infra::config_store::ConfigStore;

        if let Some(path) = &self.from_config {
            tracing::info!("Replaying split config '{}'", path);
            return ConfigStore::load_from(path);
        }

        Ok(SplitConfig {
            // required_unless_present guarantees this when from_config is absent
            input:        self.input.unwrap_or_default(),
            text_column:  self.text_column,
            label_column: self.label_column,
            output_dir:   self.output_dir,
            options:      self.flags.into(),
            percentile:   self.percentile,
            strategy:     self.strategy.into(),
            seed:         self.seed,
        })
    }
}

// ─── segmentation ─────────────────────────────────────────────────────────────

#[derive(Args, Debug)]
pub struct SentenceArgs {
    #[command(flatten)]
    pub source: TextInput,

    /// What to do with the text after the last sentence boundary
    #[arg(long, value_enum, default_value_t = TrailingArg::default())]
    pub trailing: TrailingArg,
}

#[derive(Args, Debug)]
pub struct WordArgs {
    #[command(flatten)]
    pub source: TextInput,
}

#[derive(Args, Debug)]
pub struct ParaArgs {
    #[command(flatten)]
    pub source: TextInput,

    /// Target number of words per paragraph
    #[arg(long)]
    pub para_len: usize,

    /// What to do with the text after the last sentence boundary
    #[arg(long, value_enum, default_value_t = TrailingArg::default())]
    pub trailing: TrailingArg,
}

// ─── embeddings ───────────────────────────────────────────────────────────────

#[derive(Args, Debug)]
pub struct EmbeddingArgs {
    /// Whitespace-separated embedding file (token first)
    #[arg(long)]
    pub path: String,

    /// Word to look up
    #[arg(long)]
    pub word: Option<String>,
}
