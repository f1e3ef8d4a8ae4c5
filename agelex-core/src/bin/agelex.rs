//! Command-line age estimator.
//!
//! Scores text against a JSON lexicon and prints the result as JSON.
//!
//! ## Usage
//!
//! ```bash
//! # Score a string
//! agelex --lexicon age.json --text "omg my mom is so annoying lol"
//!
//! # Score files in parallel, one JSON line per file
//! agelex --lexicon age.json posts/*.txt
//!
//! # Read stdin, print the ranked matches
//! cat post.txt | agelex --lexicon age.json --output matches --sort-by lex
//!
//! # British input, nearest whole age
//! agelex --lexicon age.json --translations uk_us.json --locale GB --whole --text "my favourite colour"
//! ```
//!
//! Diagnostics go to stderr. `-v` enables debug output, `-vv` trace;
//! `RUST_LOG` overrides both.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use agelex_core::analyzer::SpellingTable;
use agelex_core::lexicon::DEFAULT_CATEGORY;
use agelex_core::scoring::whole_years;
use agelex_core::{AgePredictor, Lexicon, Options, Prediction};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use serde_json::{json, Value};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "agelex", version, about = "Estimate an author's age from their writing")]
struct Cli {
    /// Lexicon JSON file
    #[arg(short, long)]
    lexicon: PathBuf,

    /// Category to read from a grouped lexicon file
    #[arg(long, default_value = DEFAULT_CATEGORY)]
    category: String,

    /// JSON map of British to American spellings, used with `--locale GB`
    #[arg(long)]
    translations: Option<PathBuf>,

    /// Text to score (otherwise FILES, otherwise stdin)
    #[arg(short, long, conflicts_with = "files")]
    text: Option<String>,

    /// Files to score, one result each
    files: Vec<PathBuf>,

    /// Weighting scheme: freq | binary
    #[arg(long)]
    encoding: Option<String>,

    /// Spelling locale: US | GB
    #[arg(long)]
    locale: Option<String>,

    /// Lowest lexicon weight considered
    #[arg(long, allow_negative_numbers = true)]
    min: Option<f64>,

    /// Highest lexicon weight considered
    #[arg(long, allow_negative_numbers = true)]
    max: Option<f64>,

    /// Comma-separated n-gram sizes; 0 disables
    #[arg(long, value_delimiter = ',')]
    ngrams: Option<Vec<usize>>,

    /// Drop the intercept
    #[arg(long)]
    no_int: bool,

    /// Result view: lex | matches | full
    #[arg(short, long)]
    output: Option<String>,

    /// Decimal places
    #[arg(long)]
    places: Option<u32>,

    /// Match sort key: lex | freq | weight
    #[arg(long)]
    sort_by: Option<String>,

    /// Match sort direction: desc | asc
    #[arg(long)]
    sort_order: Option<String>,

    /// Count n-grams in the word count
    #[arg(long)]
    wc_grams: bool,

    /// Print the score rounded to whole years
    #[arg(long)]
    whole: bool,

    /// More diagnostics (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            encoding: self.encoding.clone(),
            locale: self.locale.clone(),
            min: self.min,
            max: self.max,
            n_grams: self.ngrams.clone(),
            no_int: Some(self.no_int),
            output: self.output.clone(),
            places: self.places,
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order.clone(),
            wc_grams: Some(self.wc_grams),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lexicon = Lexicon::from_path(&cli.lexicon, &cli.category)
        .with_context(|| format!("loading lexicon {}", cli.lexicon.display()))?;

    let translations = match &cli.translations {
        Some(path) => SpellingTable::from_path(path)
            .with_context(|| format!("loading spelling table {}", path.display()))?,
        None => SpellingTable::default(),
    };

    let predictor = AgePredictor::new(&lexicon).with_translator(translations);
    let config = cli.options().resolve();

    if cli.files.is_empty() {
        let text = match &cli.text {
            Some(text) => text.clone(),
            None => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading stdin")?;
                buf
            }
        };

        let result = predictor.predict(&text, &config);
        println!("{}", render(result.as_ref(), cli.whole));
        return Ok(());
    }

    let texts = cli
        .files
        .iter()
        .map(|path| {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let results = predictor.predict_batch(&texts, &config);
    for (path, result) in cli.files.iter().zip(&results) {
        let line = json!({
            "file": path.display().to_string(),
            "result": render(result.as_ref(), cli.whole),
        });
        println!("{line}");
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

fn render(result: Option<&Prediction>, whole: bool) -> Value {
    match result {
        None => Value::Null,
        Some(prediction) if whole => match prediction.score() {
            Some(score) => json!(whole_years(score)),
            None => json!(prediction),
        },
        Some(prediction) => json!(prediction),
    }
}
