//! diffable-hebrew CLI: Hebrew text → diff-friendly short codes.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::Result;

use diffable_hebrew::atomic::AtomicWriter;
use diffable_hebrew::config::Config;
use diffable_hebrew::error::{ConfigError, DiffableError};
use diffable_hebrew::resolve::{Resolver, UnicodeNames};
use diffable_hebrew::table::ShortCodeTable;
use diffable_hebrew::text::{Normalization, Transliteration};

#[derive(Parser)]
#[command(
    name = "diffable-hebrew",
    version,
    about = "Diff-friendly short codes for pointed and accented Hebrew text"
)]
struct Cli {
    /// TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a UTF-8 text file into a JSON list of lines of word tokens.
    Convert {
        /// Input text file.
        input: PathBuf,
        /// Output JSON file (written atomically).
        output: PathBuf,
        /// Also write a code point → short code/name legend to this file.
        #[arg(long)]
        legend: Option<PathBuf>,
        /// Unicode normalization applied before tokenizing.
        #[arg(long, value_enum)]
        normalize: Option<Normalization>,
        /// Spaces per JSON nesting level.
        #[arg(long)]
        indent: Option<usize>,
    },

    /// Print the curated short-code table.
    Codes,

    /// Print the short name of each character of TEXT.
    Name {
        text: String,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;
    let table = ShortCodeTable::standard()?;
    let resolver = Resolver::new(table);

    match cli.command {
        Commands::Convert {
            input,
            output,
            legend,
            normalize,
            indent,
        } => {
            let output_config = config.output.merged(normalize, indent, legend);

            let text = std::fs::read_to_string(&input).map_err(|source| {
                DiffableError::from(ConfigError::Input {
                    path: input.clone(),
                    source,
                })
            })?;
            let text = output_config.normalization.apply(&text);
            let result = Transliteration::from_text(&resolver, &text);
            tracing::info!(
                input = %input.display(),
                lines = result.lines.len(),
                words = result.word_count(),
                distinct_chars = result.legend.len(),
                "transliterated"
            );

            let writer = AtomicWriter::new(config.retry.to_policy());
            writer.write_json(&output, &result.lines, output_config.indent)?;
            tracing::info!(output = %output.display(), "wrote word tokens");

            if let Some(legend) = &output_config.legend {
                writer.write_json(legend, &result.legend, output_config.indent.max(1))?;
                tracing::info!(legend = %legend.display(), "wrote legend");
            }
        }

        Commands::Codes => {
            for &(c, code) in table.entries() {
                let name = describe_name(&resolver, c);
                println!("U+{:04X}\t{code}\t{name}", c as u32);
            }
        }

        Commands::Name { text } => {
            for c in text.chars() {
                println!(
                    "U+{:04X}\t{}\t{}",
                    c as u32,
                    resolver.resolve(c),
                    describe_name(&resolver, c)
                );
            }
        }
    }

    Ok(())
}

fn describe_name(resolver: &Resolver<'_, UnicodeNames>, c: char) -> String {
    resolver.describe(c).name.unwrap_or_else(|| "-".to_string())
}
