//! Hartman CLI
//!
//! Thin command-line consumer of the scoring engine:
//! - Scoring one world (`score`) or a whole battery (`battery`)
//! - Relating External and Internal worlds (`relate`)
//! - Translating quick-test responses (`map`, `explain`)
//! - Inspecting the axiogram catalog (`catalog`)
//!
//! Results are printed as JSON on stdout; logs go to stderr.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use hartman_axiology::{Catalog, World};
use hartman_engine::{Engine, EngineConfig, ResponseFormat, WorldScore};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

mod input;
mod summary;

#[derive(Parser)]
#[command(name = "hartman")]
#[command(author, version, about = "Hartman axiological profile scoring")]
struct Cli {
    /// Engine configuration (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// World-specific axiogram texts (JSON)
    #[arg(long, global = true)]
    texts: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one world's 18 responses.
    Score {
        #[arg(long)]
        world: World,
        #[arg(long, default_value = "standard")]
        format: ResponseFormat,
        /// Print a coloured summary instead of JSON
        #[arg(long)]
        summary: bool,
        /// Comma- or whitespace-separated ranks
        responses: String,
    },

    /// Relate External and Internal worlds, with the formula cross-check.
    Relate {
        #[arg(long)]
        external: String,
        #[arg(long)]
        internal: String,
        #[arg(long)]
        sexual: Option<String>,
        #[arg(long, default_value = "standard")]
        format: ResponseFormat,
    },

    /// Translate quick-test responses into the standard format.
    Map { responses: String },

    /// Score a flat battery of at least 36 responses.
    Battery {
        #[arg(long, default_value = "standard")]
        format: ResponseFormat,
        /// JSON file (`-` for stdin)
        file: PathBuf,
    },

    /// Dimension-score valuations of a quick-test External/Internal pair.
    Explain {
        #[arg(long)]
        external: String,
        #[arg(long)]
        internal: String,
    },

    /// Print catalog records.
    Catalog {
        #[arg(long)]
        world: Option<World>,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn build_engine(config: Option<&Path>, texts: Option<&Path>) -> Result<Engine> {
    let config = match config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    let catalog = match texts {
        Some(path) => {
            let text = input::read_source(path)?;
            Catalog::from_texts_json(&text).with_context(|| format!("invalid texts in {}", path.display()))?
        }
        None => Catalog::builtin(),
    };
    tracing::debug!(?config, custom_texts = texts.is_some(), "engine ready");
    Ok(Engine::new(Arc::new(catalog), config))
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn score_arg(engine: &Engine, world: World, format: ResponseFormat, text: &str) -> Result<WorldScore> {
    let values = input::parse_ranks(text)?;
    let responses = format
        .read(&values)
        .with_context(|| format!("invalid {world} responses"))?;
    Ok(engine.score(world, responses)?)
}

fn run(cli: Cli) -> Result<()> {
    let engine = build_engine(cli.config.as_deref(), cli.texts.as_deref())?;
    let pretty = cli.pretty;

    match cli.command {
        Commands::Score {
            world,
            format,
            summary,
            responses,
        } => {
            let score = score_arg(&engine, world, format, &responses)?;
            if summary {
                summary::print_world(&score);
            } else {
                emit(&score, pretty)?;
            }
        }
        Commands::Relate {
            external,
            internal,
            sexual,
            format,
        } => {
            let external = score_arg(&engine, World::External, format, &external)?;
            let internal = score_arg(&engine, World::Internal, format, &internal)?;
            let sexual = sexual
                .map(|text| score_arg(&engine, World::Sexual, format, &text))
                .transpose()?;
            let relation = engine.relate_worlds(&external, &internal)?;
            let warnings = engine.formula_warnings(&external, &internal, sexual.as_ref());
            emit(
                &json!({
                    "relation": relation,
                    "formula_warnings": warnings.positions(),
                }),
                pretty,
            )?;
        }
        Commands::Map { responses } => {
            let values = input::parse_ranks(&responses)?;
            let mapped = hartman_engine::map_alternate_responses(&values)?;
            emit(&mapped, pretty)?;
        }
        Commands::Battery { format, file } => {
            let text = input::read_source(&file)?;
            let values = input::parse_battery(&text)?;
            let battery = engine.score_battery(&values, format)?;
            emit(&battery, pretty)?;
        }
        Commands::Explain { external, internal } => {
            let external = input::parse_ranks(&external)?;
            let internal = input::parse_ranks(&internal)?;
            let explanations = engine.quick_test_explanations(&external, &internal)?;
            emit(&explanations, pretty)?;
        }
        Commands::Catalog { world } => {
            let worlds: Vec<World> = match world {
                Some(world) => vec![world],
                None => World::ALL.to_vec(),
            };
            let records: Vec<_> = worlds
                .into_iter()
                .map(|world| {
                    json!({
                        "world": world,
                        "definition": world.definition(),
                        "axiograms": engine.catalog().axiograms(world),
                    })
                })
                .collect();
            emit(&records, pretty)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
