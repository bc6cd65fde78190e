//! # Command Line Interface
//!
//! `dl-neighbors neighbors "A ⊓ ∃r.(B ⊓ C)"` prints the upper neighbors of a
//! concept; `dl-neighbors render` prints its canonical form. Concepts come
//! either from the command line in textual syntax or from a file holding the
//! serialized tree (`.json`, `.yaml`, `.yml`) or textual syntax (any other
//! extension).

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use crate::{
    concept::Concept,
    config::{Config, OutputFormat},
    graph::NeighborGraph,
    logger,
    neighbors::{GeneralizationMode, UpperNeighbors},
    Error, Result,
};

#[derive(Parser, Debug)]
#[command(name = "dl-neighbors", version, about = "Upper neighbors of EL concept expressions", long_about = None)]
pub struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the upper neighbors of a concept
    Neighbors {
        #[command(flatten)]
        source: ConceptSource,

        /// How dropping an existential conjunct combines with generalizing it
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Print the neighbor graph instead of the neighbor list
        #[arg(long)]
        graph: bool,
    },
    /// Print the canonical rendering of a concept
    Render {
        #[command(flatten)]
        source: ConceptSource,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
}

#[derive(Args, Debug)]
struct ConceptSource {
    /// Concept in textual syntax, e.g. "A ⊓ ∃r.(B ⊓ C)"
    expression: Option<String>,

    /// Read the concept from a file instead
    #[arg(short, long, conflicts_with = "expression")]
    input: Option<PathBuf>,
}

impl ConceptSource {
    fn load(&self) -> Result<Concept> {
        match (&self.expression, &self.input) {
            (Some(expression), _) => Ok(expression.parse()?),
            (None, Some(path)) => read_concept(path),
            (None, None) => Err(Error::string(
                "provide a concept expression or --input <FILE>",
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Folded,
    Separate,
}

impl From<ModeArg> for GeneralizationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Folded => Self::Folded,
            ModeArg::Separate => Self::Separate,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
            FormatArg::Yaml => Self::Yaml,
        }
    }
}

/// Reads a concept from `path`, choosing the decoder by file extension.
///
/// # Errors
///
/// Returns an error when the file cannot be read or does not hold a valid
/// concept.
pub fn read_concept(path: &Path) -> Result<Concept> {
    let content = std::fs::read_to_string(path).map_err(|err| Error::read_file(path, err))?;
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase);
    tracing::debug!(path = %path.display(), ?extension, "reading concept");
    match extension.as_deref() {
        Some("json") => Ok(serde_json::from_str(&content)?),
        Some("yaml" | "yml") => Ok(serde_yaml::from_str(&content)?),
        _ => Ok(content.parse()?),
    }
}

#[derive(Serialize)]
struct NeighborReport {
    concept: String,
    mode: GeneralizationMode,
    neighbors: Vec<String>,
}

#[derive(Serialize)]
struct RenderReport<'a> {
    concept: String,
    size: usize,
    depth: usize,
    tree: &'a Concept,
}

fn serialize<T: Serialize>(value: &T, format: OutputFormat) -> Result<Option<String>> {
    match format {
        OutputFormat::Text => Ok(None),
        OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
        OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(value)?.trim_end().to_string())),
    }
}

fn neighbors_output(report: &NeighborReport, format: OutputFormat) -> Result<String> {
    if let Some(serialized) = serialize(report, format)? {
        return Ok(serialized);
    }
    let mut lines = vec![format!("{} {}", "concept:".bold(), report.concept)];
    if report.neighbors.is_empty() {
        lines.push("no upper neighbors found".yellow().to_string());
    } else {
        lines.push(format!("{}", "upper neighbors:".bold()));
        for neighbor in &report.neighbors {
            lines.push(format!("  {}", neighbor.green()));
        }
    }
    Ok(lines.join("\n"))
}

fn graph_output(graph: &NeighborGraph, format: OutputFormat) -> Result<String> {
    if let Some(serialized) = serialize(graph, format)? {
        return Ok(serialized);
    }
    let mut lines = Vec::with_capacity(graph.nodes.len());
    if let Some(original) = graph.original() {
        lines.push(format!(
            "{} @ ({}, {})",
            original.id.bold(),
            original.position.x,
            original.position.y
        ));
    }
    for neighbor in graph.neighbors() {
        lines.push(format!(
            "  -> {} @ ({}, {})",
            neighbor.id.green(),
            neighbor.position.x,
            neighbor.position.y
        ));
    }
    Ok(lines.join("\n"))
}

fn render_output(concept: &Concept, format: OutputFormat) -> Result<String> {
    let report = RenderReport {
        concept: concept.to_string(),
        size: concept.size(),
        depth: concept.depth(),
        tree: concept,
    };
    if let Some(serialized) = serialize(&report, format)? {
        return Ok(serialized);
    }
    Ok(format!(
        "{}\n{} {}, {} {}",
        report.concept,
        "size:".bold(),
        report.size,
        "depth:".bold(),
        report.depth
    ))
}

fn run(cli: &Cli, config: &Config) -> Result<String> {
    match &cli.command {
        Commands::Neighbors {
            source,
            mode,
            format,
            graph,
        } => {
            let concept = source.load()?;
            let engine = UpperNeighbors::new(mode.map_or(config.engine.mode, Into::into));
            let format = format.map_or(config.output.format, Into::into);
            let neighbors = engine.compute(&concept);

            if *graph || config.output.graph {
                graph_output(&NeighborGraph::build(&concept, &neighbors), format)
            } else {
                let report = NeighborReport {
                    concept: concept.to_string(),
                    mode: engine.mode(),
                    neighbors: neighbors.iter().map(ToString::to_string).collect(),
                };
                neighbors_output(&report, format)
            }
        }
        Commands::Render { source, format } => {
            let concept = source.load()?;
            render_output(&concept, format.map_or(config.output.format, Into::into))
        }
    }
}

/// Entry point of the `dl-neighbors` binary.
///
/// # Errors
///
/// Returns an error when the configuration, the logger or the concept input
/// is invalid.
pub fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    logger::init(&config.logger)?;

    let output = run(&cli, &config)?;
    println!("{output}");
    Ok(())
}
