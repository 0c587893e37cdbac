use clap::Parser;
use std::collections::HashSet;

use retro_mcts::logging::setup_logging;
use retro_mcts::{Node, Precursor, RetroError};

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Two-line debug rendering
    Text,
    /// JSON object including derived fields
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "retro-node", about = "Inspect a retrosynthetic search node")]
struct Config {
    /// Precursors to expand, head first (pass `--pending` alone for a solved node)
    #[arg(short = 'p', long, num_args = 0.., value_delimiter = ',')]
    pending: Option<Vec<String>>,

    /// Precursors produced by the last rule application
    #[arg(long, num_args = 0.., value_delimiter = ',')]
    produced: Option<Vec<String>>,

    /// Molecules generated by expanding the current precursor; prints the child node
    #[arg(short = 'e', long, value_delimiter = ',')]
    expand: Option<Vec<String>>,

    /// Molecules treated as building blocks (never expanded) when using `--expand`
    #[arg(short = 'b', long, value_delimiter = ',')]
    building_blocks: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn render(node: &Node, format: &OutputFormat) -> retro_mcts::Result<String> {
    match format {
        OutputFormat::Text => Ok(node.to_string()),
        OutputFormat::Json => node.summary_json(),
    }
}

/// Builds the requested node, expanding it once when `--expand` is given
fn build_node(config: &Config) -> Result<Node, RetroError> {
    let node = Node::try_new(config.pending.as_ref(), config.produced.as_ref())?;
    log::info!("node with {} precursors to expand", node.len());

    match &config.expand {
        Some(products) => {
            let building_blocks: HashSet<Precursor> =
                config.building_blocks.iter().map(Precursor::new).collect();
            node.successor(products, |p| !building_blocks.contains(p))
        }
        None => Ok(node),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logger = setup_logging(&config.log_level)?;

    let node = build_node(&config)?;

    print!("{}", render(&node, &config.format)?);
    if config.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("retro-node").chain(args.iter().copied())).unwrap()
    }

    fn ids(precursors: &[Precursor]) -> Vec<&str> {
        precursors.iter().map(Precursor::as_str).collect()
    }

    #[test]
    fn test_pending_alone_is_solved() {
        let config = parse(&["--pending"]);
        assert_eq!(config.pending, Some(vec![]));

        let node = build_node(&config).unwrap();
        assert!(node.is_solved());
        assert!(node.new_precursors().is_empty());
    }

    #[test]
    fn test_comma_and_repeated_values() {
        let config = parse(&["-p", "M1,M2", "-p", "M3", "--produced", "X,Y"]);
        let node = build_node(&config).unwrap();

        assert_eq!(ids(node.precursors_to_expand()), vec!["M1", "M2", "M3"]);
        assert_eq!(ids(node.new_precursors()), vec!["X", "Y"]);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_pending() {
        let config = parse(&["--produced", "X"]);
        assert_matches!(build_node(&config), Err(RetroError::MissingInput(_)));
    }

    #[test]
    fn test_expand_with_building_blocks() {
        let config = parse(&["-p", "T,M2", "-e", "I1,BB1", "-b", "BB1"]);
        let node = build_node(&config).unwrap();

        assert_eq!(ids(node.precursors_to_expand()), vec!["I1", "M2"]);
        assert_eq!(ids(node.new_precursors()), vec!["I1", "BB1"]);

        let solved = parse(&["--pending", "--expand", "A"]);
        assert_matches!(build_node(&solved), Err(RetroError::AlreadySolved));
    }

    #[test]
    fn test_render_formats() {
        let config = parse(&["-p", "M1,M2", "--produced", "X", "--format", "json"]);
        let node = build_node(&config).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&render(&node, &config.format).unwrap()).unwrap();
        assert_eq!(value["precursors_to_expand"], serde_json::json!(["M1", "M2"]));
        assert_eq!(value["new_precursors"], serde_json::json!(["X"]));
        assert_eq!(value["curr_precursor"], "M1");
        assert_eq!(value["next_precursor"], serde_json::json!(["M2"]));
        assert_eq!(value["len"], 2);
        assert_eq!(value["is_solved"], false);

        let text = render(&node, &OutputFormat::Text).unwrap();
        assert_eq!(text, node.to_string());
    }
}
