use clap::{Parser, Subcommand};
use flujo::prelude::*;
use std::fs;
use std::process::ExitCode;

/// Inspect, validate and simulate chatbot flow files from the terminal.
#[derive(Parser)]
#[command(name = "flujo-cli", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every structural and schema check over a flow file.
    Validate {
        /// Path to a canonical {nodes, edges} JSON file.
        file: String,
    },
    /// Replay a flow against one inbound message and print the trace.
    Simulate {
        /// Path to a canonical {nodes, edges} JSON file.
        file: String,
        /// The inbound message matched against trigger keywords.
        input: String,
    },
    /// Recompute display positions with the layered layout and print the
    /// updated flow JSON.
    Layout {
        /// Path to a canonical {nodes, edges} JSON file.
        file: String,
    },
}

fn load_graph(path: &str) -> Result<FlowGraph, String> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Could not read flow file '{}': {}", path, e))?;
    import_graph(&json).map_err(|e| format!("Could not import flow file '{}': {}", path, e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Validate { file } => run_validate(&file),
        Command::Simulate { file, input } => run_simulate(&file, &input),
        Command::Layout { file } => run_layout(&file),
    };

    match result {
        Ok(code) => code,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn run_validate(file: &str) -> Result<ExitCode, String> {
    let graph = load_graph(file)?;
    let problems = validate_graph(&graph);

    if problems.is_empty() {
        println!(
            "OK: {} nodes, {} edges, no problems",
            graph.nodes.len(),
            graph.edges.len()
        );
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} problem(s) found:", problems.len());
    for problem in &problems {
        println!("  - {}", problem);
    }
    Ok(ExitCode::FAILURE)
}

fn run_simulate(file: &str, input: &str) -> Result<ExitCode, String> {
    let graph = load_graph(file)?;
    for event in simulate(&graph, input) {
        println!("{}", event);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_layout(file: &str) -> Result<ExitCode, String> {
    let graph = load_graph(file)?;
    let positions = LayeredLayout::default().layout(&graph);
    let laid_out = graph.apply_layout(&positions);
    println!("{}", export_graph(&laid_out));
    Ok(ExitCode::SUCCESS)
}
