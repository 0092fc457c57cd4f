use clap::{Parser, Subcommand};
use flowdoc::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Inspect and convert workflow documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the nodes, derived edges and diagnostics of a document
    Inspect {
        /// Path to the workflow document JSON file
        path: PathBuf,
    },
    /// Re-serialize a document with every default filled in
    Normalize {
        /// Path to the workflow document JSON file
        path: PathBuf,
        /// Where to write the result; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Convert a JSON array of editor nodes into a document
    ImportVisual {
        /// Path to the JSON file holding the editor nodes
        path: PathBuf,
        /// Node id counter to store alongside the nodes
        #[arg(short, long, default_value_t = 1)]
        counter: u64,
        /// Where to write the result; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Inspect { path } => inspect(&path),
        Command::Normalize { path, output } => {
            let graph = load_graph(&path);
            let document = serialize(&graph.nodes, graph.node_counter);
            write_document(&document, output);
        }
        Command::ImportVisual {
            path,
            counter,
            output,
        } => {
            let text = read_file(&path);
            let nodes: Vec<VisualNode> = serde_json::from_str(&text).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to parse editor nodes: {}", e))
            });
            write_document(&serialize_visual(&nodes, counter), output);
        }
    }
}

fn inspect(path: &Path) {
    let graph = load_graph(path);
    let violations = validate(&graph.nodes);

    println!("--- Nodes ({}) ---", graph.nodes.len());
    println!("{}", GraphFormatter::format_nodes(&graph.nodes));
    println!("\n--- Edges ({}) ---", graph.edges.len());
    println!("{}", GraphFormatter::format_edges(&graph.edges));
    println!("\nNode counter: {}", graph.node_counter);

    if !graph.dangling.is_empty() {
        println!("\n--- Dangling References ({}) ---", graph.dangling.len());
        for reference in &graph.dangling {
            println!("  - {}", reference);
        }
    }
    if !violations.is_empty() {
        println!("\n--- Convention Violations ({}) ---", violations.len());
        for violation in &violations {
            println!("  - {}", violation);
        }
    }
}

fn load_graph(path: &Path) -> LoadedGraph {
    let text = read_file(path);
    deserialize_str(&text)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load document: {}", e)))
}

fn read_file(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read '{}': {}", path.display(), e))
    })
}

fn write_document(document: &Document, output: Option<PathBuf>) {
    match output {
        Some(path) => JsonFileStore::new(&path)
            .save(document)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save document: {}", e))),
        None => {
            let json = document
                .to_json_pretty()
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode document: {}", e)));
            println!("{}", json);
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
