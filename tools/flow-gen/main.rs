use clap::Parser;
use flowdoc::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

const STEP_NAMES: [&str; 6] = ["fetch", "parse", "summarize", "review", "publish", "notify"];
const TOOLS: [&str; 4] = ["search", "shell", "http", "noop"];
const COLUMNS: u64 = 5;
const SPACING: f64 = 260.0;

/// A CLI tool to generate random workflow documents for testing editors
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// Number of nodes to generate, including the START node
    #[arg(short, long, default_value_t = 12)]
    nodes: u64,

    /// Share of non-START nodes that become CONDITION nodes
    #[arg(long, default_value_t = 0.25)]
    condition_ratio: f64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Add validation to ensure the ratio is a probability
    if !(0.0..=1.0).contains(&cli.condition_ratio) {
        eprintln!(
            "Error: --condition-ratio ({}) must be between 0 and 1",
            cli.condition_ratio
        );
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!(
        "Generating workflow with {} nodes (condition ratio {})...",
        cli.nodes, cli.condition_ratio
    );

    let session = generate_session(&mut rng, cli.nodes, cli.condition_ratio)?;
    let violations = validate(session.nodes());
    if !violations.is_empty() {
        println!("Generated graph has {} convention violations", violations.len());
    }

    JsonFileStore::new(&cli.output).save(&session.to_document())?;

    println!(
        "Successfully generated {} nodes and {} edges and saved them to '{}'",
        session.nodes().len(),
        session.edges().len(),
        cli.output
    );

    Ok(())
}

fn generate_session(rng: &mut StdRng, count: u64, condition_ratio: f64) -> Result<EditorSession> {
    let mut session = EditorSession::new();
    let mut ids = Vec::new();

    for index in 0..count {
        let position = Position::new(
            (index % COLUMNS) as f64 * SPACING,
            (index / COLUMNS) as f64 * SPACING,
        );
        let kind = if index == 0 {
            NodeKind::Start
        } else if rng.random_bool(condition_ratio) {
            NodeKind::Condition
        } else {
            random_kind(rng)
        };

        let id = session.add_node(kind, position)?.id.clone();
        if let Some(node) = session.node_mut(&id) {
            fill_fields(rng, node);
        }
        ids.push(id);
    }

    // Successors always point forward so the generated graph stays acyclic.
    for (index, id) in ids.iter().enumerate() {
        let later = &ids[index + 1..];
        if later.is_empty() {
            break;
        }
        let is_condition = session.node(id).is_some_and(|n| n.kind.is_branching());

        if is_condition {
            let on_true = &later[rng.random_range(0..later.len())];
            let on_false = &later[rng.random_range(0..later.len())];
            session.connect(id, on_true, Handle::True)?;
            session.connect(id, on_false, Handle::False)?;
        } else {
            session.connect(id, &later[0], Handle::Plain)?;
            if later.len() > 1 && rng.random_bool(0.2) {
                let extra = &later[rng.random_range(1..later.len())];
                session.connect(id, extra, Handle::Plain)?;
            }
        }
    }

    Ok(session)
}

fn random_kind(rng: &mut StdRng) -> NodeKind {
    match rng.random_range(0..3) {
        0 => NodeKind::Step,
        1 => NodeKind::Tool,
        _ => NodeKind::Info,
    }
}

fn fill_fields(rng: &mut StdRng, node: &mut NodeRecord) {
    let name = STEP_NAMES[rng.random_range(0..STEP_NAMES.len())];
    match node.kind {
        NodeKind::Start => {}
        NodeKind::Step => {
            node.name = format!("{} {}", name, node.id);
            node.tool = TOOLS[rng.random_range(0..TOOLS.len())].to_string();
        }
        NodeKind::Condition => {
            node.name = format!("{} ok?", name);
        }
        NodeKind::Info => {
            node.name = format!("ask {}", node.id);
            node.info = format!("What should '{}' use?", name);
        }
        NodeKind::Tool => {
            node.description = format!("runs {}", name);
        }
    }
}
