use clap::Parser;
use kaisou::interchange::{Connection, ExportedStructure, FlowExport};
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate random flow documents for exercising the resolver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// The number of nodes to generate
    #[arg(long, default_value_t = 12)]
    nodes: usize,

    /// The maximum number of parents wired into each non-root node
    #[arg(long, default_value_t = 2)]
    max_parents: usize,

    /// Inject a back-edge so the generated flow contains a cycle
    #[arg(long, default_value_t = false)]
    cycle: bool,
}

const CATEGORIES: [&str; 4] = ["input", "default", "action", "output"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.nodes == 0 {
        eprintln!("Error: --nodes must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating flow with {} node(s), up to {} parent(s) each...",
        cli.nodes, cli.max_parents
    );

    let document = generate_document(&mut rng, cli.nodes, cli.max_parents, cli.cycle);

    let json_output = document.to_json_pretty()?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved flow document to '{}'",
        cli.output
    );

    Ok(())
}

/// Wires each node to parents drawn from the nodes generated before it, which
/// keeps the document acyclic unless a back-edge is requested.
fn generate_document(
    rng: &mut ThreadRng,
    node_count: usize,
    max_parents: usize,
    inject_cycle: bool,
) -> FlowExport {
    let mut structures: Vec<ExportedStructure> = (0..node_count)
        .map(|index| ExportedStructure {
            id: format!("n{}", index),
            name: format!("Entity {}", index),
            code: format!("E{:03}", index),
            category: CATEGORIES[index % CATEGORIES.len()].to_string(),
            is_active: true,
            description: None,
            content: None,
            level: None,
            connections: Vec::new(),
            children: Vec::new(),
            parent_id: None,
        })
        .collect();

    for child in 1..node_count {
        let parent_count = rng.random_range(1..=max_parents.max(1)).min(child);
        for _ in 0..parent_count {
            let parent = rng.random_range(0..child);
            structures[parent]
                .connections
                .push(Connection::new(format!("n{}", child)));
        }
    }

    if inject_cycle && node_count > 1 {
        let last = node_count - 1;
        structures[last].connections.push(Connection::new("n0"));
        println!("-> Injected back-edge n{} -> n0", last);
    }

    FlowExport { structures }
}
