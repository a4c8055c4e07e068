use clap::{Parser, ValueEnum};
use itertools::Itertools;
use kaisou::prelude::*;
use std::fs;
use std::time::Instant;

/// A CLI tool to resolve hierarchy levels for flow graph documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the input JSON document
    input: String,

    /// Format of the input document
    #[arg(short, long, value_enum, default_value_t = InputFormat::Interchange)]
    format: InputFormat,

    /// Optional path to write the re-exported interchange document to
    #[arg(short, long)]
    export: Option<String>,

    /// Optional path to write a binary snapshot of the resolved flow to
    #[arg(long)]
    snapshot: Option<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum InputFormat {
    /// Raw editor save format: `{ "nodes": [...], "edges": [...] }`
    Raw,
    /// Flattened interchange document: `{ "structures": [...] }`
    Interchange,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("Loading flow from: {}", cli.input);
    let text = fs::read_to_string(&cli.input)?;

    let mut graph = match cli.format {
        InputFormat::Raw => FlowGraph::from_json(&text)?,
        InputFormat::Interchange => {
            let document = FlowExport::from_json(&text)?;
            from_interchange(&document)?
        }
    };
    println!(
        "Loaded {} node(s) and {} edge(s)",
        graph.nodes.len(),
        graph.edges.len()
    );

    let start = Instant::now();
    let report = resolve_with_report(&graph.nodes, &graph.edges);
    let elapsed = start.elapsed();
    graph.apply_levels(&report.levels);

    println!("Resolved levels in {:?}", elapsed);
    if report.dangling_edges > 0 {
        println!("  Skipped {} dangling edge(s)", report.dangling_edges);
    }
    if report.cycles_broken > 0 {
        println!("  Broke {} cycle(s)", report.cycles_broken);
    }

    print_level_table(&graph);

    if let Some(path) = &cli.export {
        let document = to_interchange(&graph);
        fs::write(path, document.to_json_pretty()?)?;
        println!("Wrote interchange document to '{}'", path);
    }

    if let Some(path) = &cli.snapshot {
        FlowSnapshot::new(graph.clone(), report.levels.clone()).save(path)?;
        println!("Wrote binary snapshot to '{}'", path);
    }

    Ok(())
}

/// Prints nodes grouped by level, roots first.
fn print_level_table(graph: &FlowGraph) {
    let by_level = graph
        .nodes
        .iter()
        .sorted_by(|a, b| {
            a.data
                .level
                .cmp(&b.data.level)
                .then_with(|| a.id.cmp(&b.id))
        })
        .chunk_by(|node| node.data.level);

    for (level, nodes) in &by_level {
        println!("Level {}:", level);
        for node in nodes {
            println!(
                "  [{}] {} ({})",
                node.display_code(),
                node.data.label,
                graph.node_path(&node.id)
            );
        }
    }
}
