use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use npmgraph::config::Config;
use npmgraph::graph::{DependencyGraph, GraphStyle};
use npmgraph::parser::{collect_dependencies, locate_manifest, parse_file};
use npmgraph::render::{open_viewer, render_image, DotRenderer};

#[derive(Parser)]
#[command(name = "npmgraph")]
#[command(version)]
#[command(about = "Render a visual graph of an npm project's direct dependencies", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Output filename stem (extension is added from --format)
    #[arg(short, long, default_value = "dependency_graph")]
    output: String,

    /// Graphviz output format (png, svg, ...)
    #[arg(short, long, default_value = "png")]
    format: String,

    /// Edge layout: "complete" connects every pair of packages,
    /// "star" draws an edge from the project root to each package
    #[arg(short, long, default_value_t = GraphStyle::Complete)]
    style: GraphStyle,

    /// Skip opening the rendered image in the default viewer
    #[arg(long)]
    no_view: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_file(&cli.config)
        .with_context(|| format!("Could not load configuration from {}", cli.config.display()))?;
    let project_path = config.project_path();

    println!("Reading manifest from: {}", project_path.display());
    let manifest_path = locate_manifest(&project_path)?;
    let pkg = parse_file(&manifest_path)?;

    let deps = collect_dependencies(&pkg);
    println!(
        "Collected {} dependencies for {}. Building graph...",
        deps.len(),
        pkg.display_name()
    );

    let graph = match cli.style {
        GraphStyle::Complete => DependencyGraph::complete(&deps),
        GraphStyle::Star => DependencyGraph::star(
            pkg.display_name(),
            pkg.version.as_deref().unwrap_or("0.0.0"),
            &deps,
        ),
    };

    let dot_path = PathBuf::from(format!("{}.dot", cli.output));
    let dot_file = File::create(&dot_path)
        .with_context(|| format!("Could not create {}", dot_path.display()))?;
    let mut writer = BufWriter::new(dot_file);
    DotRenderer::new().render(&graph, &mut writer)?;
    writer.flush()?;

    let image_path = render_image(&dot_path, &cli.output, &cli.format)?;
    println!("Graph written to: {}", image_path.display());

    if !cli.no_view {
        if let Err(e) = open_viewer(&image_path) {
            eprintln!("Could not open image viewer: {}", e);
        }
    }

    Ok(())
}
