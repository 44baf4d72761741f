mod config;
mod feed;
mod render;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use config::Config;
use flock_core::{SearchModel, sort::NodeOrder};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file containing the result batches delivered by each provider
    input: PathBuf,

    /// Config file to read grouping and provider order from
    #[arg(long, default_value = Config::FILENAME)]
    config: PathBuf,

    /// Select a node by the path of display texts leading to it, separated by
    /// '/', e.g. "Library/Radiohead". May be given more than once.
    #[arg(long)]
    select: Vec<String>,

    /// Write the selected results to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("flock=info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load(&args.config);

    let input: flock_json_types::Input = serde_json::from_str(
        &std::fs::read_to_string(&args.input)
            .with_context(|| format!("Failed to read {:?}", args.input))?,
    )
    .with_context(|| format!("Failed to parse {:?}", args.input))?;

    let mut model = SearchModel::new(config.search.clone());
    let summary = feed::feed(&mut model, input).await;
    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        nodes = model.tree().len(),
        "built search tree"
    );

    if args.select.is_empty() {
        let order = config.general.sorted.then(NodeOrder::new);
        let options = render::PrintOptions {
            order: order.as_ref(),
            show_durations: config.general.show_durations,
        };
        render::print_tree(model.tree(), &options, &mut std::io::stdout().lock())?;
        return Ok(());
    }

    let mut selection = vec![];
    for path in &args.select {
        let segments: Vec<&str> = path.split('/').collect();
        match model.tree().find_path(segments.as_slice()) {
            Some(id) => selection.push(id),
            None => tracing::warn!("no node at {path:?}, skipping"),
        }
    }

    let payload = serde_json::to_string_pretty(&model.load(selection, &render::JsonLoader))?;
    match &args.output {
        Some(output_path) => std::fs::write(output_path, payload)
            .with_context(|| format!("Failed to write to {output_path:?}"))?,
        None => println!("{payload}"),
    }

    Ok(())
}
