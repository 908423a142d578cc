use std::{
    io::Read,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{HttpPosetService, RawInput, SessionController, TracingNotificationSink};
use shared::domain::{DrawingMethod, InputMode};
use url::Url;

mod config;

#[derive(Parser, Debug)]
#[command(name = "atg", about = "Explore adjacent transposition graphs and poset covers")]
struct Args {
    /// Base URL of the computation service; overrides client.toml and env.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw the graph for the given input.
    Draw {
        /// "linear-orders" or "poset".
        #[arg(long, default_value = "linear-orders")]
        mode: InputMode,
        /// Declared linear order length; synced from the input when omitted.
        #[arg(long)]
        size: Option<usize>,
        #[arg(long, default_value = "Default")]
        method: DrawingMethod,
        /// Input file with one line per item; stdin when omitted.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Write the graph document here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Solve for an optimal k-poset cover of the given linear orders.
    Solve {
        #[arg(long, default_value_t = 2)]
        k: usize,
        #[arg(long)]
        size: Option<usize>,
        #[arg(long, default_value = "Default")]
        method: DrawingMethod,
        #[arg(long)]
        input: Option<PathBuf>,
        /// Write each solved poset's graph document into this directory.
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

fn read_input_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file '{}'", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read input from stdin")?;
            Ok(text)
        }
    }
}

fn prepare_input(mode: InputMode, size: Option<usize>, text: String) -> Result<RawInput> {
    let mut input = RawInput::default();
    input.set_mode(mode);
    input.set_text(text);
    match size {
        Some(size) => input.set_size(size),
        None => input.sync_size(),
    }
    if let Some(message) = input.validate().message() {
        bail!("invalid input: {message}");
    }
    Ok(input)
}

fn write_graph(graph: &shared::protocol::GraphPayload, out: Option<&Path>) -> Result<()> {
    let document = serde_json::to_string_pretty(&graph.0).context("serialize graph document")?;
    match out {
        Some(path) => std::fs::write(path, document)
            .with_context(|| format!("failed to write '{}'", path.display())),
        None => {
            println!("{document}");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(url) = args.server_url {
        settings.server_url = config::normalize_server_url(&url);
    }
    let base_url = Url::parse(&settings.server_url)
        .with_context(|| format!("invalid server url '{}'", settings.server_url))?;

    let controller = SessionController::new(
        Arc::new(HttpPosetService::new(base_url)),
        Arc::new(TracingNotificationSink),
    );

    match args.command {
        Command::Draw {
            mode,
            size,
            method,
            input,
            out,
        } => {
            let text = read_input_text(input.as_deref())?;
            let input = prepare_input(mode, size, text)?;
            let draw_input = input.draw_input().map_err(|message| anyhow!(message))?;

            controller.draw(input.size(), method, draw_input).await?;

            let state = controller.snapshot().await;
            let graph = state
                .primary_graph
                .ok_or_else(|| anyhow!("service returned no graph"))?;
            write_graph(&graph, out.as_deref())?;
        }
        Command::Solve {
            k,
            size,
            method,
            input,
            out_dir,
        } => {
            let text = read_input_text(input.as_deref())?;
            let input = prepare_input(InputMode::LinearOrders, size, text)?;

            controller.solve(input.size(), method, k, input.upsilon()).await?;

            let state = controller.snapshot().await;
            if state.results.is_empty() {
                println!("No result found.");
                return Ok(());
            }
            for result in &state.results {
                println!("{}", result.name);
                let relations: Vec<String> =
                    result.relations.iter().map(ToString::to_string).collect();
                println!("  cover relations: {}", relations.join("  "));
                println!("  linear extensions:");
                for extension in &result.linear_extensions {
                    println!("    {extension}");
                }
                if let Some(dir) = &out_dir {
                    std::fs::create_dir_all(dir)
                        .with_context(|| format!("failed to create '{}'", dir.display()))?;
                    let path = dir.join(format!("{}.json", result.name.to_lowercase()));
                    write_graph(&result.graph_data, Some(&path))?;
                }
            }
        }
    }

    Ok(())
}
