use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use headnav_types::config::{apply_env_overrides, load_config, load_config_from_path};
use headnav_types::{HeaderConfig, StyleCatalog, SubStyleMap};

mod replay;

#[derive(Debug, Parser)]
#[command(name = "headnav", about = "Simulate the header navigation style controller", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the style catalog and the sub-navigation mapping
    Styles {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay a scripted sequence of steps against an in-memory page
    Replay(ReplayArgs),
}

#[derive(Debug, Args)]
struct ReplayArgs {
    /// Path to the YAML/JSON script
    #[arg(long, short = 's')]
    script: PathBuf,
    /// Header config file; defaults to the user config path
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
    /// Sub-panel identifiers to build on the page
    #[arg(long, value_delimiter = ',', default_value = "1,2,3")]
    panels: Vec<String>,
    /// Initial nav style, overriding config and environment
    #[arg(long)]
    nav_style: Option<usize>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Styles { json } => print_styles(json),
        Command::Replay(args) => run_replay_cmd(args),
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn print_styles(json: bool) -> Result<()> {
    let catalog = StyleCatalog::standard();
    let sub_styles = SubStyleMap::standard();

    if json {
        let styles: Vec<_> = catalog
            .iter()
            .map(|(index, definition)| {
                serde_json::json!({
                    "index": index,
                    "className": definition.class_name,
                    "label": definition.label,
                    "description": definition.description,
                    "subStyle": sub_styles.get(index),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&styles)?);
        return Ok(());
    }

    for (index, definition) in catalog.iter() {
        let sub = sub_styles
            .get(index)
            .and_then(|sub| catalog.class_name(sub).map(|name| format!("  -> {sub} {name}")))
            .unwrap_or_default();
        println!("{index:>2}  {:<24} {}{sub}", definition.class_name, definition.label);
    }
    Ok(())
}

fn run_replay_cmd(args: ReplayArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            let file_config =
                load_config_from_path(path).with_context(|| format!("failed to load config {}", path.display()))?;
            apply_env_overrides(file_config)?
        }
        None => load_config().context("failed to load header config")?,
    };
    if let Some(nav_style) = args.nav_style {
        config = config.merge(HeaderConfig::default().with_nav_style(nav_style));
    }

    let script = replay::load_script(&args.script)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    replay::run_replay(config, &args.panels, &script, &mut out)?;
    Ok(())
}
