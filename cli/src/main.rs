use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use conductor_core::{InitSeed, TaskUpdate, ToolRegistry, config, register_conductor_tools};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod tracks;
mod wizard;

const LOG_ENV: &str = "CONDUCTOR_LOG";

#[derive(Parser)]
#[command(name = "conductor")]
#[command(about = "conductor - Project context and track planning", long_about = None)]
struct Cli {
    /// Project directory containing the conductor workspace
    #[arg(long, global = true, default_value = ".")]
    project: PathBuf,

    /// Log store activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the conductor directory and its context files
    Init {
        #[arg(long)]
        product: Option<String>,
        #[arg(long)]
        tech_stack: Option<String>,
        #[arg(long)]
        workflow: Option<String>,
        /// Prompt for context and settings
        #[arg(short, long)]
        interactive: bool,
    },
    /// Create a new track
    New { id: String, title: String },
    /// Print all context files
    Context,
    /// Print the plan of a track
    Plan { id: String },
    /// Mark a task in a track's plan as completed
    Done { id: String, task: String },
    /// List tracks
    Tracks,
    /// Print the tool specs exposed to host runtimes
    Tools,
    /// Invoke a tool by name with JSON arguments
    Call {
        name: String,
        #[arg(default_value = "{}")]
        args: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let project = cli.project;
    let config = config::load_config(&project)?;
    let store = config.open_store(&project);
    tracing::debug!(
        project = %project.display(),
        root = %store.root().display(),
        "Loaded config"
    );

    match cli.command {
        Commands::Init {
            product,
            tech_stack,
            workflow,
            interactive,
        } => {
            let (seed, store) = if interactive {
                let (seed, settings) = wizard::run_wizard(&config)?;
                let store = match settings {
                    Some(settings) => {
                        config::save_config(&project, &settings)?;
                        println!(
                            "Config saved to {}",
                            config::get_config_path(&project).display()
                        );
                        settings.open_store(&project)
                    }
                    None => store,
                };
                (seed, store)
            } else {
                let seed = InitSeed {
                    product,
                    tech_stack,
                    workflow,
                };
                (seed, store)
            };

            let report = store.initialize(&seed)?;
            wizard::print_report(&report, store.root());
        }
        Commands::New { id, title } => {
            let path = store.create_track(&id, &title)?;
            println!("Track {} created at {}", id, path.display());
        }
        Commands::Context => {
            print!("{}", store.get_context()?);
        }
        Commands::Plan { id } => {
            println!("{}", store.read_plan(&id)?);
        }
        Commands::Done { id, task } => match store.update_task(&id, &task)? {
            TaskUpdate::Completed { count } => {
                println!("Task \"{}\" marked as completed in track {}.", task, id);
                if count > 1 {
                    println!("({} matching lines updated)", count);
                }
            }
            TaskUpdate::Unchanged => {
                println!("Task \"{}\" not found or already completed.", task);
            }
        },
        Commands::Tracks => tracks::print_tracks(&store)?,
        Commands::Tools => {
            let registry = ToolRegistry::new();
            register_conductor_tools(&registry, Arc::new(store));
            println!("{}", serde_json::to_string_pretty(&registry.get_specs())?);
        }
        Commands::Call { name, args } => {
            let args: serde_json::Value = serde_json::from_str(&args)
                .with_context(|| format!("Invalid JSON arguments for {}", name))?;

            let registry = ToolRegistry::new();
            register_conductor_tools(&registry, Arc::new(store));

            let result = registry.execute(&name, args).await;
            if !result.success {
                anyhow::bail!("{}", result.text());
            }
            print!("{}", result.output);
            if !result.output.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}
