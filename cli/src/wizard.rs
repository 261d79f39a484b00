use anyhow::{Context, Result};
use conductor_core::store::InitReport;
use conductor_core::{Config, InitSeed};
use console::style;
use dialoguer::{Confirm, Input};
use std::path::{Path, PathBuf};

const TOTAL_STEPS: usize = 4;

fn print_step(step: usize, title: &str) {
    println!();
    println!(
        "{}",
        style(format!("[{}/{}] {}", step, TOTAL_STEPS, title))
            .cyan()
            .bold()
    );
    println!();
}

fn ask_context(prompt: &str) -> Result<Option<String>> {
    let text: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("Failed to read {}", prompt.to_lowercase()))?;

    let text = text.trim();
    Ok((!text.is_empty()).then(|| text.to_string()))
}

fn ask_settings(current: &Config) -> Result<Option<Config>> {
    let customize = Confirm::new()
        .with_prompt("Save a .conductor.toml with custom settings?")
        .default(false)
        .interact()
        .context("Failed to read confirmation")?;

    if !customize {
        return Ok(None);
    }

    let conductor_dir: String = Input::new()
        .with_prompt("Conductor directory")
        .default(current.conductor_dir.display().to_string())
        .interact_text()
        .context("Failed to read conductor directory")?;

    let initial_task: String = Input::new()
        .with_prompt("First task of every new plan")
        .default(current.initial_task.clone())
        .interact_text()
        .context("Failed to read initial task")?;

    Ok(Some(Config {
        conductor_dir: PathBuf::from(conductor_dir.trim()),
        initial_task: initial_task.trim().to_string(),
    }))
}

/// Prompts for seed text and, optionally, project settings. Empty answers
/// keep the placeholder text.
pub fn run_wizard(config: &Config) -> Result<(InitSeed, Option<Config>)> {
    println!("  {}", style("Conductor setup").white().bold());
    println!(
        "  {}",
        style("Press Enter on any question to keep the placeholder text.").dim()
    );

    print_step(1, "Product");
    let product = ask_context("What is the product and who is it for")?;

    print_step(2, "Tech Stack");
    let tech_stack = ask_context("Which languages, frameworks and tools")?;

    print_step(3, "Workflow");
    let workflow = ask_context("How does the team work")?;

    print_step(4, "Settings");
    let settings = ask_settings(config)?;

    let seed = InitSeed {
        product,
        tech_stack,
        workflow,
    };

    Ok((seed, settings))
}

pub fn print_report(report: &InitReport, root: &Path) {
    if report.is_noop() {
        println!(
            "  {} Already initialized at {}",
            style("✓").green(),
            style(root.display()).cyan()
        );
    } else {
        for path in &report.created {
            println!("  {} {}", style("+").green(), path.display());
        }
    }

    println!();
    println!("  {} Conductor initialized successfully.", style("✓").green().bold());
    println!(
        "  {} Next: {}",
        style("→").green(),
        style("conductor new <id> <title>").cyan().bold()
    );
}
