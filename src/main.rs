//! keyline - inspect and check Readline-style key bindings

use std::path::Path;

use anyhow::{Context as _, Result};
use clap::Parser;
use serde::Serialize;

use keyline::actions::registry;
use keyline::keymap::{KeySequence, KeymapMode};
use keyline::Config;

mod cli;

use cli::{CliArgs, Command};

#[derive(Serialize)]
struct BindingRow<'a> {
    sequence: &'a str,
    action: &'static str,
    category: &'static str,
    context: bool,
}

fn print_actions() {
    for action in registry::get_all() {
        let kind = if action.kind.is_context() { "context" } else { "simple" };
        println!(
            "{:<26} {:<11} {:<8} {}",
            action.name,
            action.category.as_str(),
            kind,
            action.description
        );
    }
}

fn print_bindings(mode: Option<KeymapMode>, json: bool, no_config: bool) -> Result<()> {
    let config = if no_config {
        Config::default()
    } else {
        Config::load()
    };
    let (manager, summary) = config.keybinding_manager()?;
    if summary.errors > 0 {
        eprintln!("config: {}", summary);
    }

    let mode = mode.unwrap_or_else(|| manager.get_mode());
    let bindings = manager.keymap(mode).bindings();

    if json {
        let rows: Vec<BindingRow<'_>> = bindings
            .iter()
            .map(|b| BindingRow {
                sequence: b.sequence.as_str(),
                action: b.action.name,
                category: b.action.category.as_str(),
                context: b.action.kind.is_context(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for binding in bindings {
            println!("{}", binding.display_string());
        }
    }
    Ok(())
}

fn encode(sequences: &[String]) -> Result<()> {
    for input in sequences {
        let sequence = KeySequence::parse(input)
            .with_context(|| format!("cannot parse key sequence {:?}", input))?;
        println!("{}", sequence);
    }
    Ok(())
}

fn check_config(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => keyline::config_paths::config_file().context("no config directory available")?,
    };
    let config = Config::load_from(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let (manager, summary) = config.keybinding_manager()?;

    println!("{}: {}", path.display(), summary);
    println!(
        "mode {}, {} bindings, kill ring capacity {}",
        manager.get_mode(),
        manager.current_keymap().len(),
        config.kill_ring().capacity()
    );
    if summary.errors > 0 {
        anyhow::bail!("{} invalid bindings", summary.errors);
    }
    Ok(())
}

fn main() -> Result<()> {
    keyline::tracing::init();

    let args = CliArgs::parse();
    match args.command {
        Command::Actions => print_actions(),
        Command::Bindings {
            mode,
            json,
            no_config,
        } => print_bindings(mode, json, no_config)?,
        Command::Encode { sequences } => encode(&sequences)?,
        Command::CheckConfig { path } => check_config(path.as_deref())?,
    }
    Ok(())
}
