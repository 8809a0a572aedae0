//! tagtree - entry point

use clap::Parser;
use std::path::PathBuf;
use tagtree::config::{self, KeyBindings};
use tagtree::model::{PersistError, Tree};
use tagtree::state::AppState;
use tagtree::view::{self, TreeColors};
use tracing::{info, warn};

/// Interactive viewer and editor for tagged record trees
#[derive(Parser, Debug)]
#[command(name = "tagtree")]
#[command(version)]
#[command(about = "Browse and edit a tree of tagged records in the terminal")]
pub struct Args {
    /// Tree document to open (JSON). Created on first save if missing.
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Hide connecting lines between parents and children
    #[arg(long)]
    pub no_lines: bool,

    /// Indentation per depth level, in cells
    #[arg(long, value_parser = clap::value_parser!(i32).range(0..=32))]
    pub indent: Option<i32>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::loader::load_config_with_precedence(args.config.clone())?;
        let merged = config::loader::merge_config(config_file);
        let with_env = config::loader::apply_env_overrides(merged);

        let lines_override = args.no_lines.then_some(false);
        let color_override = args.no_color.then_some(false);
        config::loader::apply_cli_overrides(with_env, lines_override, args.indent, color_override)
    };

    let _log_guard = tagtree::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let mut state = AppState::new(Tree::new(), config.tree_style(), config.context_menu());
    if let Some(path) = &args.file {
        match state.load_data_from_file(path) {
            Ok(()) => {}
            Err(PersistError::FileNotFound { .. }) => {
                warn!(path = %path.display(), "document does not exist yet");
                state = state.with_file(path.clone());
                state.status = Some(format!("New file {}", path.display()));
            }
            Err(e) => return Err(e.into()),
        }
    }

    let colors = TreeColors::from_config(&config);

    view::run_app(state, KeyBindings::default(), colors)?;

    Ok(())
}
