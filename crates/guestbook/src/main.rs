#![forbid(unsafe_code)]

//! Guestbook binary: CLI parsing, logging, seed loading, and the
//! terminal program itself.

use std::fs::File;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use guestbook::app::App;
use guestbook::cli::Cli;
use guestbook::data::{fixture_comments, load_seed};
use guestbook::theme::Theme;
use tealight::{Model, Program};

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!cli.no_color);

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.with_writer(Arc::new(file)).with_ansi(false).init();
    } else {
        // Raw mode owns the screen; stderr only carries logs when
        // verbosity was asked for.
        builder.with_writer(std::io::stderr).init();
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli)?;

    if cli.no_color {
        colored::control::set_override(false);
    }
    let theme = if cli.no_color {
        Theme::plain()
    } else {
        Theme::new()
    };

    let seed = match &cli.seed_file {
        Some(path) => {
            load_seed(path).with_context(|| format!("invalid seed file {}", path.display()))?
        }
        None => fixture_comments(),
    };
    tracing::info!(comments = seed.len(), "seed loaded");

    let app = App::new(seed, theme);

    if cli.self_check {
        // One frame, no TTY required.
        print!("{}", app.view());
        return Ok(());
    }

    let mut program = Program::new(app).with_fps(cli.fps);
    if !cli.no_alt_screen {
        program = program.with_alt_screen();
    }

    program.run().context("failed to run the guestbook")?;
    Ok(())
}
