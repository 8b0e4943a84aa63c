mod config;
mod game;
mod journal;
mod locale;
mod logging;
mod model;
mod render;
mod storage;
mod types;
mod utils;
mod watch;

use clap::Parser;
use log::{info, warn};
use macroquad::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::locale::LocaleBook;
use crate::storage::{ScopedState, WindowConfig};

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the window-state file (defaults to ~/.robosim.cfg).
    #[arg(long)]
    config: Option<PathBuf>,

    /// UI language override (two-letter code, e.g. "en" or "ru").
    #[arg(long)]
    lang: Option<String>,

    /// Number of entries kept in the scrolling log panel.
    #[arg(long, default_value_t = config::JOURNAL_CAPACITY)]
    journal_capacity: usize,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn window_config(&self) -> WindowConfig {
        WindowConfig::new(
            self.config
                .clone()
                .unwrap_or_else(WindowConfig::default_path),
        )
    }
}

fn resolve_language(args: &Args, state: &HashMap<String, String>) -> String {
    args.lang
        .clone()
        .or_else(|| state.get("app.locale").cloned())
        .unwrap_or_else(|| locale::FALLBACK_LANGUAGE.to_string())
}

fn window_conf() -> Conf {
    // macroquad builds the window before main runs, so the CLI is parsed
    // here as well to honor --config/--lang for geometry and title.
    let args = Args::parse();
    let mut state = args.window_config().load();
    let language = resolve_language(&args, &state);
    let title = LocaleBook::load(&language).get("window.title").to_owned();
    let geometry = ScopedState::new(&mut state, "main");
    Conf {
        window_title: title,
        window_width: geometry.get_i32("width").unwrap_or(config::WINDOW_WIDTH),
        window_height: geometry.get_i32("height").unwrap_or(config::WINDOW_HEIGHT),
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init_logger(logging::parse_level(&args.log_level)) {
        eprintln!("Warning: failed to initialize logger: {}", e);
    }

    let window_config = args.window_config();
    let mut state = window_config.load();
    let language = resolve_language(&args, &state);
    let locale = LocaleBook::load(&language);

    info!(
        "Starting robosim (locale '{}', journal capacity {})",
        language, args.journal_capacity
    );

    let mut game = game::Game::new(args.journal_capacity, locale);
    let mut renderer = render::Renderer::new();
    game.run(&mut renderer).await;

    // Persist window geometry and locale for the next run
    let mut geometry = ScopedState::new(&mut state, "main");
    geometry.put("width", screen_width() as i32);
    geometry.put("height", screen_height() as i32);
    let mut app = ScopedState::new(&mut state, "app");
    app.put("locale", &language);

    if let Err(e) = window_config.save(&state) {
        warn!(
            "Failed to save window state to {}: {}",
            window_config.path().display(),
            e
        );
    }
}
