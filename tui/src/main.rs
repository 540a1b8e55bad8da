mod actions;
mod config;
mod events;
mod message;
mod model;
mod state;
mod tasks;
#[cfg(test)]
mod test_utils;
mod update;
mod view;
mod viewmodel;

use anyhow::Result;
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use eatclub_api::EatClubClient;
use eatclub_core::RestaurantFetcher;
use ratatui::{backend::CrosstermBackend, layout::Rect, prelude::Color, Terminal};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{stdout, Stdout};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tachyonfx::fx::EvolveSymbolSet;
use tachyonfx::pattern::RadialPattern;
use tachyonfx::{fx, Effect, EffectTimer, Interpolation, Motion};

use config::Config;
use message::Message;
use model::{Model, Screen};
use tasks::TaskWatcher;
use update::update;
use viewmodel::RestaurantListViewModel;

struct LocalTimer;

impl tracing_subscriber::fmt::time::FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        w.write_str(&ts)
    }
}

/// Log to `<data_dir>/eatclub/eatclub.log`. The terminal belongs to the UI,
/// so when the file cannot be opened logging stays off.
fn init_logging(config: &Config) {
    let Some(dir) = dirs::data_dir().map(|p| p.join("eatclub")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let log_path = dir.join("eatclub.log");
    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(_) => return,
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_timer(LocalTimer)
        .init();
    tracing::info!(path = %log_path.display(), "logging initialized");
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load();
    init_logging(&config);

    let base_url = config.api_base_url();
    tracing::info!(%base_url, "eatclub starting");
    let client = EatClubClient::new(base_url, config.request_timeout())?;
    let fetcher: Arc<dyn RestaurantFetcher> = Arc::new(client);

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &config, fetcher).await;
    restore_terminal()?;

    if let Err(e) = &result {
        tracing::error!(error = ?e, "application error");
    }
    tracing::info!("eatclub exited");
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &Config,
    fetcher: Arc<dyn RestaurantFetcher>,
) -> Result<()> {
    let view_model = RestaurantListViewModel::new(fetcher);
    let mut model = Model::new(config.snackbar_duration());
    let mut watcher = TaskWatcher::new(&view_model);

    // Tachyonfx effects for animations
    let mut effects: Vec<(Effect, Rect)> = Vec::new();
    let mut last_frame_time = Instant::now();

    let term_size = terminal.size()?;
    let full_screen = Rect::new(0, 0, term_size.width, term_size.height);

    let style = ratatui::style::Style::default()
        .fg(Color::Rgb(22, 16, 16)) // BG_DARK
        .bg(Color::Rgb(12, 8, 8));

    let timer = EffectTimer::from_ms(1200, Interpolation::CubicOut);

    effects.push((
        fx::evolve_into((EvolveSymbolSet::Shaded, style), timer)
            .with_pattern(RadialPattern::center().with_transition_width(15.0)),
        full_screen,
    ));

    loop {
        let elapsed = last_frame_time.elapsed();
        last_frame_time = Instant::now();

        terminal.draw(|frame| {
            view::view(frame, &mut model, &view_model);

            for (effect, area) in effects.iter_mut() {
                effect.process(elapsed.into(), frame.buffer_mut(), *area);
            }
        })?;

        effects.retain(|(effect, _)| !effect.done());

        if model.should_quit {
            break;
        }

        for msg in watcher.check(&view_model) {
            dispatch(&mut model, &view_model, msg, terminal, &mut effects)?;
        }

        // Shorter poll during animations (~60 FPS)
        let poll_duration = if !effects.is_empty() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(50)
        };
        let settings_open = view_model.list_state().show_settings_panel;
        if let Some(msg) = events::handle_event(&model, settings_open, poll_duration)? {
            dispatch(&mut model, &view_model, msg, terminal, &mut effects)?;
        }
    }

    Ok(())
}

/// Run a message through update, following chained messages and starting
/// the animations it asks for.
fn dispatch(
    model: &mut Model,
    view_model: &RestaurantListViewModel,
    msg: Message,
    terminal: &Terminal<CrosstermBackend<Stdout>>,
    effects: &mut Vec<(Effect, Rect)>,
) -> Result<()> {
    let mut next = Some(msg);
    while let Some(msg) = next.take() {
        let result = update(model, view_model, msg);
        next = result.msg;

        if result.list_refreshed && model.ui.screen == Screen::List {
            // Rows below the search box and table header
            let term_size = terminal.size()?;
            let rows = Rect::new(
                1,
                5,
                term_size.width.saturating_sub(2),
                term_size.height.saturating_sub(7),
            );
            effects.push((
                fx::sweep_in(
                    Motion::UpToDown,
                    15,
                    3,
                    Color::Rgb(22, 16, 16), // BG_DARK
                    (600, Interpolation::QuadOut),
                ),
                rows,
            ));
        }

        if result.navigated {
            let term_size = terminal.size()?;
            let full_screen = Rect::new(0, 0, term_size.width, term_size.height);
            effects.push((
                fx::sweep_in(
                    Motion::LeftToRight,
                    10,
                    0,
                    Color::Rgb(22, 16, 16), // BG_DARK
                    (300, Interpolation::QuadOut),
                ),
                full_screen,
            ));
        }
    }
    Ok(())
}
