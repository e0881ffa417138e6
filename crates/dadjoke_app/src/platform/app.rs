use std::io::{self, Write};
use std::time::Duration;

use dadjoke_core::{update, AppState, Msg};
use dadjoke_logging::{joke_info, joke_warn};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::settings::{self, AppSettings};
use super::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_app(address_override: Option<String>) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (settings, settings_err) = match settings::load_settings(&cwd) {
        Ok(settings) => (settings, None),
        Err(err) => (AppSettings::default(), Some(err)),
    };

    logging::initialize(if settings.log_to_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    });
    if let Some(err) = settings_err {
        joke_warn!("{}; using defaults", err);
    }

    let address = address_override.unwrap_or_else(|| settings.address.clone());
    joke_info!("Fetching joke from {}", address);

    let runner = EffectRunner::new(settings.fetch_settings())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    drive(&runner, address, &mut out)?;
    Ok(())
}

/// Runs one fetch lifecycle for `address`, rendering every visible state
/// change to `out`, then tears the orchestrator down.
fn drive(runner: &EffectRunner, address: String, out: &mut impl Write) -> io::Result<AppState> {
    let mut state = dispatch(AppState::new(), Msg::AddressChanged(address), runner, out)?;

    while state.in_flight().is_some() {
        if let Some(msg) = runner.next_msg(POLL_INTERVAL) {
            state = dispatch(state, msg, runner, out)?;
        }
    }

    let finished = state.clone();
    let (_state, effects) = update(state, Msg::Shutdown);
    runner.run(effects);
    Ok(finished)
}

fn dispatch(
    state: AppState,
    msg: Msg,
    runner: &EffectRunner,
    out: &mut impl Write,
) -> io::Result<AppState> {
    let (mut state, effects) = update(state, msg);
    runner.run(effects);
    if state.consume_dirty() {
        writeln!(out, "{}", ui::render::render(&state.view()))?;
    }
    Ok(state)
}
