use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use nova_app::autopilot::Autopilot;
use nova_app::config::Cli;
use nova_app::control;
use nova_app::game_loop::{self, RunSummary, TICK_DURATION};
use nova_app::state::AppState;
use nova_core::commands::PlayerCommand;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = cli.log_level.clone().unwrap_or_else(|| "info".into());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let mut autopilot = (!cli.no_autopilot).then(Autopilot::default);
    let summary = if cli.realtime {
        run_realtime(&cli, autopilot.as_mut())?
    } else {
        game_loop::run_synchronous(cli.sim_config(), cli.ticks, autopilot.as_mut())
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&summary.snapshot)
            .context("serializing final snapshot")?;
        println!("{json}");
    } else {
        print_summary(&summary);
    }
    Ok(())
}

/// Drive the threaded loop for `--seconds`, polling once per tick.
fn run_realtime(cli: &Cli, mut autopilot: Option<&mut Autopilot>) -> Result<RunSummary> {
    let state = AppState::new();
    control::start_simulation(&state, cli.sim_config())?;
    control::send_command(&state, PlayerCommand::StartGame)?;

    let deadline = Instant::now() + Duration::from_secs_f64(cli.seconds.max(0.0));
    let mut summary = None::<RunSummary>;
    let mut last_tick = None;

    while Instant::now() < deadline {
        std::thread::sleep(TICK_DURATION);
        let Some(snapshot) = control::get_snapshot(&state)? else {
            continue;
        };

        let events = control::drain_events(&state)?;
        let entry = summary.get_or_insert_with(|| RunSummary::from_snapshot(snapshot.clone()));
        entry.record(&events);
        entry.ticks = snapshot.tick;
        entry.snapshot = snapshot;

        let snapshot = &entry.snapshot;
        if snapshot.status.is_terminal() {
            break;
        }
        if last_tick == Some(snapshot.tick) {
            continue;
        }
        last_tick = Some(snapshot.tick);
        if let Some(pilot) = autopilot.as_deref_mut() {
            for command in pilot.decide(snapshot) {
                control::send_command(&state, command)?;
            }
        }
    }

    control::stop_simulation(&state)?;
    summary.context("game loop produced no snapshot")
}

fn print_summary(summary: &RunSummary) {
    let s = &summary.snapshot;
    info!("run finished after {} ticks", summary.ticks);
    println!("status:      {:?}", s.status);
    println!("level/wave:  {}/{}", s.level, s.wave);
    println!("score:       {}", s.score);
    println!(
        "standing:    {} cities, {} towers",
        s.active_city_count(),
        s.active_tower_count()
    );
    println!(
        "shots:       {} launched, {} intercepted, {} impacts",
        summary.launched, summary.intercepted, summary.impacted
    );
}
