//! switchpoll simulator: replays a JSON scenario on the desktop.
//!
//! ```text
//!  scenario.json ──▶ ScriptedSource ──▶ SwitchPoller ──▶ LogEventSink
//!                                            │
//!                                            └──▶ stdout (per-tick table)
//! ```
//!
//! Set `RUST_LOG=debug` to see every promotion inside the sampler.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use switchpoll::adapters::log_sink::LogEventSink;
use switchpoll::scenario::Scenario;

#[derive(Debug, Parser)]
#[command(name = "switchpoll-sim", about = "Replay a scripted switch scenario through the debouncer")]
struct Args {
    /// Scenario file (JSON)
    scenario: PathBuf,

    /// Extra ticks to run on the last scripted bank
    #[arg(long, default_value_t = 0)]
    extra_ticks: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let text = std::fs::read_to_string(&args.scenario)
        .with_context(|| format!("reading {}", args.scenario.display()))?;
    let scenario = Scenario::from_json(&text)
        .with_context(|| format!("parsing {}", args.scenario.display()))?;

    info!(
        "Replaying {} steps on {} channel(s), debounce={} hold={}",
        scenario.script.len(),
        scenario.channels.len(),
        scenario.config.debounce_threshold,
        scenario.config.hold_threshold,
    );

    let reports = scenario
        .run(args.extra_ticks, &mut LogEventSink::new())
        .context("scenario failed")?;

    for report in &reports {
        let line: Vec<String> = report
            .states
            .iter()
            .map(|(id, state)| format!("ch{id}={state:?}"))
            .collect();
        println!("tick {:>3} | {}", report.tick, line.join(" "));
    }
    Ok(())
}
