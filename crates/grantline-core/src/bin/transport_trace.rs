//! Transport trace - run the simulated transport headless and log every change
//!
//! Starts a `TransportController`, optionally pauses it once, and follows the
//! change feed until the boundary reset rewinds it to the start.
//!
//! ## Command line flags
//!
//! - `--duration <secs>`: simulated track length (default 45)
//! - `--interval-ms <ms>`: tick cadence (default 500)
//! - `--step <secs>`: advance per tick (default 0.5)
//! - `--pause-at <secs>`: pause once when this position is reached
//! - `--resume-after-ms <ms>`: how long that pause lasts (default 1000)

use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use tokio::runtime::Handle;

use grantline_core::transport::{TransportConfig, TransportController};

fn flag_value<T>(args: &[String], name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(idx) = args.iter().position(|arg| arg == name) else {
        return Ok(None);
    };
    let raw = args
        .get(idx + 1)
        .ok_or_else(|| anyhow!("{} expects a value", name))?;
    raw.parse::<T>()
        .map(Some)
        .map_err(|e| anyhow!("Invalid value for {}: '{}' ({})", name, raw, e))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().collect();
    let defaults = TransportConfig::default();
    let config = TransportConfig {
        duration_secs: flag_value(&args, "--duration")?.unwrap_or(defaults.duration_secs),
        tick_interval_ms: flag_value(&args, "--interval-ms")?.unwrap_or(defaults.tick_interval_ms),
        step_secs: flag_value(&args, "--step")?.unwrap_or(defaults.step_secs),
    };
    let pause_at: Option<f64> = flag_value(&args, "--pause-at")?;
    let resume_after = Duration::from_millis(flag_value(&args, "--resume-after-ms")?.unwrap_or(1_000));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(trace(config, pause_at, resume_after));
    Ok(())
}

async fn trace(config: TransportConfig, pause_at: Option<f64>, resume_after: Duration) {
    let mut controller = TransportController::new(config, Handle::current());
    let mut changes = controller.subscribe();
    let config = controller.config();

    log::info!(
        "transport-trace: {:.1}s track, {:.2}s every {:?}",
        config.duration_secs,
        config.step_secs,
        config.tick_interval()
    );

    controller.toggle();
    changes.mark_unchanged();
    let mut pause_pending = pause_at;

    while changes.changed().await.is_ok() {
        let state = *changes.borrow_and_update();
        log::info!(
            "{} {:>6.1}s / {:.1}s ({:>3.0}%)",
            if state.is_playing { "PLAY " } else { "STOP " },
            state.elapsed,
            state.duration,
            state.progress_fraction() * 100.0
        );

        if !state.is_playing && state.elapsed == 0.0 {
            log::info!("transport-trace: boundary reached, transport rewound");
            break;
        }

        if let Some(at) = pause_pending {
            if state.is_playing && state.elapsed >= at {
                pause_pending = None;
                controller.toggle();
                log::info!(
                    "transport-trace: paused at {:.1}s for {:?}",
                    controller.query_state().elapsed,
                    resume_after
                );
                tokio::time::sleep(resume_after).await;
                let frozen = controller.query_state().elapsed;
                controller.toggle();
                log::info!("transport-trace: resumed at {:.1}s", frozen);
                changes.mark_unchanged();
            }
        }
    }

    drop(controller);
    log::info!("transport-trace: controller torn down");
}
