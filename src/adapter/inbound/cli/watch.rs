//! Handler for `envios watch`.

use std::time::Duration;

use chrono::Utc;
use serde_json::json;
use tokio::signal;
use tokio::sync::mpsc;

use super::command::WatchArgs;
use super::output;
use super::rate::format_rate;
use super::session::Session;
use crate::application::desk::Desk;
use crate::application::quote::feed::FeedUpdate;
use crate::domain::currency::Direction;
use crate::error::Result;

/// Execute `watch` until interrupted.
pub async fn execute(desk: &Desk, session: &Session, args: &WatchArgs) -> Result<()> {
    let settings = &session.load.settings;

    let mut poller = desk.poller();
    if let Some(secs) = args.interval {
        poller = poller.with_interval(Duration::from_secs(secs));
    }
    let interval = poller.interval();

    if !output::is_json() {
        output::header(env!("CARGO_PKG_VERSION"));
        output::section("Watching quotes");
        output::field("Provider", desk.provider_name());
        output::field("Interval", format!("{}s", interval.as_secs()));
        if settings.is_manual_mode {
            output::note("Manual mode is on; client rates ignore the live quote");
        }
        output::hint("press Ctrl-C to stop");
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = poller.spawn(tx);

    loop {
        tokio::select! {
            update = rx.recv() => {
                let Some(update) = update else { break };
                report(desk, session, &update);
            }
            _ = signal::ctrl_c() => {
                break;
            }
        }
    }

    handle.stop().await;
    output::success("Stopped");
    Ok(())
}

fn report(desk: &Desk, session: &Session, update: &FeedUpdate) {
    let timestamp = Utc::now().format("%H:%M:%S").to_string();
    let settings = &session.load.settings;

    match update {
        FeedUpdate::Applied { generation, .. } => {
            let board = desk.board(settings);
            if output::is_json() {
                output::json_output(json!({
                    "command": "watch",
                    "status": "applied",
                    "generation": generation,
                    "board": board,
                }));
                return;
            }
            output::event(
                &timestamp,
                "quote",
                &format!(
                    "{} | {}",
                    format_rate(&board, Direction::BrlToVes),
                    format_rate(&board, Direction::VesToBrl)
                ),
            );
        }
        FeedUpdate::Failed { generation, reason } => {
            if output::is_json() {
                output::json_output(json!({
                    "command": "watch",
                    "status": "failed",
                    "generation": generation,
                    "reason": reason,
                }));
                return;
            }
            if !settings.is_manual_mode {
                output::warning(&format!("{timestamp} quote unavailable: {reason}"));
            }
        }
        FeedUpdate::Stale { generation, current } => {
            tracing::debug!(generation, current, "Stale quote discarded");
        }
    }
}
