//! Search worker process.
//!
//! Reads one JSON search request per stdin line and writes one JSON response
//! per stdout line. A request that arrives while an earlier one is still
//! searching supersedes it; only the latest request is answered. Logs go to
//! stderr.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};

use damson_chess::worker::search_protocol::{encode_search_response, parse_search_request};
use damson_chess::worker::search_worker::SearchWorker;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Deepest search the worker will run; deeper requests are clamped.
    #[arg(long, default_value_t = 5)]
    max_depth: u8,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    info!("damson_worker ready, max depth {}", args.max_depth);

    let (line_tx, line_rx) = channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut worker = SearchWorker::new(args.max_depth);
    let mut stdout = io::stdout();
    let mut input_open = true;

    while input_open || worker.has_pending() {
        match line_rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    match parse_search_request(trimmed) {
                        Ok(request) => {
                            worker.submit(request);
                        }
                        Err(e) => warn!("rejected request: {e}"),
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => input_open = false,
        }

        let reported = if input_open {
            worker.recv_current_timeout(Duration::ZERO)
        } else {
            worker.recv_current()
        };
        let Some(result) = reported else {
            continue;
        };
        match result.and_then(|response| encode_search_response(&response)) {
            Ok(json) => {
                writeln!(stdout, "{json}").map_err(|e| e.to_string())?;
                stdout.flush().map_err(|e| e.to_string())?;
            }
            Err(e) => warn!("search failed: {e}"),
        }
    }

    Ok(())
}
