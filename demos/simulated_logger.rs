//! Example: simulated thermocouple logger
//!
//! What it demonstrates
//! - Feeding the graph from an acquisition thread through `graph_channel()` and `GraphSink`.
//! - Starting a run with `configure` and sending one `ingest` per sampling tick.
//! - Dropped readings: channel 3 reports NaN now and then (an open thermocouple),
//!   which the graph silently skips.
//!
//! How to run
//! ```bash
//! RUST_LOG=livegraph=debug cargo run --example simulated_logger
//! ```
//! Each wall-clock tick advances the run clock by 5 s so zoom and pan have
//! something to work with after a few seconds.

use std::collections::HashMap;
use std::time::Duration;

use livegraph::{graph_channel, run_live_graph, GraphConfig};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let (sink, rx) = graph_channel();

    std::thread::spawn(move || {
        const RUN_SECS_PER_TICK: f64 = 5.0;
        let channels = [(1, "TC1"), (2, "TC2"), (3, "TC3"), (9, "Ambient")];
        if sink.configure(channels).is_err() {
            return;
        }
        let mut n: u64 = 0;
        loop {
            let t = n as f64 * RUN_SECS_PER_TICK;
            let heat = 60.0 * (1.0 - (-t / 900.0).exp());
            let mut values = HashMap::new();
            values.insert(1, 22.0 + heat + (t / 40.0).sin());
            values.insert(2, 22.0 + 0.8 * heat + 0.5 * (t / 25.0).cos());
            let tc3 = if n % 17 == 16 { f64::NAN } else { 22.0 + 0.5 * heat };
            values.insert(3, tc3);
            values.insert(9, 22.0 + 0.05 * (t / 120.0).sin());
            // Receiver dropped: the window was closed.
            if sink.ingest(t, values).is_err() {
                break;
            }
            n += 1;
            std::thread::sleep(Duration::from_millis(200));
        }
    });

    run_live_graph(rx, GraphConfig::load_or_default())
}
