//! Prints hand-verified expected values next to what the accumulator computes.
//!
//! Run with: cargo run --example testbench --features tracing
//!
//! Log filtering is read from `AVERAGER_LOG`.

use anyhow::Result;
use efficient_averager::statistics::Accumulator;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_FILTER: &str = "testbench=info,efficient_averager=trace";

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_env("AVERAGER_LOG")
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;
    let format_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(format_layer).try_init()?;
    Ok(())
}

fn check(expected: &str, actual: impl std::fmt::Display) {
    info!("{:>7} == {}", expected, actual);
}

fn main() -> Result<()> {
    init_tracing()?;

    let mut a = Accumulator::with_start(13.0);
    check("13.0", a.mean());
    a.add(3.0);
    check("8.0", a.mean());
    a.add_all([5.0, 12.0, 8.0, 7.3]);
    check("8.05", a.mean());

    let mut b = Accumulator::new();
    check("0.0", b.mean());
    b.add(13.0);
    check("13.0", b.mean());
    b.add_all([55.0, 712.197, 18.0, 99.0]);
    check("179.439", format!("{:.3}", b.mean()));

    let mut c = Accumulator::new();
    c.add_all([-2147483648.0, 2147483647.0, 2147483647.0, -2147483648.0]);
    check("-0.5", c.mean());

    check("6", a.count());
    check("5", b.count());
    check("4", c.count());

    check("8", a.as_i32());
    check("179", b.as_i64());

    c.reset();
    check("0", c.count());

    Ok(())
}
