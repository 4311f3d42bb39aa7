//! Traffic Light Timing Loop
//!
//! This example runs one light through a full cycle on a fast clock.
//!
//! Key concepts:
//! - Background timing loop started with `start()`
//! - `stop()` waits for the loop to exit before returning
//! - Observations collected in a `MemorySink` instead of stdout
//! - Restarting resumes from where the light stopped
//!
//! Run with: cargo run --example traffic_light

use std::sync::Arc;
use std::thread;
use std::time::Duration;
use stoplight::sink::MemorySink;
use stoplight::{LightState, TimedStateMachine};

fn main() {
    println!("=== Traffic Light Timing Loop ===\n");

    // 20ms per unit: RED 100ms, GREEN 80ms, YELLOW 40ms
    let sink = Arc::new(MemorySink::new());
    let light = TimedStateMachine::builder("Main Street")
        .cycle(LightState::standard_cycle(Duration::from_millis(20)).unwrap())
        .sink(sink.clone())
        .build()
        .unwrap();

    println!("Starting light (one cycle is {:?})", light.cycle().period());
    light.start().unwrap();

    thread::sleep(Duration::from_millis(240));
    println!("Stopping light...");
    light.stop();

    println!("\nObserved:");
    for line in sink.lines() {
        println!("  {line}");
    }

    println!("\nRestarting resumes the cycle:");
    let seen = sink.len();
    light.start().unwrap();
    light.stop();
    for line in &sink.lines()[seen..] {
        println!("  {line}");
    }

    println!("\n=== Example Complete ===");
}
