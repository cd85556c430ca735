//! Traffic Light Walkthrough
//!
//! This demo drives the cyclic traffic light machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Uniform confirmation messages per transition
//! - History of committed color changes
//!
//! Run with: cargo run --example traffic_light

use lockstep::core::State;
use lockstep::machines::TrafficLight;

fn main() {
    println!("=== Traffic Light ===\n");

    let mut light = TrafficLight::new();
    println!("Initial state: {}", light.state().name());

    println!("\nTwo full cycles:");
    for _ in 0..6 {
        let outcome = light.advance();
        println!("  {} (now {})", outcome.message(), light.state().name());
    }

    let path: Vec<&str> = light.history().get_path().iter().map(|s| s.name()).collect();
    println!("\nPath traversed: {}", path.join(" -> "));

    println!("\nThe sequence repeats forever: Red -> Green -> Yellow -> Red -> ...");
}
