//! Elevator Walkthrough
//!
//! This demo drives the elevator machine through legal and illegal
//! requests.
//!
//! Key concepts:
//! - Movement only starts from rest
//! - Illegal requests are rejected uniformly, with no state change
//! - Rejection is an outcome to branch on, not an error to catch
//!
//! Run with: cargo run --example elevator

use lockstep::core::State;
use lockstep::machines::ElevatorSystem;

fn main() {
    println!("=== Elevator ===\n");

    let mut elevator = ElevatorSystem::new();
    println!("Initial state: {}", elevator.state().name());

    println!("\nRequest: move up");
    report(elevator.move_up().message(), elevator.state().name());

    println!("Request: move up again (already moving)");
    report(elevator.move_up().message(), elevator.state().name());

    println!("Request: move down (still moving up)");
    report(elevator.move_down().message(), elevator.state().name());

    println!("Request: stop");
    report(elevator.stop().message(), elevator.state().name());

    println!("Request: move down");
    report(elevator.move_down().message(), elevator.state().name());

    println!("Request: stop");
    report(elevator.stop().message(), elevator.state().name());

    println!(
        "\nCommitted movements: {}",
        elevator.history().transitions().len()
    );
}

fn report(message: &str, state: &str) {
    println!("  -> {message} (state: {state})");
}
