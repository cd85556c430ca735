//! Banking Walkthrough
//!
//! This demo exercises the guarded transfer path: authentication, kind
//! validation, the funds check, and the atomic commit.
//!
//! Key concepts:
//! - Pluggable credential verification
//! - Short-circuit validation with Ok(false) rejections
//! - Unknown accounts fail loudly instead of rejecting quietly
//!
//! Run with: cargo run --example banking

use lockstep::bank::BankingSystem;

fn main() {
    println!("=== Banking ===\n");

    let bank = BankingSystem::new(|principal, credential| {
        // A stand-in for a real credential store
        principal == "user123" && credential == "pass123"
    });
    bank.open_account("user123", 1000).expect("fresh ledger");
    bank.open_account("receiver456", 500).expect("fresh ledger");

    println!("Authenticating user123...");
    println!("  -> {}", bank.authenticate("user123", "pass123"));

    println!("\nTransfer 100 (regular):");
    show(&bank, bank.transfer_money("user123", "receiver456", 100, "regular"));

    println!("Transfer 2000 (insufficient funds):");
    show(&bank, bank.transfer_money("user123", "receiver456", 2000, "regular"));

    println!("Transfer 100 (invalid_type):");
    show(
        &bank,
        bank.transfer_money("user123", "receiver456", 100, "invalid_type"),
    );

    println!("Transfer from unknown_user (never authenticated):");
    show(
        &bank,
        bank.transfer_money("unknown_user", "receiver456", 100, "regular"),
    );

    println!("Transfer to an account that was never opened:");
    match bank.transfer_money("user123", "ghost", 100, "regular") {
        Ok(sent) => println!("  -> sent: {sent}"),
        Err(err) => println!("  -> error: {err}"),
    }
}

fn show(bank: &BankingSystem, result: Result<bool, lockstep::bank::LedgerError>) {
    let sent = result.expect("both demo accounts exist");
    println!(
        "  -> sent: {sent} (user123: {}, receiver456: {})",
        bank.balance("user123").expect("account exists"),
        bank.balance("receiver456").expect("account exists"),
    );
}
