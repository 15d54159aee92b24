//! Bank account usage example: savings and overdraft policies

use banking_core::utils::MemoryStore;
use banking_core::{AccountPolicy, Bank};
use bigdecimal::BigDecimal;
use std::str::FromStr;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).expect("literal amount")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The default observer logs one line per operation through `tracing`
    tracing_subscriber::fmt().init();

    println!("--- Bank Account System ---\n");

    let mut bank = Bank::new(MemoryStore::new());

    // 1. Savings account operations
    println!("--- Savings Account Operations ---");
    let savings = bank
        .open_account(
            "SA001".to_string(),
            "Alice".to_string(),
            AccountPolicy::Savings {
                interest_rate: dec("0.02"),
            },
            dec("1000.00"),
        )
        .await?;
    println!("{}", savings);

    bank.deposit("SA001", dec("200")).await?;

    let interest = bank.accrue_interest("SA001").await?;
    println!("Interest credited: {}", interest);

    let savings = bank.get_account("SA001").await?.expect("account exists");
    println!("{}\n", savings);

    // 2. Overdraft account operations
    println!("--- Overdraft Account Operations ---");
    let overdraft = bank
        .open_account(
            "OVD001".to_string(),
            "Bob".to_string(),
            AccountPolicy::Overdraft {
                overdraft_limit: dec("100.00"),
            },
            dec("100.00"),
        )
        .await?;
    println!("{}", overdraft);

    // Dips into the overdraft allowance
    bank.withdraw("OVD001", dec("150.00")).await?;

    // Exceeds the allowance and is rejected; the error is non-fatal
    if let Err(err) = bank.withdraw("OVD001", dec("100.00")).await {
        println!("{}", err);
    }

    let overdraft = bank.get_account("OVD001").await?.expect("account exists");
    println!("{}", overdraft);

    Ok(())
}
