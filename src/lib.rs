//! # Banking Core
//!
//! A small banking library providing policy-driven accounts with validated
//! deposits and withdrawals, plus supporting back-office utilities.
//!
//! ## Features
//!
//! - **Policy-driven accounts**: one account value with a tagged policy
//!   (Standard, Savings, Overdraft) instead of an inheritance hierarchy
//! - **Validated operations**: deposits and withdrawals are the only way a
//!   balance changes; every failure is a typed, non-fatal error
//! - **Overdraft handling**: withdrawals may drive a balance negative, but
//!   never below the configured limit
//! - **Interest accrual**: savings balances accrue fractional-rate interest
//!   through the ordinary deposit path
//! - **Operation observers**: a pluggable status-line boundary invoked after
//!   every successful or failed operation
//! - **Storage abstraction**: database-agnostic design with trait-based
//!   storage and an in-memory backend
//! - **Back office**: contact directory, payroll calculation, and order
//!   pricing
//!
//! ## Quick Start
//!
//! ```rust
//! use banking_core::utils::MemoryStore;
//! use banking_core::{AccountPolicy, Bank};
//! use bigdecimal::BigDecimal;
//!
//! # async fn demo() -> banking_core::BankResult<()> {
//! let mut bank = Bank::new(MemoryStore::new());
//! bank.open_account(
//!     "ACC001".to_string(),
//!     "Alice".to_string(),
//!     AccountPolicy::Standard,
//!     BigDecimal::from(1000),
//! )
//! .await?;
//! bank.deposit("ACC001", BigDecimal::from(200)).await?;
//! # Ok(())
//! # }
//! ```

pub mod bank;
pub mod directory;
pub mod payroll;
pub mod pricing;
pub mod puzzles;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use bank::*;
pub use directory::{Contact, ContactDirectory, DirectoryError};
pub use payroll::{
    process_payroll, CommissionEmployee, HourlyEmployee, Payable, PayrollLine, PayrollRun,
    SalariedEmployee,
};
pub use pricing::{ItemQuote, OrderTotal, PriceList, PricingError};
pub use traits::*;
pub use types::*;
