//! Fixed and recurring bank deposits.
//!
//! This module contains everything related to deposits:
//! - The [Deposit] model supplied by the deposit store
//! - Maturity projection and accrued-value computations
//! - Installment schedules for recurring deposits

mod accrual;
mod models;
mod schedule;

pub use accrual::{current_accrued, installments_deposited, project_maturity};
pub use models::{Deposit, DepositType, Installment, InstallmentStatus};
pub use schedule::{installment_schedule, installments_due, term_progress};
