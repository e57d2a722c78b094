//! Group-trip expense splitting.
//!
//! This module contains everything related to trips:
//! - The [Trip] and [TripExpense] models supplied by the trip store
//! - The settlement engine that nets out who owes whom after a trip

mod models;
mod settlement;

pub use models::{Trip, TripExpense};
pub use settlement::{BALANCE_EPSILON, Settlement, Transfer, compute_settlement};
