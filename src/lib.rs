//! The computational core of the Wealthtracker personal-finance app.
//!
//! The surrounding web API and UI are thin CRUD layers over stores; this
//! crate holds the parts that actually compute something:
//!
//! - [`trip`] splits a group trip's shared expenses into the peer-to-peer
//!   transfers that settle everyone's debts.
//! - [`deposit`] projects fixed and recurring deposit maturity values and
//!   derives installment schedules.
//! - [`dashboard`] buckets time-stamped financial events into
//!   calendar-month totals for the trend charts and summary cards.
//!
//! Every function is a pure computation over caller-supplied data: no
//! storage, no shared state, and no clock reads ("today" is always passed
//! in), so concurrent callers need no coordination and results always
//! reflect the current inputs rather than a cache.

#![warn(missing_docs)]

pub mod dashboard;
pub mod deposit;
mod error;
pub mod month;
pub mod trip;

pub use error::Error;
