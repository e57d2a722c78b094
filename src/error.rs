//! Defines the errors the computation engines can return.

use time::Date;

/// The errors that may occur while evaluating a computation.
///
/// Every error here is a precondition violation in the caller-supplied
/// data, detected before any computation begins; the engines never return
/// partial results.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A settlement was requested for a trip with no participants.
    ///
    /// The per-person share is undefined without at least one participant,
    /// so callers must guarantee a non-empty participant list before
    /// asking for a settlement.
    #[error("cannot settle a trip with no participants")]
    EmptyParticipants,

    /// An expense names a payer who is not one of the trip's participants.
    #[error("expense payer \"{0}\" is not a participant of the trip")]
    UnknownParticipant(String),

    /// An amount that must be positive was zero or negative.
    #[error("{0} is not a valid amount, amounts must be greater than zero")]
    NonPositiveAmount(f64),

    /// A deposit's annual interest rate was negative.
    #[error("{0} is not a valid interest rate, rates must not be negative")]
    NegativeInterestRate(f64),

    /// A deposit matures on or before the day it starts.
    #[error("maturity date {maturity} is not after the start date {start}")]
    MaturityNotAfterStart {
        /// The deposit's effective start date.
        start: Date,
        /// The deposit's maturity date.
        maturity: Date,
    },

    /// A trip ends before it starts.
    #[error("end date {end} is before the start date {start}")]
    EndBeforeStart {
        /// The first day of the trip.
        start: Date,
        /// The last day of the trip.
        end: Date,
    },

    /// A computation produced a NaN or infinite result.
    ///
    /// Not expected in normal operation given the input guards; failing
    /// loudly here beats handing the caller a silently corrupted money
    /// value.
    #[error("computing the {0} produced a non-finite result")]
    NonFiniteResult(&'static str),
}
