//! Defines the deposit data models.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, month::MonthKey};

/// Whether a deposit is a single lump sum or a monthly installment plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepositType {
    /// A fixed deposit: one principal earning compound interest until
    /// maturity.
    #[serde(rename = "FD")]
    Fixed,
    /// A recurring deposit: the same amount deposited every month from the
    /// start date until maturity, earning quarterly-compounded interest.
    #[serde(rename = "RD")]
    Recurring,
}

/// A bank deposit, either fixed or recurring.
///
/// For a fixed deposit, `amount` is the principal; for a recurring
/// deposit, it is the monthly installment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    /// The ID of the deposit.
    pub id: String,
    /// The bank holding the deposit.
    pub bank_name: String,
    /// The principal (fixed) or monthly installment (recurring). Always
    /// positive.
    pub amount: f64,
    /// The annual interest rate as a percentage, e.g. `7.5`. Never
    /// negative.
    pub interest_rate: f64,
    /// The day the deposit matures.
    pub maturity_date: Date,
    /// Whether the deposit is fixed or recurring.
    pub deposit_type: DepositType,
    /// The day the deposit was opened at the bank, when recorded.
    pub start_date: Option<Date>,
    /// The day the record was created. Used as the start-date fallback.
    pub created_at: Date,
}

impl Deposit {
    /// The deposit's effective start: the start date when recorded,
    /// otherwise the day the record was created.
    pub fn start(&self) -> Date {
        self.start_date.unwrap_or(self.created_at)
    }

    /// Check the invariants a well-formed deposit record upholds.
    ///
    /// The accrual computations only require the amount and rate checks
    /// (degenerate date ranges clamp to empty results instead of
    /// failing), so this is for callers accepting new records.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NonPositiveAmount] if the amount is zero or negative,
    /// - or [Error::NegativeInterestRate] if the rate is negative,
    /// - or [Error::MaturityNotAfterStart] if the deposit matures on or
    ///   before its effective start.
    pub fn validate(&self) -> Result<(), Error> {
        self.check_terms()?;

        if self.maturity_date <= self.start() {
            return Err(Error::MaturityNotAfterStart {
                start: self.start(),
                maturity: self.maturity_date,
            });
        }

        Ok(())
    }

    /// The subset of [Deposit::validate] the computations depend on.
    pub(crate) fn check_terms(&self) -> Result<(), Error> {
        if self.amount <= 0.0 {
            return Err(Error::NonPositiveAmount(self.amount));
        }

        if self.interest_rate < 0.0 {
            return Err(Error::NegativeInterestRate(self.interest_rate));
        }

        Ok(())
    }
}

/// One month's installment of a recurring deposit.
///
/// Derived on demand from the deposit record, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    /// The 1-based position of the installment in the schedule.
    pub sequence_number: u32,
    /// The calendar month the installment falls due in.
    pub month: MonthKey,
    /// The installment amount.
    pub amount: f64,
    /// Whether the installment's month has arrived yet.
    pub status: InstallmentStatus,
}

/// Whether an installment has been deposited yet.
///
/// Purely a function of the calendar: an installment counts as paid once
/// the first day of its month is on or before today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallmentStatus {
    /// The installment's month has arrived.
    Paid,
    /// The installment's month is still in the future.
    Pending,
}
