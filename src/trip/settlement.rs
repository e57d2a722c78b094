//! Settlement computation for a trip's shared expenses.
//!
//! Every participant owes an equal share of the trip's total; whoever paid
//! more than their share is owed the difference. Transfers are produced by
//! greedily matching the largest creditor against the largest debtor,
//! which keeps the list short and the computation O(n log n). The greedy
//! sweep is not provably minimal in transfer count for every balance
//! distribution, and deliberately so: callers depend on its exact,
//! deterministic output.

use std::collections::HashMap;

use serde::Serialize;

use crate::{Error, trip::TripExpense};

/// Balances and transfers smaller than this are treated as settled.
///
/// Absorbs the rounding error that accumulates when currency amounts are
/// divided and re-summed as floats.
pub const BALANCE_EPSILON: f64 = 0.01;

/// A single peer-to-peer payment that settles part of a trip's debts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transfer {
    /// The participant making the payment.
    pub from: String,
    /// The participant receiving the payment.
    pub to: String,
    /// The amount to pay. Always positive.
    pub amount: f64,
}

/// The outcome of settling a trip's expenses.
///
/// Derived fresh on every request and never stored; expenses may be added,
/// edited or removed between requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    /// The sum of all expense amounts.
    pub total_expense: f64,
    /// The equal share of the total that each participant owes.
    pub per_person_share: f64,
    /// Each participant's net position after expenses: negative owes money
    /// into the pool, positive is owed money by the pool. The values sum
    /// to zero within [BALANCE_EPSILON].
    pub balances: HashMap<String, f64>,
    /// The payments that settle every balance.
    pub transfers: Vec<Transfer>,
}

/// Split a trip's expenses equally and compute the transfers that settle
/// every participant's debt.
///
/// The inputs are never modified; the sweep works on local copies of the
/// balances. Participants with equal balances settle in participant-list
/// order, so the output is deterministic.
///
/// # Errors
/// This function will return a:
/// - [Error::EmptyParticipants] if `participants` is empty,
/// - or [Error::NonPositiveAmount] if any expense amount is zero or
///   negative,
/// - or [Error::UnknownParticipant] if any expense's payer is missing from
///   `participants`.
pub fn compute_settlement(
    participants: &[String],
    expenses: &[TripExpense],
) -> Result<Settlement, Error> {
    if participants.is_empty() {
        return Err(Error::EmptyParticipants);
    }

    for expense in expenses {
        if expense.amount <= 0.0 {
            return Err(Error::NonPositiveAmount(expense.amount));
        }

        if !participants.contains(&expense.paid_by) {
            return Err(Error::UnknownParticipant(expense.paid_by.clone()));
        }
    }

    let total_expense: f64 = expenses.iter().map(|expense| expense.amount).sum();
    let per_person_share = total_expense / participants.len() as f64;

    // Everyone starts owing their share, then is credited with what they
    // paid. Accumulated in participant-list order so ties sort stably.
    let mut balances: Vec<(String, f64)> = participants
        .iter()
        .map(|participant| (participant.clone(), -per_person_share))
        .collect();

    for expense in expenses {
        let balance = balances
            .iter_mut()
            .find(|(participant, _)| *participant == expense.paid_by)
            .map(|(_, balance)| balance)
            .expect("payer membership checked above");
        *balance += expense.amount;
    }

    // The sweep mutates these copies; `balances` itself goes into the
    // result untouched.
    let mut creditors: Vec<(String, f64)> = balances
        .iter()
        .filter(|(_, balance)| *balance > BALANCE_EPSILON)
        .cloned()
        .collect();
    creditors.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut debtors: Vec<(String, f64)> = balances
        .iter()
        .filter(|(_, balance)| *balance < -BALANCE_EPSILON)
        .cloned()
        .collect();
    debtors.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut transfers = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < creditors.len() && j < debtors.len() {
        let amount = creditors[i].1.min(debtors[j].1.abs());

        if amount > BALANCE_EPSILON {
            transfers.push(Transfer {
                from: debtors[j].0.clone(),
                to: creditors[i].0.clone(),
                amount,
            });
        }

        creditors[i].1 -= amount;
        debtors[j].1 += amount;

        if creditors[i].1.abs() < BALANCE_EPSILON {
            i += 1;
        }
        if debtors[j].1.abs() < BALANCE_EPSILON {
            j += 1;
        }
    }

    tracing::debug!(
        "settled {} expenses across {} participants with {} transfers",
        expenses.len(),
        participants.len(),
        transfers.len()
    );

    Ok(Settlement {
        total_expense,
        per_person_share,
        balances: balances.into_iter().collect(),
        transfers,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use time::macros::date;

    use super::{BALANCE_EPSILON, compute_settlement};
    use crate::{Error, trip::TripExpense};

    fn participants(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_owned()).collect()
    }

    fn expense(amount: f64, paid_by: &str) -> TripExpense {
        TripExpense {
            id: "expense-1".to_owned(),
            trip_id: "trip-1".to_owned(),
            description: "test".to_owned(),
            amount,
            paid_by: paid_by.to_owned(),
            expense_date: date!(2024 - 11 - 02),
        }
    }

    #[test]
    fn splits_a_single_payer_between_everyone() {
        let participants = participants(&["A", "B", "C"]);
        let expenses = vec![expense(300.0, "A")];

        let settlement = compute_settlement(&participants, &expenses).unwrap();

        assert_eq!(settlement.total_expense, 300.0);
        assert_eq!(settlement.per_person_share, 100.0);
        assert_eq!(settlement.balances["A"], 200.0);
        assert_eq!(settlement.balances["B"], -100.0);
        assert_eq!(settlement.balances["C"], -100.0);

        assert_eq!(settlement.transfers.len(), 2);
        assert_eq!(settlement.transfers[0].from, "B");
        assert_eq!(settlement.transfers[0].to, "A");
        assert_eq!(settlement.transfers[0].amount, 100.0);
        assert_eq!(settlement.transfers[1].from, "C");
        assert_eq!(settlement.transfers[1].to, "A");
        assert_eq!(settlement.transfers[1].amount, 100.0);
    }

    #[test]
    fn balances_sum_to_zero() {
        let participants = participants(&["A", "B", "C", "D"]);
        let expenses = vec![
            expense(123.45, "A"),
            expense(67.89, "B"),
            expense(250.0, "A"),
            expense(10.01, "D"),
        ];

        let settlement = compute_settlement(&participants, &expenses).unwrap();

        let sum: f64 = settlement.balances.values().sum();
        assert!(sum.abs() < BALANCE_EPSILON, "balances sum to {sum}");
    }

    #[test]
    fn transfers_drive_every_balance_to_zero() {
        let participants = participants(&["A", "B", "C", "D", "E"]);
        let expenses = vec![
            expense(500.0, "A"),
            expense(120.5, "B"),
            expense(33.25, "C"),
            expense(600.75, "E"),
        ];

        let settlement = compute_settlement(&participants, &expenses).unwrap();

        let mut balances: HashMap<String, f64> = settlement.balances.clone();
        for transfer in &settlement.transfers {
            *balances.get_mut(&transfer.from).unwrap() += transfer.amount;
            *balances.get_mut(&transfer.to).unwrap() -= transfer.amount;
        }

        for (participant, balance) in balances {
            assert!(
                balance.abs() < BALANCE_EPSILON,
                "{participant} left with {balance}"
            );
        }
    }

    #[test]
    fn never_produces_a_self_transfer() {
        let participants = participants(&["A", "B", "C"]);
        let expenses = vec![expense(90.0, "A"), expense(45.0, "B"), expense(15.0, "C")];

        let settlement = compute_settlement(&participants, &expenses).unwrap();

        assert!(
            settlement
                .transfers
                .iter()
                .all(|transfer| transfer.from != transfer.to)
        );
    }

    #[test]
    fn no_transfers_when_everyone_paid_their_share() {
        let participants = participants(&["A", "B"]);
        let expenses = vec![expense(50.0, "A"), expense(50.0, "B")];

        let settlement = compute_settlement(&participants, &expenses).unwrap();

        assert!(settlement.transfers.is_empty());
    }

    #[test]
    fn no_transfers_for_a_trip_without_expenses() {
        let participants = participants(&["A", "B"]);

        let settlement = compute_settlement(&participants, &[]).unwrap();

        assert_eq!(settlement.total_expense, 0.0);
        assert_eq!(settlement.per_person_share, 0.0);
        assert!(settlement.transfers.is_empty());
    }

    #[test]
    fn single_participant_owes_nobody() {
        let participants = participants(&["A"]);
        let expenses = vec![expense(300.0, "A")];

        let settlement = compute_settlement(&participants, &expenses).unwrap();

        assert_eq!(settlement.per_person_share, 300.0);
        assert!(settlement.transfers.is_empty());
    }

    #[test]
    fn fails_on_empty_participants() {
        let result = compute_settlement(&[], &[expense(10.0, "A")]);

        assert_eq!(result, Err(Error::EmptyParticipants));
    }

    #[test]
    fn fails_on_unknown_payer() {
        let participants = participants(&["A", "B"]);
        let expenses = vec![expense(10.0, "Mallory")];

        let result = compute_settlement(&participants, &expenses);

        assert_eq!(result, Err(Error::UnknownParticipant("Mallory".to_owned())));
    }

    #[test]
    fn fails_on_non_positive_amount() {
        let participants = participants(&["A", "B"]);

        assert_eq!(
            compute_settlement(&participants, &[expense(0.0, "A")]),
            Err(Error::NonPositiveAmount(0.0))
        );
        assert_eq!(
            compute_settlement(&participants, &[expense(-5.0, "A")]),
            Err(Error::NonPositiveAmount(-5.0))
        );
    }

    #[test]
    fn chains_transfers_when_one_debtor_covers_multiple_creditors() {
        // C owes 66.67: the largest creditor (A, owed 38.33) is paid first,
        // then the remainder goes to B.
        let participants = participants(&["A", "B", "C"]);
        let expenses = vec![expense(115.0, "A"), expense(105.0, "B"), expense(10.0, "C")];

        let settlement = compute_settlement(&participants, &expenses).unwrap();

        assert_eq!(settlement.transfers.len(), 2);
        assert_eq!(settlement.transfers[0].from, "C");
        assert_eq!(settlement.transfers[0].to, "A");
        assert!((settlement.transfers[0].amount - 38.33).abs() < BALANCE_EPSILON);
        assert_eq!(settlement.transfers[1].from, "C");
        assert_eq!(settlement.transfers[1].to, "B");
        assert!((settlement.transfers[1].amount - 28.33).abs() < BALANCE_EPSILON);
    }

    #[test]
    fn equal_debtors_settle_in_participant_order() {
        let participants = participants(&["Zoe", "Amir", "Lena"]);
        let expenses = vec![expense(300.0, "Zoe")];

        let settlement = compute_settlement(&participants, &expenses).unwrap();

        assert_eq!(settlement.transfers[0].from, "Amir");
        assert_eq!(settlement.transfers[1].from, "Lena");
    }
}
