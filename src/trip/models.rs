//! Defines the trip and trip-expense data models.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// A group trip whose shared expenses are split between its participants.
///
/// Participants are plain display names, unique within the trip; there is
/// no separate identity record. Expenses reference participants by name,
/// so every [TripExpense::paid_by] must appear in [Trip::participants].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// The ID of the trip.
    pub id: String,
    /// The display name of the trip, e.g. "Goa 2024".
    #[serde(rename = "tripName")]
    pub name: String,
    /// Where the trip went.
    pub destination: String,
    /// The first day of the trip, if known.
    pub start_date: Option<Date>,
    /// The last day of the trip, if known.
    pub end_date: Option<Date>,
    /// The people splitting the trip's expenses.
    pub participants: Vec<String>,
}

impl Trip {
    /// Check the invariants the settlement engine relies on.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyParticipants] if the participant list is empty,
    /// - or [Error::EndBeforeStart] if both dates are set and the trip
    ///   ends before it starts.
    pub fn validate(&self) -> Result<(), Error> {
        if self.participants.is_empty() {
            return Err(Error::EmptyParticipants);
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && end < start
        {
            return Err(Error::EndBeforeStart { start, end });
        }

        Ok(())
    }
}

/// A single shared expense, paid by one participant on behalf of the group.
///
/// Expenses are owned by their trip and deleted with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripExpense {
    /// The ID of the expense.
    pub id: String,
    /// The ID of the trip this expense belongs to.
    pub trip_id: String,
    /// What the money was spent on.
    pub description: String,
    /// The amount paid. Always positive.
    pub amount: f64,
    /// The participant who fronted the money.
    pub paid_by: String,
    /// The day the expense was incurred.
    pub expense_date: Date,
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::Trip;
    use crate::Error;

    fn create_trip() -> Trip {
        Trip {
            id: "trip-1".to_owned(),
            name: "Goa 2024".to_owned(),
            destination: "Goa".to_owned(),
            start_date: Some(date!(2024 - 11 - 01)),
            end_date: Some(date!(2024 - 11 - 05)),
            participants: vec!["Asha".to_owned(), "Ravi".to_owned()],
        }
    }

    #[test]
    fn validate_accepts_well_formed_trip() {
        let trip = create_trip();

        assert_eq!(trip.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_participants() {
        let mut trip = create_trip();
        trip.participants.clear();

        assert_eq!(trip.validate(), Err(Error::EmptyParticipants));
    }

    #[test]
    fn validate_rejects_end_before_start() {
        let mut trip = create_trip();
        trip.end_date = Some(date!(2024 - 10 - 31));

        assert_eq!(
            trip.validate(),
            Err(Error::EndBeforeStart {
                start: date!(2024 - 11 - 01),
                end: date!(2024 - 10 - 31),
            })
        );
    }

    #[test]
    fn validate_accepts_missing_dates() {
        let mut trip = create_trip();
        trip.start_date = None;
        trip.end_date = None;

        assert_eq!(trip.validate(), Ok(()));
    }

    #[test]
    fn trip_uses_the_wire_field_names() {
        let json = r#"{
            "id": "trip-1",
            "tripName": "Goa 2024",
            "destination": "Goa",
            "startDate": "2024-11-01",
            "endDate": "2024-11-05",
            "participants": ["Asha", "Ravi"]
        }"#;

        let trip: Trip = serde_json::from_str(json).expect("could not parse trip JSON");

        assert_eq!(trip, create_trip());
    }
}
