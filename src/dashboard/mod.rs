//! Dashboard aggregation.
//!
//! Provides the computations behind the overview page's trend charts and
//! summary cards: calendar-month bucketing of event streams and top
//! spending categories.

mod aggregation;
mod summary;

pub use aggregation::{DEFAULT_WINDOW_MONTHS, bucket_by_month};
pub use summary::{CategoryTotal, deposit_addition_events, top_expense_categories};
