use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::entity::rental::{EndDate, StartDate};

/// The only persisted rental state. Starts as `Pending` and may be
/// explicitly completed; completion is terminal.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum StoredStatus {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "completed")]
    Completed,
}

impl StoredStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoredStatus::Pending => "pending",
            StoredStatus::Completed => "completed",
        }
    }

    /// Applies a requested transition without ever leaving `Completed`.
    pub fn transition(self, requested: StoredStatus) -> StoredStatus {
        match self {
            StoredStatus::Completed => StoredStatus::Completed,
            StoredStatus::Pending => requested,
        }
    }
}

impl FromStr for StoredStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(StoredStatus::Pending),
            "completed" => Ok(StoredStatus::Completed),
            other => Err(format!("unknown stored status: {other}")),
        }
    }
}

/// Status shown to users, derived from the stored status and the rental
/// period on every read.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RentalStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "overdue")]
    Overdue,
    #[serde(rename = "completed")]
    Completed,
}

impl RentalStatus {
    /// Four-state classification with one absorbing state:
    /// completed > overdue > active > pending.
    pub fn resolve(
        stored: &StoredStatus,
        start: &StartDate,
        end: &EndDate,
        now: OffsetDateTime,
    ) -> Self {
        if let StoredStatus::Completed = stored {
            return RentalStatus::Completed;
        }
        if now > *end.as_ref() {
            return RentalStatus::Overdue;
        }
        if now >= *start.as_ref() {
            RentalStatus::Active
        } else {
            RentalStatus::Pending
        }
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use super::*;

    fn period() -> (StartDate, EndDate) {
        (
            StartDate::new(datetime!(2024-01-10 10:00 UTC)),
            EndDate::new(datetime!(2024-01-12 10:00 UTC)),
        )
    }

    #[test]
    fn completed_overrides_dates() {
        let (start, end) = period();
        for now in [
            datetime!(2024-01-09 00:00 UTC),
            datetime!(2024-01-11 00:00 UTC),
            datetime!(2024-02-01 00:00 UTC),
        ] {
            assert_eq!(
                RentalStatus::resolve(&StoredStatus::Completed, &start, &end, now),
                RentalStatus::Completed,
            );
        }
    }

    #[test]
    fn past_end_is_overdue() {
        let (start, end) = period();
        let now = datetime!(2024-01-12 10:00:01 UTC);
        assert_eq!(
            RentalStatus::resolve(&StoredStatus::Pending, &start, &end, now),
            RentalStatus::Overdue,
        );
    }

    #[test]
    fn inside_period_is_active() {
        let (start, end) = period();
        for now in [
            datetime!(2024-01-10 10:00 UTC),
            datetime!(2024-01-11 00:00 UTC),
            datetime!(2024-01-12 10:00 UTC),
        ] {
            assert_eq!(
                RentalStatus::resolve(&StoredStatus::Pending, &start, &end, now),
                RentalStatus::Active,
            );
        }
    }

    #[test]
    fn before_start_is_pending() {
        let (start, end) = period();
        let now = datetime!(2024-01-10 09:59:59 UTC);
        assert_eq!(
            RentalStatus::resolve(&StoredStatus::Pending, &start, &end, now),
            RentalStatus::Pending,
        );
    }

    #[test]
    fn completion_is_monotonic() {
        assert_eq!(
            StoredStatus::Completed.transition(StoredStatus::Pending),
            StoredStatus::Completed,
        );
        assert_eq!(
            StoredStatus::Pending.transition(StoredStatus::Completed),
            StoredStatus::Completed,
        );
    }
}
