//! Reminder status for a service visit: ok, due soon or overdue.
//!
//! The status is derived on every read from the visit's next-due date and mileage,
//! the vehicle's current mileage and today's date. It is never stored.

use crate::consts::{DUE_SOON_DAYS, DUE_SOON_DISTANCE};
use crate::prelude::*;
use crate::{CanonicalDate, InvalidDateError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Severity of a service reminder, ordered `Ok < DueSoon < Overdue`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum DueStatus {
    #[default]
    #[display(fmt = "ok")]
    Ok,
    #[display(fmt = "dueSoon")]
    DueSoon,
    #[display(fmt = "overdue")]
    Overdue,
}

/// Status of a service visit together with the signal that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceDueState {
    pub status: DueStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ServiceDueState {
    fn new(status: DueStatus, reason: String) -> Self {
        Self {
            status,
            reason: Some(reason),
        }
    }

    pub const fn is_ok(&self) -> bool {
        matches!(self.status, DueStatus::Ok)
    }
}

/// How close a next-due date or mileage must be to count as due soon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DueThresholds {
    /// Calendar days before the due date
    pub soon_days:     u32,
    /// Kilometres before the due mileage
    pub soon_distance: u32,
}

impl Default for DueThresholds {
    fn default() -> Self {
        Self {
            soon_days:     DUE_SOON_DAYS,
            soon_distance: DUE_SOON_DISTANCE,
        }
    }
}

/// Classifies a service visit.
///
/// The date and mileage signals are judged separately and the more severe one wins.
/// When both are equally severe the date reason is reported. A missing next-due value
/// or an unknown current mileage contributes no signal.
pub fn evaluate_service_due(
    next_due_date: Option<CanonicalDate>,
    next_due_mileage: Option<u32>,
    current_mileage: Option<u32>,
    today: CanonicalDate,
    thresholds: &DueThresholds,
) -> ServiceDueState {
    let by_date = next_due_date.and_then(|due| date_signal(due, today, thresholds));
    let by_mileage = next_due_mileage
        .zip(current_mileage)
        .and_then(|(due, current)| mileage_signal(due, current, thresholds));

    let state = match (by_date, by_mileage) {
        (Some(date), Some(mileage)) if mileage.status > date.status => mileage,
        (Some(date), _) => date,
        (None, Some(mileage)) => mileage,
        (None, None) => ServiceDueState::default(),
    };

    debug!(
        ?next_due_date,
        ?next_due_mileage,
        ?current_mileage,
        %today,
        status = %state.status,
        "evaluated service due state"
    );
    state
}

/// [`evaluate_service_due`] with the default thresholds of 7 days and 500 km.
pub fn evaluate_service_due_default(
    next_due_date: Option<CanonicalDate>,
    next_due_mileage: Option<u32>,
    current_mileage: Option<u32>,
    today: CanonicalDate,
) -> ServiceDueState {
    evaluate_service_due(
        next_due_date,
        next_due_mileage,
        current_mileage,
        today,
        &DueThresholds::default(),
    )
}

/// [`evaluate_service_due`] for a next-due date held as a canonical string, where `""`
/// means no date was recorded.
///
/// # Errors
/// Returns `InvalidDateError` if `next_due_date` is non-empty but not a real date.
pub fn evaluate_service_due_str(
    next_due_date: &str,
    next_due_mileage: Option<u32>,
    current_mileage: Option<u32>,
    today: CanonicalDate,
    thresholds: &DueThresholds,
) -> Result<ServiceDueState, InvalidDateError> {
    let next_due_date = CanonicalDate::parse_optional(next_due_date)?;
    Ok(evaluate_service_due(
        next_due_date,
        next_due_mileage,
        current_mileage,
        today,
        thresholds,
    ))
}

/// `None` when the date gives no reason for concern.
fn date_signal(due: CanonicalDate, today: CanonicalDate, thresholds: &DueThresholds) -> Option<ServiceDueState> {
    if due < today {
        return Some(ServiceDueState::new(
            DueStatus::Overdue,
            format!("service date {due} has passed"),
        ));
    }

    let days_left = today.days_until(&due);
    (days_left <= i64::from(thresholds.soon_days)).then(|| {
        let reason = match days_left {
            0 => format!("service is due today ({due})"),
            1 => format!("service is due tomorrow ({due})"),
            n => format!("service is due in {n} days ({due})"),
        };
        ServiceDueState::new(DueStatus::DueSoon, reason)
    })
}

fn mileage_signal(due: u32, current: u32, thresholds: &DueThresholds) -> Option<ServiceDueState> {
    if current > due {
        return Some(ServiceDueState::new(
            DueStatus::Overdue,
            format!("mileage exceeded by {} km", current - due),
        ));
    }

    let remaining = due - current;
    (remaining <= thresholds.soon_distance).then(|| {
        ServiceDueState::new(DueStatus::DueSoon, format!("{remaining} km remaining"))
    })
}
