//! Vehicle and service visit records as exchanged with the API.
//!
//! Optional dates travel as canonical strings where `""` (or `null`) means unset.

use crate::service::{DueThresholds, ServiceDueState, evaluate_service_due};
use crate::CanonicalDate;
use serde::{Deserialize, Serialize};

/// A vehicle registered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVehicle {
    pub id:              String,
    pub vehicle_type:    String,
    pub brand:           String,
    pub model:           String,
    #[serde(default)]
    pub generation:      Option<String>,
    #[serde(default)]
    pub current_mileage: Option<u32>,
    #[serde(default, with = "optional_date")]
    pub purchase_date:   Option<CanonicalDate>,
}

/// One logged visit to the workshop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceVisit {
    pub id:               String,
    pub vehicle_id:       String,
    pub service_date:     CanonicalDate,
    #[serde(default)]
    pub mileage:          Option<u32>,
    #[serde(default)]
    pub oil_changed:      bool,
    #[serde(default)]
    pub filter_changed:   bool,
    #[serde(default, with = "optional_date")]
    pub next_due_date:    Option<CanonicalDate>,
    #[serde(default)]
    pub next_due_mileage: Option<u32>,
    #[serde(default)]
    pub notes:            Option<String>,
}

impl ServiceVisit {
    /// Reminder status of this visit for `vehicle` as of `today`.
    pub fn due_state(
        &self,
        vehicle: &UserVehicle,
        today: CanonicalDate,
        thresholds: &DueThresholds,
    ) -> ServiceDueState {
        debug_assert_eq!(self.vehicle_id, vehicle.id);

        evaluate_service_due(
            self.next_due_date,
            self.next_due_mileage,
            vehicle.current_mileage,
            today,
            thresholds,
        )
    }
}

// serde's `with` helpers take `&Option<T>`
#[allow(clippy::ref_option)]
mod optional_date {
    use crate::CanonicalDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<CanonicalDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<CanonicalDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => CanonicalDate::parse_optional(&s).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
