use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use strum_macros::{AsRefStr, Display};

/// Anything with a start and an end in time.
pub trait TimeWindow {
    fn start(&self) -> DateTime<Utc>;
    fn end(&self) -> DateTime<Utc>;

    fn duration(&self) -> Duration {
        self.end() - self.start()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Satellite {
    pub satellite_id: String,
    pub satellite_arn: String,
    pub norad_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionProfile {
    pub mission_profile_arn: String,
    pub name: String,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundStation {
    pub name: String,
}

/// A visibility window of a satellite from one ground station
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pass {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub max_elevation_deg: f64,
    pub ground_station: String,
    pub region: String,
}

impl TimeWindow for Pass {
    fn start(&self) -> DateTime<Utc> {
        self.start
    }

    fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactStatus {
    Available,
    Scheduling,
    Scheduled,
    Prepass,
    Pass,
    Postpass,
    Completed,
    Cancelling,
    Cancelled,
    AwsCancelled,
    Failed,
    AwsFailed,
    FailedToSchedule,
    Unknown,
}

impl ContactStatus {
    /// Statuses shown by the contact listing.
    pub const HISTORY: [ContactStatus; 8] = [
        ContactStatus::Scheduled,
        ContactStatus::Scheduling,
        ContactStatus::FailedToSchedule,
        ContactStatus::AwsCancelled,
        ContactStatus::Cancelled,
        ContactStatus::Completed,
        ContactStatus::Failed,
        ContactStatus::AwsFailed,
    ];

    pub fn from_api(status: &str) -> Self {
        match status {
            "AVAILABLE" => ContactStatus::Available,
            "SCHEDULING" => ContactStatus::Scheduling,
            "SCHEDULED" => ContactStatus::Scheduled,
            "PREPASS" => ContactStatus::Prepass,
            "PASS" => ContactStatus::Pass,
            "POSTPASS" => ContactStatus::Postpass,
            "COMPLETED" => ContactStatus::Completed,
            "CANCELLING" => ContactStatus::Cancelling,
            "CANCELLED" => ContactStatus::Cancelled,
            "AWS_CANCELLED" => ContactStatus::AwsCancelled,
            "FAILED" => ContactStatus::Failed,
            "AWS_FAILED" => ContactStatus::AwsFailed,
            "FAILED_TO_SCHEDULE" => ContactStatus::FailedToSchedule,
            _ => ContactStatus::Unknown,
        }
    }
}

/// A reserved or historical use of a pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub contact_id: String,
    pub status: ContactStatus,
    pub mission_profile_arn: String,
    #[serde(flatten)]
    pub pass: Pass,
}

impl TimeWindow for Contact {
    fn start(&self) -> DateTime<Utc> {
        self.pass.start
    }

    fn end(&self) -> DateTime<Utc> {
        self.pass.end
    }
}

/// Parameters of a ListContacts call for a single ground station.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactQuery {
    pub satellite_arn: String,
    pub mission_profile_arn: String,
    pub ground_station: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub statuses: Vec<ContactStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationRequest {
    pub satellite_arn: String,
    pub mission_profile_arn: String,
    pub ground_station: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Resource id part of an ARN such as
/// `arn:aws:groundstation:us-east-2:123456789012:mission-profile/<id>`.
pub fn arn_resource_id(arn: &str) -> Option<&str> {
    arn.split('/').nth(1).filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_id_from_arn() {
        let arn = "arn:aws:groundstation:us-east-2:123456789012:mission-profile/c6a3d9d3-1f0e";
        assert_eq!(arn_resource_id(arn), Some("c6a3d9d3-1f0e"));
        assert_eq!(arn_resource_id("not-an-arn"), None);
        assert_eq!(arn_resource_id("arn:aws:groundstation:x:y:satellite/"), None);
    }

    #[test]
    fn status_names_match_api() {
        assert_eq!(ContactStatus::AwsCancelled.to_string(), "AWS_CANCELLED");
        assert_eq!(ContactStatus::FailedToSchedule.as_ref(), "FAILED_TO_SCHEDULE");
        for status in ContactStatus::HISTORY {
            assert_eq!(ContactStatus::from_api(status.as_ref()), status);
        }
        assert_eq!(ContactStatus::from_api("SOMETHING_NEW"), ContactStatus::Unknown);
    }
}
