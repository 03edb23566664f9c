use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::groundstation::{Contact, ContactStatus, Pass};

pub const TEST_DAY: (i32, u32, u32) = (2024, 5, 1);

/// `hh:mm:ss` on the test day, in UTC.
pub fn utc(time: &str) -> DateTime<Utc> {
    let (y, m, d) = TEST_DAY;
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_time(NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap())
        .and_utc()
}

pub fn pass_at(start: &str, end: &str, max_elevation_deg: f64) -> Pass {
    Pass {
        start: utc(start),
        end: utc(end),
        max_elevation_deg,
        ground_station: "Ohio 1".into(),
        region: "us-east-2".into(),
    }
}

pub fn contact_at(id: &str, start: &str, end: &str, ground_station: &str) -> Contact {
    let mut pass = pass_at(start, end, 42.5);
    pass.ground_station = ground_station.into();
    Contact {
        contact_id: id.into(),
        status: ContactStatus::Scheduled,
        mission_profile_arn:
            "arn:aws:groundstation:us-east-2:123456789012:mission-profile/mp-1".into(),
        pass,
    }
}
