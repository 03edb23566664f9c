//! Text rendering of passes and contacts for the terminal.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::groundstation::{Contact, MissionProfile, Pass, TimeWindow};
use crate::window::PlannedContact;

pub const SEPARATOR: &str = "  --  ";

pub const MISSION_PROFILE_HEADER: &str = "               Name             --   Region      ";

pub const PASS_HEADER: &str = "       Date   --    Start time    --     End time     --  Max contact duration  --  Ground station  --  Mission Profile Region  --  Max Elevation (deg.)";

pub const PLANNED_HEADER: &str = "     Date   --    Start time    --     End time     --  Duration  --  Ground station  --  Mission Profile Region  --  Max Elevation (deg.)";

pub const CONTACT_HEADER: &str = "     Date   --    Start time    --     End time     --  Duration  --  Ground station  --  Mission Profile Name  --  Mission Profile Region  --  Max Elevation (deg.)  -- Contact Status     -- Contact ID";

/// `H:MM:SS`, sub-second part dropped.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// `M:SS`, for durations reported in minutes.
pub fn format_minutes(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    format!("{}:{:02}", total / 60, total % 60)
}

pub fn format_date(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d").to_string()
}

pub fn format_time(time: DateTime<Utc>) -> String {
    time.format("%H:%M:%S%:z").to_string()
}

pub fn format_elevation(elevation_deg: f64) -> String {
    format!("{:?}", elevation_deg)
}

/// Banner line framing a listing.
pub fn banner(title: &str) -> String {
    format!("\n{:=^150}", title)
}

pub fn mission_profile_choice(profile: &MissionProfile) -> String {
    format!("{:<30}{}{}", profile.name, SEPARATOR, profile.region)
}

pub fn pass_row(pass: &Pass) -> String {
    [
        format_date(pass.start),
        format_time(pass.start),
        format_time(pass.end),
        format!("{:<20}", format_duration(pass.duration())),
        format!("{:<14}", pass.ground_station),
        format!("{:<22}", pass.region),
        format_elevation(pass.max_elevation_deg),
    ]
    .join(SEPARATOR)
}

pub fn planned_row(planned: &PlannedContact) -> String {
    [
        format_date(planned.start),
        format_time(planned.start),
        format_time(planned.end),
        format!("{:<8}", format_duration(planned.duration())),
        format!("{:<14}", planned.pass.ground_station),
        format!("{:<22}", planned.pass.region),
        format_elevation(planned.pass.max_elevation_deg),
    ]
    .join(SEPARATOR)
}

pub fn contact_row(contact: &Contact, mission_profile_name: &str) -> String {
    [
        format_date(contact.pass.start),
        format_time(contact.pass.start),
        format_time(contact.pass.end),
        format!("{:<8}", format_duration(contact.duration())),
        format!("{:<14}", contact.pass.ground_station),
        format!("{:<20}", mission_profile_name),
        format!("{:<22}", contact.pass.region),
        format!("{:<20}", format_elevation(contact.pass.max_elevation_deg)),
        format!("{:<16}", contact.status.to_string()),
        contact.contact_id.clone(),
    ]
    .join(SEPARATOR)
}

#[derive(Debug, Serialize)]
pub struct ContactListing<'a> {
    #[serde(flatten)]
    pub contact: &'a Contact,
    pub mission_profile_name: &'a str,
}

pub fn contacts_json(listings: &[ContactListing<'_>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(listings)
}
