use std::cell::RefCell;

use chrono::NaiveDate;

use crate::groundstation::{
    arn_resource_id, ApiError, ApiResult, Contact, ContactQuery, GroundStation, GroundStationApi,
    MissionProfile, Pass, ReservationRequest, Satellite,
};
use crate::window::WindowRules;

/// 2024-05-01 with six days either way.
pub fn rules() -> WindowRules {
    WindowRules {
        today: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        horizon_days: 6,
        history_days: 6,
    }
}

/// In-memory account. Queries are answered from the stored passes and contacts
/// and every mutating call is recorded.
#[derive(Debug, Default)]
pub struct FakeApi {
    pub satellites: Vec<Satellite>,
    pub profiles: Vec<MissionProfile>,
    pub stations: Vec<GroundStation>,
    pub passes: Vec<Pass>,
    pub contacts: Vec<Contact>,
    pass_queries: RefCell<Vec<ContactQuery>>,
    contact_queries: RefCell<Vec<ContactQuery>>,
    reservations: RefCell<Vec<ReservationRequest>>,
    cancellations: RefCell<Vec<String>>,
    profile_lookups: RefCell<usize>,
}

impl FakeApi {
    pub const SATELLITE_ARN: &'static str =
        "arn:aws:groundstation:us-east-2:123456789012:satellite/sat-1";
    pub const PROFILE_ARN: &'static str =
        "arn:aws:groundstation:us-east-2:123456789012:mission-profile/mp-1";

    /// One satellite, one mission profile and two ground stations.
    pub fn ohio() -> Self {
        Self {
            satellites: vec![Satellite {
                satellite_id: "sat-1".into(),
                satellite_arn: Self::SATELLITE_ARN.into(),
                norad_id: 12345,
            }],
            profiles: vec![MissionProfile {
                mission_profile_arn: Self::PROFILE_ARN.into(),
                name: "downlink".into(),
                region: "us-east-2".into(),
            }],
            stations: ["Ohio 1", "Oregon 1"]
                .into_iter()
                .map(|name| GroundStation { name: name.into() })
                .collect(),
            ..Default::default()
        }
    }

    pub fn add_pass(&mut self, pass: Pass) {
        self.passes.push(pass);
    }

    pub fn add_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    pub fn pass_queries(&self) -> Vec<ContactQuery> {
        self.pass_queries.borrow().clone()
    }

    pub fn contact_queries(&self) -> Vec<ContactQuery> {
        self.contact_queries.borrow().clone()
    }

    pub fn reservations(&self) -> Vec<ReservationRequest> {
        self.reservations.borrow().clone()
    }

    pub fn cancellations(&self) -> Vec<String> {
        self.cancellations.borrow().clone()
    }

    pub fn profile_lookups(&self) -> usize {
        *self.profile_lookups.borrow()
    }
}

fn in_window(query: &ContactQuery, pass: &Pass) -> bool {
    pass.ground_station == query.ground_station
        && pass.start >= query.start
        && pass.end <= query.end
}

impl GroundStationApi for FakeApi {
    async fn list_satellites(&self) -> ApiResult<Vec<Satellite>> {
        Ok(self.satellites.clone())
    }

    async fn list_mission_profiles(&self) -> ApiResult<Vec<MissionProfile>> {
        Ok(self.profiles.clone())
    }

    async fn list_ground_stations(&self, _satellite_id: &str) -> ApiResult<Vec<GroundStation>> {
        Ok(self.stations.clone())
    }

    async fn list_passes(&self, query: &ContactQuery) -> ApiResult<Vec<Pass>> {
        self.pass_queries.borrow_mut().push(query.clone());
        Ok(self
            .passes
            .iter()
            .filter(|p| in_window(query, p))
            .cloned()
            .collect())
    }

    async fn list_contacts(&self, query: &ContactQuery) -> ApiResult<Vec<Contact>> {
        self.contact_queries.borrow_mut().push(query.clone());
        Ok(self
            .contacts
            .iter()
            .filter(|c| in_window(query, &c.pass) && query.statuses.contains(&c.status))
            .cloned()
            .collect())
    }

    async fn reserve_contact(&self, request: &ReservationRequest) -> ApiResult<String> {
        let mut reservations = self.reservations.borrow_mut();
        reservations.push(request.clone());
        Ok(format!("contact-{}", reservations.len()))
    }

    async fn cancel_contact(&self, contact_id: &str) -> ApiResult<String> {
        self.cancellations.borrow_mut().push(contact_id.to_string());
        Ok(contact_id.to_string())
    }

    async fn mission_profile_name(&self, mission_profile_id: &str) -> ApiResult<String> {
        *self.profile_lookups.borrow_mut() += 1;
        self.profiles
            .iter()
            .find(|p| arn_resource_id(&p.mission_profile_arn) == Some(mission_profile_id))
            .map(|p| p.name.clone())
            .ok_or(ApiError::MissingField("name"))
    }
}
