use crate::groundstation::{
    ApiResult, Contact, ContactQuery, GroundStation, MissionProfile, Pass, ReservationRequest,
    Satellite,
};

/// The subset of the Ground Station service this tool talks to.
///
/// Calls are awaited one at a time; implementations do not need to be `Send`.
#[allow(async_fn_in_trait)]
pub trait GroundStationApi {
    async fn list_satellites(&self) -> ApiResult<Vec<Satellite>>;

    async fn list_mission_profiles(&self) -> ApiResult<Vec<MissionProfile>>;

    /// Ground stations the satellite is onboarded to.
    async fn list_ground_stations(&self, satellite_id: &str) -> ApiResult<Vec<GroundStation>>;

    /// `AVAILABLE` contacts, i.e. passes that can still be reserved.
    async fn list_passes(&self, query: &ContactQuery) -> ApiResult<Vec<Pass>>;

    async fn list_contacts(&self, query: &ContactQuery) -> ApiResult<Vec<Contact>>;

    /// Returns the id of the new contact.
    async fn reserve_contact(&self, request: &ReservationRequest) -> ApiResult<String>;

    /// Returns the id of the cancelled contact.
    async fn cancel_contact(&self, contact_id: &str) -> ApiResult<String>;

    async fn mission_profile_name(&self, mission_profile_id: &str) -> ApiResult<String>;
}
