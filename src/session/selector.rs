use crate::display::{mission_profile_choice, MISSION_PROFILE_HEADER};
use crate::groundstation::{
    Contact, ContactQuery, ContactStatus, GroundStationApi, MissionProfile, Pass, Satellite,
};
use crate::prompt::{validate, Prompter};
use crate::session::{Session, SessionResult};
use crate::window::{merge_by_start, ContactWindow, WindowKind};

const EXIT: &str = "Exit";

/// Everything the operator picked for one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub satellite_arn: String,
    pub mission_profile_arn: String,
    pub mission_profile_region: String,
    pub ground_stations: Vec<String>,
    pub window: ContactWindow,
}

impl Selection {
    pub fn query(&self, ground_station: &str, statuses: &[ContactStatus]) -> ContactQuery {
        ContactQuery {
            satellite_arn: self.satellite_arn.clone(),
            mission_profile_arn: self.mission_profile_arn.clone(),
            ground_station: ground_station.to_string(),
            start: self.window.start_utc(),
            end: self.window.end_utc(),
            statuses: statuses.to_vec(),
        }
    }
}

impl<A: GroundStationApi, P: Prompter> Session<'_, A, P> {
    /// Walks the operator through satellite, mission profile, ground stations
    /// and date window. `None` means the operator backed out.
    pub(super) async fn select(&mut self, kind: WindowKind) -> SessionResult<Option<Selection>> {
        let Some(satellite) = self.choose_satellite().await? else {
            return Ok(None);
        };
        let Some(profile) = self.choose_mission_profile().await? else {
            return Ok(None);
        };
        let Some(ground_stations) = self.choose_ground_stations(&satellite).await? else {
            return Ok(None);
        };
        let window = self.choose_window(kind)?;

        log::debug!(
            "selected NORAD {} / {} / {:?} / {:?}",
            satellite.norad_id,
            profile.name,
            ground_stations,
            window
        );

        Ok(Some(Selection {
            satellite_arn: satellite.satellite_arn,
            mission_profile_arn: profile.mission_profile_arn,
            mission_profile_region: profile.region,
            ground_stations,
            window,
        }))
    }

    async fn choose_satellite(&mut self) -> SessionResult<Option<Satellite>> {
        let satellites = self.api.list_satellites().await?;
        if satellites.is_empty() {
            self.say("No onboarded satellites in the region.");
            return Ok(None);
        }

        let mut choices: Vec<String> = satellites.iter().map(|s| s.norad_id.to_string()).collect();
        choices.push(EXIT.to_string());

        let index = self
            .prompter
            .select("Which satellite would you like to use?", None, &choices)?;
        match satellites.into_iter().nth(index) {
            Some(satellite) => Ok(Some(satellite)),
            None => {
                self.say("No satellite selected. Exiting to main menu.");
                Ok(None)
            }
        }
    }

    async fn choose_mission_profile(&mut self) -> SessionResult<Option<MissionProfile>> {
        let profiles = self.api.list_mission_profiles().await?;
        if profiles.is_empty() {
            self.say("No available mission profiles in this region.");
            return Ok(None);
        }

        let mut choices: Vec<String> = profiles.iter().map(mission_profile_choice).collect();
        choices.push(EXIT.to_string());

        let index = self.prompter.select(
            "Which mission profile would you like to use?",
            Some(MISSION_PROFILE_HEADER),
            &choices,
        )?;
        match profiles.into_iter().nth(index) {
            Some(profile) => Ok(Some(profile)),
            None => {
                self.say("No mission profile selected. Exiting to main menu.");
                Ok(None)
            }
        }
    }

    async fn choose_ground_stations(
        &mut self,
        satellite: &Satellite,
    ) -> SessionResult<Option<Vec<String>>> {
        let stations = self.api.list_ground_stations(&satellite.satellite_id).await?;
        if stations.is_empty() {
            self.say("No onboarded ground stations for this satellite.");
            return Ok(None);
        }

        let choices: Vec<String> = stations.iter().map(|s| s.name.clone()).collect();
        let picked = self.prompter.multi_select(
            "Select the ground stations you'd like to use. Do not select any to exit.",
            None,
            &choices,
        )?;

        let names: Vec<String> = picked
            .into_iter()
            .filter_map(|i| choices.get(i).cloned())
            .collect();
        if names.is_empty() {
            self.say("No ground station selected. Exiting to main menu.");
            return Ok(None);
        }
        Ok(Some(names))
    }

    /// Asks for start and end dates until they form a valid window.
    fn choose_window(&mut self, kind: WindowKind) -> SessionResult<ContactWindow> {
        let rules = self.rules;
        let default_start = rules.default_start(kind).format("%Y-%m-%d").to_string();
        let default_end = rules.default_end(kind).format("%Y-%m-%d").to_string();

        loop {
            let start = self.prompter.input(
                "Enter the contact window start [YYYY-MM-DD].",
                Some(default_start.as_str()),
                validate::parse_date,
            )?;
            if let Err(e) = rules.check_start(kind, start) {
                self.say(format!("{} Try again.", e));
                continue;
            }

            let end = self.prompter.input(
                "Enter the contact window end   [YYYY-MM-DD].",
                Some(default_end.as_str()),
                validate::parse_date,
            )?;
            match rules.check_end(kind, start, end) {
                Ok(window) => return Ok(window),
                Err(e) => self.say(format!("{} Try again.", e)),
            }
        }
    }

    /// Available passes over all selected ground stations, by start time.
    pub(super) async fn fetch_passes(&mut self, selection: &Selection) -> SessionResult<Vec<Pass>> {
        log::info!(
            "fetching passes from {:?} for a {} mission profile",
            selection.ground_stations,
            selection.mission_profile_region
        );
        let mut per_station = Vec::with_capacity(selection.ground_stations.len());
        for station in &selection.ground_stations {
            let query = selection.query(station, &[ContactStatus::Available]);
            per_station.push(self.api.list_passes(&query).await?);
        }
        Ok(merge_by_start(per_station))
    }

    /// Contacts in the given states over all selected ground stations, by start time.
    pub(super) async fn fetch_contacts(
        &mut self,
        selection: &Selection,
        statuses: &[ContactStatus],
    ) -> SessionResult<Vec<Contact>> {
        let mut per_station = Vec::with_capacity(selection.ground_stations.len());
        for station in &selection.ground_stations {
            let query = selection.query(station, statuses);
            per_station.push(self.api.list_contacts(&query).await?);
        }
        Ok(merge_by_start(per_station))
    }
}
