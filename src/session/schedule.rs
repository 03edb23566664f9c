use crate::display::{banner, format_minutes, pass_row, planned_row, PASS_HEADER, PLANNED_HEADER};
use crate::groundstation::{GroundStationApi, ReservationRequest};
use crate::prompt::{validate, Prompter};
use crate::reconcile::{reconcile, DisplayRow};
use crate::session::{Session, SessionResult};
use crate::window::{
    filter_passes, resolve_contact, ContactLength, PassRequirements, PlannedContact, WindowKind,
};

impl<A: GroundStationApi, P: Prompter> Session<'_, A, P> {
    pub(super) async fn schedule(&mut self) -> SessionResult<()> {
        let Some(selection) = self.select(WindowKind::Upcoming).await? else {
            return Ok(());
        };
        let passes = self.fetch_passes(&selection).await?;

        let min_elevation = self.prompter.input(
            "Enter the minimum elevation requirement in degrees",
            None,
            validate::parse_elevation,
        )?;
        let whole_pass = self
            .prompter
            .confirm("Would you like to use the whole pass for the contact?", true)?;

        let (length, requirement_text) = if whole_pass {
            (
                ContactLength::WholePass,
                format!("{} degree elevation", min_elevation),
            )
        } else {
            self.say("Contacts shorter than the complete pass are scheduled in the middle of the contact window to maximize elevation.");
            let minutes = self.prompter.input(
                "Enter the required contact duration in minutes",
                None,
                validate::parse_contact_minutes,
            )?;
            (
                ContactLength::minutes(minutes),
                format!(
                    "{} degree elevation and {} minutes duration",
                    min_elevation, minutes
                ),
            )
        };

        let requirements = PassRequirements {
            min_elevation_deg: min_elevation as f64,
            length,
        };
        let outcome = filter_passes(&passes, &requirements);

        if outcome.eligible.is_empty() {
            self.say(format!(
                "NO AVAILABLE passes that meet {} requirements.",
                requirement_text
            ));
            if let Some(longest) = outcome.longest {
                self.say(format!(
                    "The longest pass duration in this window is {} minutes",
                    format_minutes(longest)
                ));
            }
            return Ok(());
        }

        self.say(format!(
            "There are {} passes that meet the {} requirements.",
            outcome.eligible.len(),
            requirement_text
        ));

        let rows: Vec<DisplayRow> = outcome
            .eligible
            .iter()
            .map(|p| DisplayRow::new(p, pass_row(p)))
            .collect();
        let texts: Vec<String> = rows.iter().map(|r| r.text.clone()).collect();
        let picked = self.prompter.multi_select(
            "Select the passes you'd like to use. Do not select any to exit.",
            Some(PASS_HEADER),
            &texts,
        )?;
        if picked.is_empty() {
            self.say("No passes selected. Exiting to main menu.");
            return Ok(());
        }

        let selected: Vec<&DisplayRow> = picked.iter().filter_map(|i| rows.get(*i)).collect();
        let planned = reconcile(&selected, &outcome.eligible)
            .into_iter()
            .map(|pass| resolve_contact(pass, length))
            .collect::<Result<Vec<PlannedContact>, _>>()?;

        self.say(banner("Listing selected contacts"));
        self.say(PLANNED_HEADER);
        for contact in &planned {
            self.say(planned_row(contact));
        }

        if !self
            .prompter
            .confirm("Are you sure you want to schedule these contacts?", true)?
        {
            self.say("No contacts scheduled. Exiting to main menu.");
            return Ok(());
        }

        for contact in &planned {
            self.say("Scheduling contact");
            self.say(PLANNED_HEADER);
            self.say(planned_row(contact));

            let contact_id = self
                .api
                .reserve_contact(&ReservationRequest {
                    satellite_arn: selection.satellite_arn.clone(),
                    mission_profile_arn: selection.mission_profile_arn.clone(),
                    ground_station: contact.pass.ground_station.clone(),
                    start: contact.start,
                    end: contact.end,
                })
                .await?;
            self.say(format!("Scheduled contact ID: {}", contact_id));
        }

        Ok(())
    }
}
