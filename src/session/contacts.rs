use std::collections::HashMap;

use crate::display::{banner, contact_row, contacts_json, ContactListing, CONTACT_HEADER};
use crate::groundstation::{arn_resource_id, ApiError, Contact, ContactStatus, GroundStationApi};
use crate::prompt::Prompter;
use crate::reconcile::{reconcile, DisplayRow};
use crate::session::{Session, SessionResult};
use crate::window::WindowKind;

const NO_CONTACTS: &str = "\nNo scheduled contacts with specified parameters.\n";

/// A fetched contact listing and the rows shown for it.
struct Listing {
    contacts: Vec<Contact>,
    profile_names: HashMap<String, String>,
    rows: Vec<DisplayRow>,
}

impl Listing {
    fn profile_name(&self, contact: &Contact) -> &str {
        self.profile_names
            .get(&contact.mission_profile_arn)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

impl<A: GroundStationApi, P: Prompter> Session<'_, A, P> {
    pub(super) async fn view(&mut self, json: bool) -> SessionResult<()> {
        let Some(listing) = self.fetch_listing(&ContactStatus::HISTORY).await? else {
            return Ok(());
        };

        if json {
            let entries: Vec<ContactListing> = listing
                .contacts
                .iter()
                .map(|contact| ContactListing {
                    contact,
                    mission_profile_name: listing.profile_name(contact),
                })
                .collect();
            self.prompter.output(&contacts_json(&entries)?);
        }
        if listing.contacts.is_empty() {
            self.say(NO_CONTACTS);
        } else if !json {
            self.print_listing(&listing);
        }
        Ok(())
    }

    pub(super) async fn cancel(&mut self) -> SessionResult<()> {
        let Some(listing) = self.fetch_listing(&[ContactStatus::Scheduled]).await? else {
            return Ok(());
        };
        if listing.contacts.is_empty() {
            self.say(NO_CONTACTS);
            return Ok(());
        }
        self.print_listing(&listing);

        let texts: Vec<String> = listing.rows.iter().map(|r| r.text.clone()).collect();
        let picked = self.prompter.multi_select(
            "Select the contacts you'd like to cancel. Do not select any to exit.",
            Some(CONTACT_HEADER),
            &texts,
        )?;
        if picked.is_empty() {
            self.say("No contacts selected. Exiting to main menu.");
            return Ok(());
        }

        let selected: Vec<&DisplayRow> = picked
            .iter()
            .filter_map(|i| listing.rows.get(*i))
            .collect();
        let targets = reconcile(&selected, &listing.contacts);
        if targets.is_empty() {
            self.say("None of the selected contacts were found. Exiting to main menu.");
            return Ok(());
        }

        self.say(banner("Listing contacts to cancel"));
        self.say(CONTACT_HEADER);
        for contact in &targets {
            self.say(contact_row(contact, listing.profile_name(contact)));
        }
        self.say("Cancelling on demand contacts incurs their full cost!");

        if !self
            .prompter
            .confirm("Are you sure you want to cancel these contacts?", true)?
        {
            self.say("No contacts canceled. Exiting to main menu.");
            return Ok(());
        }

        for contact in targets {
            self.say("Cancelling contact");
            self.say(CONTACT_HEADER);
            self.say(contact_row(contact, listing.profile_name(contact)));

            let cancelled = self.api.cancel_contact(&contact.contact_id).await?;
            self.say(format!("Successfully canceled contact with ID: {}", cancelled));
            self.say("");
        }

        Ok(())
    }

    /// Contacts in the chosen window, possibly none. `None` when the
    /// operator backed out of the selection.
    async fn fetch_listing(
        &mut self,
        statuses: &[ContactStatus],
    ) -> SessionResult<Option<Listing>> {
        let Some(selection) = self.select(WindowKind::Any).await? else {
            return Ok(None);
        };
        let contacts = self.fetch_contacts(&selection, statuses).await?;

        let profile_names = self.mission_profile_names(&contacts).await?;
        let rows = contacts
            .iter()
            .map(|c| {
                let name = profile_names
                    .get(&c.mission_profile_arn)
                    .map(String::as_str)
                    .unwrap_or_default();
                DisplayRow::new(c, contact_row(c, name))
            })
            .collect();

        Ok(Some(Listing {
            contacts,
            profile_names,
            rows,
        }))
    }

    /// Mission profile names by ARN, one lookup per distinct profile.
    async fn mission_profile_names(
        &mut self,
        contacts: &[Contact],
    ) -> SessionResult<HashMap<String, String>> {
        let mut names = HashMap::new();
        for contact in contacts {
            let arn = &contact.mission_profile_arn;
            if names.contains_key(arn) {
                continue;
            }
            let id = arn_resource_id(arn).ok_or_else(|| ApiError::InvalidArn(arn.clone()))?;
            let name = self.api.mission_profile_name(id).await?;
            names.insert(arn.clone(), name);
        }
        Ok(names)
    }

    fn print_listing(&mut self, listing: &Listing) {
        self.say(banner("Listing contacts"));
        self.say(CONTACT_HEADER);
        for row in &listing.rows {
            self.say(&row.text);
        }
        self.say("");
    }
}
