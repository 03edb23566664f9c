use std::future::Future;

use aws_config::{meta::region::RegionProviderChain, BehaviorVersion, Region};
use aws_sdk_groundstation::primitives::DateTime as AwsDateTime;
use aws_sdk_groundstation::types::{ContactData, ContactStatus as AwsContactStatus};
use aws_sdk_groundstation::Client;
use aws_smithy_types_convert::date_time::DateTimeExt;
use chrono::{DateTime, Utc};

use crate::groundstation::{
    ApiError, ApiResult, Contact, ContactQuery, ContactStatus, GroundStation, GroundStationApi,
    MissionProfile, Pass, ReservationRequest, Satellite,
};

/// Ground Station client backed by the AWS SDK. Credentials come from the
/// default provider chain.
pub struct AwsGroundStation {
    client: Client,
    page_size: i32,
}

/// One page of a list call: its items and the token of the next page.
type Page<T> = (Vec<T>, Option<String>);

/// Follows `nextToken` until the service stops returning one.
async fn collect_pages<T, F, Fut>(operation: &str, mut fetch: F) -> ApiResult<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = ApiResult<Page<T>>>,
{
    let mut items = Vec::new();
    let mut next_token = None;
    let mut pages = 0;

    loop {
        let (page, token) = fetch(next_token.take()).await?;
        pages += 1;
        items.extend(page);
        match token {
            Some(token) if !token.is_empty() => next_token = Some(token),
            _ => break,
        }
    }

    log::debug!("{}: {} records in {} page(s)", operation, items.len(), pages);
    Ok(items)
}

impl AwsGroundStation {
    pub async fn connect(region: Option<String>, profile: Option<String>, page_size: i32) -> Self {
        let region_provider =
            RegionProviderChain::first_try(region.map(Region::new)).or_default_provider();
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        let sdk_config = loader.load().await;

        log::info!(
            "Ground Station client for region {}",
            sdk_config
                .region()
                .map(|r| r.to_string())
                .unwrap_or_else(|| "<unset>".into())
        );

        Self {
            client: Client::new(&sdk_config),
            page_size,
        }
    }

    async fn fetch_contact_data(&self, query: &ContactQuery) -> ApiResult<Vec<ContactData>> {
        let statuses: Vec<AwsContactStatus> = query
            .statuses
            .iter()
            .map(|s| AwsContactStatus::from(s.as_ref()))
            .collect();
        let client = &self.client;
        let page_size = self.page_size;

        log::debug!("ListContacts {} {:?}", query.ground_station, query.statuses);
        collect_pages("ListContacts", |token| {
            let statuses = statuses.clone();
            async move {
                let page = client
                    .list_contacts()
                    .satellite_arn(&query.satellite_arn)
                    .mission_profile_arn(&query.mission_profile_arn)
                    .ground_station(&query.ground_station)
                    .start_time(AwsDateTime::from_chrono_utc(query.start))
                    .end_time(AwsDateTime::from_chrono_utc(query.end))
                    .set_status_list(Some(statuses))
                    .max_results(page_size)
                    .set_next_token(token)
                    .send()
                    .await?;
                let next = page.next_token().map(String::from);
                Ok::<_, ApiError>((page.contact_list().to_vec(), next))
            }
        })
        .await
    }
}

impl GroundStationApi for AwsGroundStation {
    async fn list_satellites(&self) -> ApiResult<Vec<Satellite>> {
        let client = &self.client;
        collect_pages("ListSatellites", |token| async move {
            let page = client.list_satellites().set_next_token(token).send().await?;
            let satellites = page
                .satellites()
                .iter()
                .map(|item| {
                    Ok(Satellite {
                        satellite_id: required(item.satellite_id(), "satelliteId")?,
                        satellite_arn: required(item.satellite_arn(), "satelliteArn")?,
                        norad_id: item.norad_satellite_id(),
                    })
                })
                .collect::<ApiResult<Vec<_>>>()?;
            Ok::<_, ApiError>((satellites, page.next_token().map(String::from)))
        })
        .await
    }

    async fn list_mission_profiles(&self) -> ApiResult<Vec<MissionProfile>> {
        let client = &self.client;
        collect_pages("ListMissionProfiles", |token| async move {
            let page = client
                .list_mission_profiles()
                .set_next_token(token)
                .send()
                .await?;
            let profiles = page
                .mission_profile_list()
                .iter()
                .map(|item| {
                    Ok(MissionProfile {
                        mission_profile_arn: required(
                            item.mission_profile_arn(),
                            "missionProfileArn",
                        )?,
                        name: item.name().unwrap_or_default().to_string(),
                        region: item.region().unwrap_or_default().to_string(),
                    })
                })
                .collect::<ApiResult<Vec<_>>>()?;
            Ok::<_, ApiError>((profiles, page.next_token().map(String::from)))
        })
        .await
    }

    async fn list_ground_stations(&self, satellite_id: &str) -> ApiResult<Vec<GroundStation>> {
        let client = &self.client;
        collect_pages("ListGroundStations", |token| async move {
            let page = client
                .list_ground_stations()
                .satellite_id(satellite_id)
                .set_next_token(token)
                .send()
                .await?;
            let stations = page
                .ground_station_list()
                .iter()
                .map(|item| {
                    Ok(GroundStation {
                        name: required(item.ground_station_name(), "groundStationName")?,
                    })
                })
                .collect::<ApiResult<Vec<_>>>()?;
            Ok::<_, ApiError>((stations, page.next_token().map(String::from)))
        })
        .await
    }

    async fn list_passes(&self, query: &ContactQuery) -> ApiResult<Vec<Pass>> {
        self.fetch_contact_data(query)
            .await?
            .iter()
            .map(pass_from_data)
            .collect()
    }

    async fn list_contacts(&self, query: &ContactQuery) -> ApiResult<Vec<Contact>> {
        self.fetch_contact_data(query)
            .await?
            .iter()
            .map(contact_from_data)
            .collect()
    }

    async fn reserve_contact(&self, request: &ReservationRequest) -> ApiResult<String> {
        log::info!(
            "ReserveContact {} {} - {}",
            request.ground_station,
            request.start,
            request.end
        );

        let reservation = self
            .client
            .reserve_contact()
            .satellite_arn(&request.satellite_arn)
            .mission_profile_arn(&request.mission_profile_arn)
            .ground_station(&request.ground_station)
            .start_time(AwsDateTime::from_chrono_utc(request.start))
            .end_time(AwsDateTime::from_chrono_utc(request.end))
            .send()
            .await?;

        required(reservation.contact_id(), "contactId")
    }

    async fn cancel_contact(&self, contact_id: &str) -> ApiResult<String> {
        log::info!("CancelContact {}", contact_id);

        let cancellation = self
            .client
            .cancel_contact()
            .contact_id(contact_id)
            .send()
            .await?;

        required(cancellation.contact_id(), "contactId")
    }

    async fn mission_profile_name(&self, mission_profile_id: &str) -> ApiResult<String> {
        let profile = self
            .client
            .get_mission_profile()
            .mission_profile_id(mission_profile_id)
            .send()
            .await?;

        required(profile.name(), "name")
    }
}

fn pass_from_data(data: &ContactData) -> ApiResult<Pass> {
    Ok(Pass {
        start: to_utc(data.start_time(), "startTime")?,
        end: to_utc(data.end_time(), "endTime")?,
        max_elevation_deg: data
            .maximum_elevation()
            .map(|e| e.value())
            .unwrap_or_default(),
        ground_station: required(data.ground_station(), "groundStation")?,
        region: data.region().unwrap_or_default().to_string(),
    })
}

fn contact_from_data(data: &ContactData) -> ApiResult<Contact> {
    Ok(Contact {
        contact_id: required(data.contact_id(), "contactId")?,
        status: data
            .contact_status()
            .map(|s| ContactStatus::from_api(s.as_str()))
            .unwrap_or(ContactStatus::Unknown),
        mission_profile_arn: data.mission_profile_arn().unwrap_or_default().to_string(),
        pass: pass_from_data(data)?,
    })
}

fn to_utc(value: Option<&AwsDateTime>, field: &'static str) -> ApiResult<DateTime<Utc>> {
    value
        .ok_or(ApiError::MissingField(field))?
        .to_chrono_utc()
        .map_err(|e| ApiError::Timestamp(e.to_string()))
}

fn required(value: Option<&str>, field: &'static str) -> ApiResult<String> {
    value.map(String::from).ok_or(ApiError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_groundstation::types::{AngleUnits, Elevation};
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::future::ready;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, h, m, 0).unwrap()
    }

    fn elevation(deg: f64) -> Elevation {
        Elevation::builder()
            .value(deg)
            .unit(AngleUnits::DegreeAngle)
            .build()
            .unwrap()
    }

    fn contact_data() -> aws_sdk_groundstation::types::builders::ContactDataBuilder {
        ContactData::builder()
            .contact_id("c-1")
            .mission_profile_arn("arn:aws:groundstation:us-east-2:1:mission-profile/mp-1")
            .start_time(AwsDateTime::from_chrono_utc(at(9, 0)))
            .end_time(AwsDateTime::from_chrono_utc(at(9, 10)))
            .maximum_elevation(elevation(45.5))
            .ground_station("Ohio 1")
            .region("us-east-2")
            .contact_status(AwsContactStatus::from("SCHEDULED"))
    }

    #[test]
    fn pass_fields_are_mapped() {
        let pass = pass_from_data(&contact_data().build()).unwrap();
        assert_eq!(pass.start, at(9, 0));
        assert_eq!(pass.end, at(9, 10));
        assert_eq!(pass.max_elevation_deg, 45.5);
        assert_eq!(pass.ground_station, "Ohio 1");
        assert_eq!(pass.region, "us-east-2");
    }

    #[test]
    fn missing_ground_station_is_an_error() {
        let data = contact_data().set_ground_station(None).build();
        assert!(matches!(
            pass_from_data(&data),
            Err(ApiError::MissingField("groundStation"))
        ));
    }

    #[test]
    fn missing_elevation_defaults_to_zero() {
        let data = contact_data().set_maximum_elevation(None).build();
        assert_eq!(pass_from_data(&data).unwrap().max_elevation_deg, 0.0);
    }

    #[test]
    fn timestamps_convert_to_utc() {
        let value = AwsDateTime::from_secs(1_714_554_000);
        assert_eq!(to_utc(Some(&value), "startTime").unwrap(), at(9, 0));
        assert!(matches!(
            to_utc(None, "endTime"),
            Err(ApiError::MissingField("endTime"))
        ));
        assert!(matches!(
            to_utc(Some(&AwsDateTime::from_secs(i64::MAX)), "endTime"),
            Err(ApiError::Timestamp(_))
        ));
    }

    #[test]
    fn contact_status_is_mapped() {
        let contact = contact_from_data(&contact_data().build()).unwrap();
        assert_eq!(contact.contact_id, "c-1");
        assert_eq!(contact.status, ContactStatus::Scheduled);
        assert_eq!(contact.pass.ground_station, "Ohio 1");

        let data = contact_data()
            .contact_status(AwsContactStatus::from("AWS_CANCELLED"))
            .build();
        assert_eq!(contact_from_data(&data).unwrap().status, ContactStatus::AwsCancelled);

        let data = contact_data()
            .contact_status(AwsContactStatus::from("SOMETHING_NEW"))
            .build();
        assert_eq!(contact_from_data(&data).unwrap().status, ContactStatus::Unknown);

        let data = contact_data().set_contact_status(None).build();
        assert_eq!(contact_from_data(&data).unwrap().status, ContactStatus::Unknown);

        let data = contact_data().set_contact_id(None).build();
        assert!(matches!(
            contact_from_data(&data),
            Err(ApiError::MissingField("contactId"))
        ));
    }

    #[tokio::test]
    async fn pages_are_followed_until_no_token() {
        let mut pages: VecDeque<Page<u32>> = VecDeque::from([
            (vec![1, 2], Some("t1".to_string())),
            (vec![], Some("t2".to_string())),
            (vec![3], None),
        ]);
        let tokens = RefCell::new(Vec::new());

        let items = collect_pages("ListContacts", |token| {
            tokens.borrow_mut().push(token);
            ready(Ok(pages.pop_front().unwrap()))
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(
            tokens.into_inner(),
            vec![None, Some("t1".to_string()), Some("t2".to_string())]
        );
    }

    #[tokio::test]
    async fn empty_token_ends_paging() {
        let mut calls = 0;
        let items = collect_pages("ListSatellites", |_| {
            calls += 1;
            ready(Ok((vec!["a"], Some(String::new()))))
        })
        .await
        .unwrap();

        assert_eq!(items, vec!["a"]);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn failing_page_stops_paging() {
        let mut calls = 0;
        let result: ApiResult<Vec<u32>> = collect_pages("ListContacts", |_| {
            calls += 1;
            ready(if calls == 1 {
                Ok((vec![1], Some("t1".to_string())))
            } else {
                Err(ApiError::MissingField("contactId"))
            })
        })
        .await;

        assert!(matches!(result, Err(ApiError::MissingField("contactId"))));
        assert_eq!(calls, 2);
    }
}
