//! Mapping rows picked in a selection list back to the records they show.

use chrono::{DateTime, Utc};

use crate::groundstation::{Contact, Pass};

/// Identity of the record behind a display row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowKey {
    pub contact_id: Option<String>,
    pub start: DateTime<Utc>,
    pub ground_station: String,
}

impl RowKey {
    pub fn matches(
        &self,
        contact_id: Option<&str>,
        start: DateTime<Utc>,
        ground_station: &str,
    ) -> bool {
        match (&self.contact_id, contact_id) {
            (Some(key), Some(id)) => key == id,
            _ => self.start == start && self.ground_station == ground_station,
        }
    }
}

pub trait Keyed {
    fn row_key(&self) -> RowKey;
    fn matches_key(&self, key: &RowKey) -> bool;
}

impl Keyed for Pass {
    fn row_key(&self) -> RowKey {
        RowKey {
            contact_id: None,
            start: self.start,
            ground_station: self.ground_station.clone(),
        }
    }

    fn matches_key(&self, key: &RowKey) -> bool {
        key.matches(None, self.start, &self.ground_station)
    }
}

impl Keyed for Contact {
    fn row_key(&self) -> RowKey {
        RowKey {
            contact_id: Some(self.contact_id.clone()),
            start: self.pass.start,
            ground_station: self.pass.ground_station.clone(),
        }
    }

    fn matches_key(&self, key: &RowKey) -> bool {
        key.matches(Some(&self.contact_id), self.pass.start, &self.pass.ground_station)
    }
}

/// A line of a selection list together with the key of its record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub text: String,
    pub key: RowKey,
}

impl DisplayRow {
    pub fn new<T: Keyed>(record: &T, text: String) -> Self {
        Self {
            text,
            key: record.row_key(),
        }
    }
}

/// Records for the selected rows, in selection order. A row whose key is not
/// in `records` yields nothing.
pub fn reconcile<'a, T: Keyed>(selected: &[&DisplayRow], records: &'a [T]) -> Vec<&'a T> {
    selected
        .iter()
        .filter_map(|row| {
            let found = records.iter().find(|r| r.matches_key(&row.key));
            if found.is_none() {
                log::warn!("no record for selected row: {}", row.text.trim());
            }
            found
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::testing::{contact_at, pass_at, utc};

    #[test]
    fn contacts_match_by_id() {
        let contacts = vec![
            contact_at("c-1", "09:00:00", "09:10:00", "Ohio 1"),
            contact_at("c-2", "10:00:00", "10:10:00", "Ohio 1"),
        ];
        let row = DisplayRow::new(&contacts[1], "second".into());
        assert_eq!(reconcile(&[&row], &contacts), vec![&contacts[1]]);
    }

    #[test]
    fn same_start_on_different_stations_stays_distinct() {
        let contacts = vec![
            contact_at("c-1", "09:00:00", "09:10:00", "Ohio 1"),
            contact_at("c-2", "09:00:00", "09:08:00", "Oregon 1"),
        ];
        let row = DisplayRow::new(&contacts[1], "oregon".into());
        assert_eq!(reconcile(&[&row], &contacts), vec![&contacts[1]]);

        let mut passes = vec![
            pass_at("09:00:00", "09:10:00", 40.0),
            pass_at("09:00:00", "09:09:00", 60.0),
        ];
        passes[1].ground_station = "Oregon 1".into();
        let row = DisplayRow::new(&passes[1], "oregon".into());
        assert_eq!(reconcile(&[&row], &passes), vec![&passes[1]]);
    }

    #[test]
    fn unmatched_row_yields_no_record() {
        let contacts = vec![contact_at("c-1", "09:00:00", "09:10:00", "Ohio 1")];
        let stale = DisplayRow {
            text: "stale".into(),
            key: RowKey {
                contact_id: Some("c-9".into()),
                start: utc("11:00:00"),
                ground_station: "Ohio 1".into(),
            },
        };
        let known = DisplayRow::new(&contacts[0], "known".into());
        assert_eq!(reconcile(&[&stale, &known], &contacts), vec![&contacts[0]]);
        assert!(reconcile(&[&stale], &contacts).is_empty());
    }
}
