use chrono::Duration;

use crate::groundstation::{Pass, TimeWindow};

/// How much of a pass a contact should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactLength {
    WholePass,
    Partial(Duration),
}

impl ContactLength {
    pub fn minutes(minutes: u32) -> Self {
        ContactLength::Partial(Duration::minutes(minutes as i64))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassRequirements {
    pub min_elevation_deg: f64,
    pub length: ContactLength,
}

impl PassRequirements {
    pub fn accepts(&self, pass: &Pass) -> bool {
        if pass.max_elevation_deg < self.min_elevation_deg {
            return false;
        }
        match self.length {
            ContactLength::WholePass => true,
            ContactLength::Partial(required) => pass.duration() > required,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub eligible: Vec<Pass>,
    /// Longest of all fetched passes, reported when nothing is eligible.
    pub longest: Option<Duration>,
}

pub fn filter_passes(passes: &[Pass], requirements: &PassRequirements) -> FilterOutcome {
    let eligible: Vec<Pass> = passes
        .iter()
        .filter(|p| requirements.accepts(p))
        .cloned()
        .collect();

    let longest = if eligible.is_empty() {
        passes.iter().map(|p| p.duration()).max()
    } else {
        None
    };

    log::debug!(
        "{} of {} passes meet {:?}",
        eligible.len(),
        passes.len(),
        requirements
    );

    FilterOutcome { eligible, longest }
}
