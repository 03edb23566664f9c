use chrono::{DateTime, Duration, Utc};

use crate::groundstation::{Pass, TimeWindow};
use crate::window::error::WindowError;
use crate::window::filter::ContactLength;

/// The interval that will actually be reserved for a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedContact {
    pub pass: Pass,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow for PlannedContact {
    fn start(&self) -> DateTime<Utc> {
        self.start
    }

    fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

/// Shorter contacts are centered in the pass, where elevation peaks.
pub fn resolve_contact(pass: &Pass, length: ContactLength) -> Result<PlannedContact, WindowError> {
    let (start, end) = match length {
        ContactLength::WholePass => (pass.start, pass.end),
        ContactLength::Partial(requested) => {
            let available = pass.duration();
            if requested <= Duration::zero() || requested >= available {
                return Err(WindowError::ContactTooLong {
                    requested,
                    available,
                });
            }
            // truncated to whole seconds
            let offset = Duration::seconds((available - requested).num_milliseconds() / 2 / 1000);
            (pass.start + offset, pass.end - offset)
        }
    };

    Ok(PlannedContact {
        pass: pass.clone(),
        start,
        end,
    })
}
