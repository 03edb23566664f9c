mod api;
mod client;
mod error;
mod types;

pub use api::GroundStationApi;
pub use client::AwsGroundStation;
pub use error::{ApiError, ApiResult};
pub use types::*;
