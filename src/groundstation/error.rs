use aws_sdk_groundstation::error::SdkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("ground station service error: {0}")]
    Service(#[from] aws_sdk_groundstation::Error),
    #[error("response is missing {0}")]
    MissingField(&'static str),
    #[error("invalid timestamp in response: {0}")]
    Timestamp(String),
    #[error("invalid ARN: {0}")]
    InvalidArn(String),
}

impl<E, R> From<SdkError<E, R>> for ApiError
where
    aws_sdk_groundstation::Error: From<SdkError<E, R>>,
{
    fn from(err: SdkError<E, R>) -> Self {
        ApiError::Service(err.into())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
