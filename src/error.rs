use crate::fetch::error::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PollenError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("No pollen data found on {0}")]
    NoData(String),
}
