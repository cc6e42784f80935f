mod compute;

pub use compute::ComputeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    InputOutput(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Compute(#[from] ComputeError),
}

pub type Result<T> = std::result::Result<T, Error>;
