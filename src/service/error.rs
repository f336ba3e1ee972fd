use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0} is not a valid service url: {1}")]
    InvalidEndpoint(String, String),

    #[error("could not build http client: {0}")]
    Client(#[from] reqwest::Error),
}
