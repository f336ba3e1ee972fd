use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("could not parse coordinate pair from {0:?}, expected `lat,lng`")]
    Unparseable(String),
}
