use thiserror::Error;

use crate::config::ConfigError;
use crate::impl_err;
use crate::service::ServiceError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(ConfigError),
    #[error(transparent)]
    Service(ServiceError),
    #[error(transparent)]
    Io(std::io::Error),
    #[error("drag reader stopped: {0}")]
    Join(tokio::task::JoinError),
}

impl_err!(ConfigError, Config);
impl_err!(ServiceError, Service);
impl_err!(std::io::Error, Io);
impl_err!(tokio::task::JoinError, Join);

pub type Result<T> = std::result::Result<T, Error>;
