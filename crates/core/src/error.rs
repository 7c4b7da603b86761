use thiserror::Error;

use crate::model::{KeyParseError, LoginError, ProgressError, SettingsError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Key(#[from] KeyParseError),
    #[error(transparent)]
    Login(#[from] LoginError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
