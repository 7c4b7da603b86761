use dioxus::prelude::*;
use services::{AssignmentServiceError, NoteServiceError, SettingsServiceError, StorageError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    /// The change is live in this session but the file write failed.
    NotPersisted,
    /// A form was rejected; carries the user-facing reason.
    Invalid(String),
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.".to_string(),
            ViewError::NotPersisted => "Saved for now, but not saved to disk.".to_string(),
            ViewError::Invalid(reason) => reason.clone(),
        }
    }

    /// Funnel for domain validation failures.
    #[must_use]
    pub fn invalid(err: impl Into<portal_core::Error>) -> Self {
        ViewError::Invalid(err.into().to_string())
    }
}

fn from_storage(err: &StorageError) -> ViewError {
    match err {
        StorageError::Io(_) | StorageError::Serialization(_) => ViewError::NotPersisted,
        _ => ViewError::Unknown,
    }
}

impl From<NoteServiceError> for ViewError {
    fn from(err: NoteServiceError) -> Self {
        match &err {
            NoteServiceError::Storage(storage) => from_storage(storage),
            _ => ViewError::Unknown,
        }
    }
}

impl From<AssignmentServiceError> for ViewError {
    fn from(err: AssignmentServiceError) -> Self {
        match &err {
            AssignmentServiceError::Storage(storage) => from_storage(storage),
            _ => ViewError::Unknown,
        }
    }
}

impl From<SettingsServiceError> for ViewError {
    fn from(err: SettingsServiceError) -> Self {
        match err {
            SettingsServiceError::Settings(settings) => ViewError::invalid(settings),
            SettingsServiceError::Storage(storage) => from_storage(&storage),
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
