use std::sync::Arc;

use portal_core::model::{NotificationSettings, PasswordChange};
use storage::repository::SettingsRepository;

use crate::error::SettingsServiceError;

#[derive(Clone)]
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    #[must_use]
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Load persisted settings (or defaults if missing).
    ///
    /// # Errors
    ///
    /// Returns `SettingsServiceError` on storage failures.
    pub async fn load(&self) -> Result<NotificationSettings, SettingsServiceError> {
        let settings = self.repo.get_settings().await?;
        Ok(settings.unwrap_or_default())
    }

    /// Persist the notification preference.
    ///
    /// # Errors
    ///
    /// Returns `SettingsServiceError::Storage` if persistence fails.
    pub async fn save(
        &self,
        settings: NotificationSettings,
    ) -> Result<NotificationSettings, SettingsServiceError> {
        self.repo.save_settings(&settings).await?;
        log::info!(
            "email notifications {}",
            if settings.email_notifications { "on" } else { "off" }
        );
        Ok(settings)
    }

    /// Validate a password change. There is no account backend, so an accepted
    /// change is only logged.
    ///
    /// # Errors
    ///
    /// Returns `SettingsServiceError::Settings` if either field is blank.
    pub fn change_password(&self, change: &PasswordChange) -> Result<(), SettingsServiceError> {
        change.validate()?;
        log::info!("password change accepted");
        Ok(())
    }
}
